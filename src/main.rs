//! WeBond AI Matching Service
//!
//! ```text
//!     Client Request
//!     ──────────────▶ listener ──▶ request id ──▶ trace ──▶ cors ──▶ timeout ──▶ router
//!                                                                              │
//!                                                          /health, /, 404 ◀───┘
//! ```
//!
//! Configuration comes from the environment (`PORT`, `RUST_LOG`, optional
//! `.env`). A bind failure terminates the process with a non-zero exit.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = ai_matching::lifecycle::run().await {
        tracing::error!(error = %e, "Service failed to run");
        return Err(e.into());
    }
    Ok(())
}
