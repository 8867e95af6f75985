//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span)
//!     → cors.rs (answer preflight, stamp CORS headers)
//!     → handlers.rs (/health, /, 404 fallback)
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod server;

pub use cors::CorsPolicy;
pub use handlers::{HealthResponse, RootResponse};
pub use server::{AppState, HttpServer, X_REQUEST_ID};
