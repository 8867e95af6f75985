//! Observability subsystem.
//!
//! Structured logs via `tracing`; every request runs inside a span carrying
//! its method, path and request ID.

pub mod logging;

pub use logging::init_logging;
