//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → env.rs (resolve PORT, fall back to defaults)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → passed by value into HttpServer
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never changes afterwards
//! - All fields have defaults so no configuration is required
//! - Unparseable environment values fall back silently to defaults

pub mod env;
pub mod schema;
pub mod validation;

pub use env::InvalidPort;
pub use schema::{CorsConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
