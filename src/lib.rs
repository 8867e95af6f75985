//! WeBond AI Matching Service.
//!
//! HTTP bootstrap for the matching service: a health probe, a root
//! informational endpoint and a permissive cross-origin policy.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::ServiceInfo;
