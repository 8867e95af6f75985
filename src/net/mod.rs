//! Network layer.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (parse address, bind TCP)
//!     → TcpListener handed to http::HttpServer::run
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
