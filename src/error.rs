//! Service-level error type.

use std::net::SocketAddr;

use crate::config::ValidationError;
use crate::net::ListenerError;

/// Fatal errors that stop the service from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration failed semantic validation.
    #[error("invalid configuration: {}", join(.0))]
    Config(Vec<ValidationError>),

    /// The listener could not be bound.
    #[error(transparent)]
    Bind(#[from] ListenerError),

    /// The serve loop failed after startup.
    #[error("server error on {addr}: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
