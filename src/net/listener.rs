//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Turn bind failures into a typed, fatal error
//!
//! No retry: an address that is in use or forbidden stops startup.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The configured address is not a valid socket address.
    #[error("invalid bind address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

impl ListenerError {
    /// The underlying I/O error kind, if binding itself failed.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            ListenerError::Bind { source, .. } => Some(source.kind()),
            ListenerError::InvalidAddress { .. } => None,
        }
    }
}

/// Bind a TCP listener on the configured host and port.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address = config.bind_address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|source| ListenerError::InvalidAddress {
            address: address.clone(),
            source,
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
