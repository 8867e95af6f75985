//! Startup orchestration.
//!
//! Resolve config → init logging → validate → bind → serve.
//! Any startup error is fatal and returned to the caller.

use std::future::Future;

use crate::config::{schema::DEFAULT_PORT, validate_config, ServiceConfig};
use crate::error::ServiceError;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net;
use crate::observability::init_logging;

/// Run the service from the process environment until a termination signal.
pub async fn run() -> Result<(), ServiceError> {
    let (config, rejected_port) = ServiceConfig::from_env();
    init_logging(&config.observability);

    tracing::info!(
        version = crate::service::SERVICE_VERSION,
        "{} starting",
        crate::service::SERVICE_NAME
    );
    if let Some(rejected) = rejected_port {
        tracing::warn!(error = %rejected, default = DEFAULT_PORT, "Ignoring PORT");
    }

    let shutdown = Shutdown::new();
    shutdown.trigger_on_os_signal();

    serve(config, shutdown.signalled()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Validate `config`, bind its listener and serve until `shutdown` resolves.
pub async fn serve<F>(config: ServiceConfig, shutdown: F) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    validate_config(&config).map_err(ServiceError::Config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        cors_origins = ?config.cors.allow_origins,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;
    HttpServer::new(config).run(listener, shutdown).await
}
