//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the service handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout)
//! - Serve connections from a bound listener until shutdown

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::http::cors::{cors_middleware, CorsPolicy};
use crate::http::handlers::{health, not_found, root};
use crate::service::ServiceInfo;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub info: Arc<ServiceInfo>,
}

/// HTTP server for the matching service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let info = ServiceInfo::default();
        tracing::debug!(
            name = info.name,
            version = info.version,
            description = info.description,
            "Initializing application"
        );

        let state = AppState {
            info: Arc::new(info),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/health", get(health))
            .route("/", get(root))
            .fallback(not_found)
            .method_not_allowed_fallback(not_found)
            .with_state(state);

        Self::with_middleware(routes, config)
    }

    /// Wrap `routes` in the middleware stack.
    ///
    /// Outermost first: request ID, trace span, CORS, handler timeout. The
    /// timeout covers handler execution only; reading request heads is
    /// bounded by hyper, not here.
    #[allow(deprecated)]
    fn with_middleware(routes: Router, config: &ServiceConfig) -> Router {
        let cors = Arc::new(CorsPolicy::new(&config.cors));

        routes
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn_with_state(cors, cors_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` resolves. In-flight requests are drained before returning.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServiceError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener
            .local_addr()
            .map_err(|source| ServiceError::Serve {
                addr: ([0, 0, 0, 0], self.config.listener.port).into(),
                source,
            })?;

        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await
            .map_err(|source| ServiceError::Serve { addr, source })?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
