//! Cross-origin resource sharing middleware.
//!
//! Applies the configured policy to every response, including fallbacks and
//! timeouts. Preflight requests (`OPTIONS` carrying
//! `Access-Control-Request-Method`) are answered here and never reach a route.

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{self, HeaderMap, HeaderValue},
        Method, Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::config::CorsConfig;

const WILDCARD: &str = "*";

/// Precomputed header values for a [`CorsConfig`].
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: AllowOrigin,
    allow_credentials: bool,
    allow_methods: Option<HeaderValue>,
    allow_headers: Option<HeaderValue>,
    max_age: HeaderValue,
}

#[derive(Debug, Clone)]
enum AllowOrigin {
    Any,
    List(Vec<HeaderValue>),
}

impl CorsPolicy {
    /// Build the policy from configuration.
    ///
    /// Entries that are not valid header values are dropped;
    /// `validate_config` rejects them before this point.
    pub fn new(config: &CorsConfig) -> Self {
        let origins = if config.allow_origins.iter().any(|o| o == WILDCARD) {
            AllowOrigin::Any
        } else {
            AllowOrigin::List(
                config
                    .allow_origins
                    .iter()
                    .filter_map(|o| HeaderValue::from_str(o).ok())
                    .collect(),
            )
        };

        Self {
            origins,
            allow_credentials: config.allow_credentials,
            allow_methods: join_list(&config.allow_methods),
            allow_headers: join_list(&config.allow_headers),
            max_age: HeaderValue::from(config.max_age_secs),
        }
    }

    /// Insert the policy headers for a request carrying `origin`.
    fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        match &self.origins {
            AllowOrigin::Any => {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static(WILDCARD),
                );
            }
            AllowOrigin::List(allowed) => {
                headers.append(header::VARY, HeaderValue::from_static("origin"));
                if let Some(origin) = origin.filter(|o| allowed.contains(*o)) {
                    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
                }
            }
        }

        if self.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
        if let Some(methods) = &self.allow_methods {
            headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, methods.clone());
        }
        if let Some(allowed) = &self.allow_headers {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed.clone());
        }
    }

    /// Response to a preflight request.
    fn preflight(&self, origin: Option<&HeaderValue>) -> Response {
        let mut response = StatusCode::OK.into_response();
        let headers = response.headers_mut();
        self.apply(origin, headers);
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, self.max_age.clone());
        response
    }
}

fn join_list(entries: &[String]) -> Option<HeaderValue> {
    if entries.is_empty() {
        return None;
    }
    HeaderValue::from_str(&entries.join(", ")).ok()
}

fn is_preflight(req: &Request<Body>) -> bool {
    req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Middleware applying `policy` to every request.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();

    if is_preflight(&req) {
        tracing::debug!(path = %req.uri().path(), "Answering CORS preflight");
        return policy.preflight(origin.as_ref());
    }

    let mut response = next.run(req).await;
    policy.apply(origin.as_ref(), response.headers_mut());
    response
}
