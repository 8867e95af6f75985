//! Configuration schema definitions.
//!
//! The configuration is built in code: defaults below, overridden from the
//! environment by `env.rs`. Every field has a default so the service starts
//! with no configuration at all.

/// Port used when `PORT` is absent or unusable.
pub const DEFAULT_PORT: u16 = 8000;

/// Root configuration for the matching service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Cross-origin policy applied to every response.
    pub cors: CorsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ListenerConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port.
    pub port: u16,
}

impl ListenerConfig {
    /// Address in `host:port` form, as handed to the socket layer.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Cross-origin resource sharing policy.
///
/// A single `"*"` entry in a list means "any" and is emitted verbatim.
/// The environment never changes this; embedders building a `ServiceConfig`
/// in code may restrict origins, which switches to echoing listed origins.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// Origins allowed to read responses.
    pub allow_origins: Vec<String>,

    /// Whether credentials (cookies, auth headers) may accompany requests.
    pub allow_credentials: bool,

    /// Methods allowed in cross-origin requests.
    pub allow_methods: Vec<String>,

    /// Request headers allowed in cross-origin requests.
    pub allow_headers: Vec<String>,

    /// How long browsers may cache a preflight result, in seconds.
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: vec!["*".to_string()],
            allow_credentials: true,
            allow_methods: vec!["*".to_string()],
            allow_headers: vec!["*".to_string()],
            max_age_secs: 600,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeoutConfig {
    /// Handler execution timeout in seconds; exceeding it yields 408.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
