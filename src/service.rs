//! Service identity.
//!
//! Name, description and version are fixed at build time and shared
//! read-only with every handler.

/// Human-readable service name, also returned by the root endpoint.
pub const SERVICE_NAME: &str = "WeBond AI Matching Service";

/// One-line description of the service.
pub const SERVICE_DESCRIPTION: &str = "AI-powered task matching and recommendation engine";

/// Public API version.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Short identifier reported by the health probe.
pub const SERVICE_ID: &str = "ai-matching";

/// Identity carried by the application instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub id: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: SERVICE_NAME,
            description: SERVICE_DESCRIPTION,
            version: SERVICE_VERSION,
            id: SERVICE_ID,
        }
    }
}
