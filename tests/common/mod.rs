//! Shared utilities for integration tests.

use std::net::SocketAddr;

use ai_matching::config::{ListenerConfig, ServiceConfig};
use ai_matching::{HttpServer, ServiceError, Shutdown};
use tokio::task::JoinHandle;

/// A service instance running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), ServiceError>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger graceful shutdown and wait for the serve loop to finish.
    #[allow(dead_code)]
    pub async fn stop(self) -> Result<(), ServiceError> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start the service with default settings on `127.0.0.1:0`.
pub async fn start_server() -> TestServer {
    let config = ServiceConfig {
        listener: ListenerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        ..ServiceConfig::default()
    };

    let listener = ai_matching::net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signalled = shutdown.signalled();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(async move { server.run(listener, signalled).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// HTTP client that bypasses any system proxy and connection pooling.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
