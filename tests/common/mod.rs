//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use prediction_service::config::ServiceConfig;
use prediction_service::http::HttpServer;
use prediction_service::lifecycle::{bind_listener, Shutdown};
use prediction_service::model::{IdentityModel, Predictor};

/// A running service instance. Dropping it does not stop the server; call `stop`.
pub struct TestService {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Default settings, listening on an ephemeral local port.
pub fn local_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config
}

/// Start the service with default settings and the identity model.
pub async fn start_service() -> TestService {
    start_service_configured(local_config(), Arc::new(IdentityModel)).await
}

/// Start the service backed by a custom predictor.
#[allow(dead_code)]
pub async fn start_service_with(predictor: Arc<dyn Predictor>) -> TestService {
    start_service_configured(local_config(), predictor).await
}

/// Start the service with explicit settings and predictor.
pub async fn start_service_configured(
    config: ServiceConfig,
    predictor: Arc<dyn Predictor>,
) -> TestService {
    let server = HttpServer::with_predictor(config, predictor);
    let listener = bind_listener(&server.config().listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService { addr, shutdown }
}

/// HTTP client that never reuses connections or goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
