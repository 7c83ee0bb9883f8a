//! Shared helpers for integration tests: fake dependency probes and an
//! in-process server spawned on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use futures_util::future::BoxFuture;
use tokio::task::JoinHandle;

use society_api::config::AppConfig;
use society_api::health::{Probe, ProbeError};
use society_api::http::server::{routes, with_middleware, AppState};
use society_api::http::HttpServer;
use society_api::lifecycle::Shutdown;

/// Probe that always succeeds immediately.
pub struct HealthyProbe;

impl Probe for HealthyProbe {
    fn name(&self) -> &str {
        "database"
    }

    fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>> {
        Box::pin(async { Ok(()) })
    }
}

/// Probe that always fails immediately.
pub struct FailingProbe;

impl Probe for FailingProbe {
    fn name(&self) -> &str {
        "database"
    }

    fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>> {
        Box::pin(async { Err(ProbeError::Unreachable("connection refused".to_string())) })
    }
}

/// Probe that never completes; only the deadline can resolve it.
pub struct HangingProbe;

impl Probe for HangingProbe {
    fn name(&self) -> &str {
        "database"
    }

    fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>> {
        Box::pin(std::future::pending())
    }
}

/// Handler mounted only in tests to exercise the recovery middleware.
async fn boom() -> &'static str {
    panic!("deliberate test panic")
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Spawn the full application (standard routes, middleware chain, plus a
/// panicking `/boom` route) with the default 5s probe ceiling.
pub async fn spawn_app(dependency: Option<Arc<dyn Probe>>) -> TestServer {
    spawn_app_with_probe_timeout(dependency, Duration::from_secs(5)).await
}

/// Spawn the application with a custom probe ceiling, so deadline tests do
/// not sleep for the production 5 seconds.
pub async fn spawn_app_with_probe_timeout(
    dependency: Option<Arc<dyn Probe>>,
    probe_timeout: Duration,
) -> TestServer {
    let mut state = AppState::new(AppConfig::default(), dependency);
    state.probe_timeout = probe_timeout;

    let app = with_middleware(routes().route("/boom", get(boom)).with_state(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::from_router(app, Duration::from_secs(2));
    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, receiver).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Non-pooled client so every request opens a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
