//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router with all routes and the ordered middleware chain
//! - Carry shared state (config, optional datastore probe) into handlers
//! - Serve with graceful, deadline-bounded shutdown

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::time;
use tower::ServiceBuilder;

use crate::config::AppConfig;
use crate::health::{handlers, Probe, PROBE_TIMEOUT};
use crate::http::middleware::{cors, logger, recovery};

/// Application state injected into handlers.
///
/// Read-only after construction, so it is shared across concurrent
/// requests without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Optional datastore capability. `None` means it was never
    /// initialized, which is distinct from a failing probe.
    pub dependency: Option<Arc<dyn Probe>>,
    /// Ceiling on health/readiness probes. Tests shorten this.
    pub probe_timeout: Duration,
}

impl AppState {
    pub fn new(config: AppConfig, dependency: Option<Arc<dyn Probe>>) -> Self {
        Self {
            config: Arc::new(config),
            dependency,
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

/// Core routes, without state or middleware applied.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        // Future route groups hang off /api/v1 next to health.
        .nest("/api/v1", Router::new().route("/health", get(handlers::health)))
}

/// Wrap a router in the fixed middleware chain.
///
/// `ServiceBuilder` applies layers top-down, so recovery is outermost: a
/// fault anywhere below it, including inside the logger or CORS layer,
/// still produces one structured error response.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(recovery))
            .layer(from_fn(logger))
            .layer(cors()),
    )
}

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    with_middleware(routes().with_state(state))
}

/// HTTP server for the API.
pub struct HttpServer {
    router: Router,
    grace: Duration,
}

impl HttpServer {
    /// Create a server with the standard routes and middleware.
    pub fn new(config: AppConfig, dependency: Option<Arc<dyn Probe>>) -> Self {
        let grace = Duration::from_secs(config.shutdown_grace_secs);
        let state = AppState::new(config, dependency);
        Self {
            router: build_router(state),
            grace,
        }
    }

    /// Serve a custom router. Tests use this to mount extra routes.
    pub fn from_router(router: Router, grace: Duration) -> Self {
        Self { router, grace }
    }

    /// Run the server until the shutdown order arrives.
    ///
    /// On shutdown the listener stops accepting and in-flight requests
    /// drain, bounded by the configured grace period; past the deadline
    /// the remaining requests are aborted.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server listening");

        let mut graceful = shutdown.resubscribe();
        let server = axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = graceful.recv().await;
            });
        let mut serving = tokio::spawn(server.into_future());

        let result = tokio::select! {
            result = &mut serving => flatten(result),
            _ = shutdown.recv() => {
                tracing::info!(
                    grace_secs = self.grace.as_secs(),
                    "shutting down, draining in-flight requests"
                );
                match time::timeout(self.grace, &mut serving).await {
                    Ok(result) => flatten(result),
                    Err(_) => {
                        serving.abort();
                        tracing::warn!("drain deadline exceeded, aborting remaining requests");
                        Ok(())
                    }
                }
            }
        };

        tracing::info!("HTTP server stopped");
        result
    }
}

fn flatten(result: Result<std::io::Result<()>, tokio::task::JoinError>) -> std::io::Result<()> {
    match result {
        Ok(inner) => inner,
        Err(join_error) => Err(std::io::Error::other(join_error)),
    }
}
