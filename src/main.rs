use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use society_api::config::AppConfig;
use society_api::db::Database;
use society_api::health::Probe;
use society_api::http::HttpServer;
use society_api::lifecycle::{signals, Shutdown};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "society_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        environment = %config.environment,
        "configuration loaded"
    );

    // Optional datastore: a failed connect is a warning, not a startup error.
    let database = match config.database_url.as_deref() {
        Some(url) => match Database::connect(url).await {
            Ok(db) => {
                tracing::info!("connected to database");
                Some(db)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to connect to database, starting without it");
                None
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, running without database");
            None
        }
    };

    let shutdown = Shutdown::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_termination().await;
        signal_shutdown.trigger();
    });

    // Failure to bind is the only fatal startup error.
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(address = %addr, error = %err, "failed to bind listener");
            std::process::exit(1);
        }
    };

    let dependency = database
        .clone()
        .map(|db| Arc::new(db) as Arc<dyn Probe>);
    let server = HttpServer::new(config, dependency);

    if let Err(err) = server.run(listener, shutdown.subscribe()).await {
        tracing::error!(error = %err, "server error");
    }

    if let Some(db) = database {
        db.close().await;
        tracing::info!("database connection closed");
    }
    tracing::info!("shutdown complete");
}
