//! Datastore handle.
//!
//! Thin wrapper over a Postgres pool. The rest of the core only sees it
//! through the [`Probe`] seam; persistence logic belongs to future
//! handlers, not here.

use std::time::Duration;

use futures_util::future::BoxFuture;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::health::{Probe, ProbeError};

/// Connected datastore. Cheap to clone; all clones share one pool.
///
/// "May or may not be connected" is expressed as `Option<Database>` at
/// every consumer, so the disconnected case is always handled explicitly.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect and verify the datastore is reachable.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Round-trip to the server without touching any table.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Probe for Database {
    fn name(&self) -> &str {
        "database"
    }

    fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>> {
        Box::pin(async move {
            self.ping()
                .await
                .map_err(|err| ProbeError::Unreachable(err.to_string()))
        })
    }
}
