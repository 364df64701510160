//! User-records store, used only by the health probe.
//!
//! The probe needs one number, the count of user records, so the store is
//! a one-method trait. [`PgUserStore`] is the production implementation; tests
//! and database-less deployments plug in their own.
//!
//! The Postgres pool is a process-wide singleton created on first use with
//! `connect_lazy`: no connection is attempted at startup, and a missing or
//! unreachable database only shows up in the probe's response.

use crate::error::ComplianceError;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

/// Read-only access to the user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Number of user records.
    async fn count_users(&self) -> Result<i64, ComplianceError>;
}

static POOL: OnceCell<PgPool> = OnceCell::new();

/// Return the shared pool, creating it on first call.
///
/// `OnceCell` guarantees at most one pool per process even if several
/// requests race here, or if the router is rebuilt (tests, reloads).
pub fn shared_pool(database_url: &str) -> Result<&'static PgPool, ComplianceError> {
    POOL.get_or_try_init(|| {
        info!("Initialising user-store connection pool");
        PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)
    })
    .map_err(ComplianceError::from)
}

/// Postgres-backed store counting rows in the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    database_url: Option<String>,
}

impl PgUserStore {
    /// The URL is only used when the probe runs; `None` makes every probe
    /// report [`ComplianceError::StoreNotConfigured`].
    pub fn new(database_url: Option<String>) -> Self {
        Self { database_url }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn count_users(&self) -> Result<i64, ComplianceError> {
        let url = self
            .database_url
            .as_deref()
            .ok_or(ComplianceError::StoreNotConfigured)?;
        let pool = shared_pool(url)?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        debug!("users table holds {} rows", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_store_reports_missing_url() {
        let store = PgUserStore::new(None);
        let err = store.count_users().await.unwrap_err();
        assert!(matches!(err, ComplianceError::StoreNotConfigured));
        assert_eq!(err.to_string(), "DATABASE_URL is not set");
    }
}
