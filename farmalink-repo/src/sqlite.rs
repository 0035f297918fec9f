//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use farmalink_types::{Payment, PaymentRepository, RepoError};

use crate::types::DbPayment;

/// Pool settings for a database URL.
///
/// An in-memory database lives only as long as a connection to it is open,
/// so its pool keeps exactly one connection and never reaps it.
pub(crate) fn pool_options(database_url: &str) -> SqlitePoolOptions {
    if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = pool_options(database_url).connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (idempotent).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_payments.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    /// Closes the pool, flushing pending writes.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn append(&self, payment: Payment) -> Result<Payment, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        sqlx::query(
            r#"INSERT INTO payments (holder_name, holder_id, amount, payment_date) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&payment.holder_name)
        .bind(&payment.holder_id)
        .bind(payment.amount)
        .bind(payment.payment_date)
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(payment)
    }

    async fn list_all(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbPayment> = sqlx::query_as(
            r#"SELECT holder_name, holder_id, amount, payment_date FROM payments ORDER BY seq ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbPayment::into_domain).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM payments"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(count as u64)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| RepoError::Storage(e.to_string()))
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
