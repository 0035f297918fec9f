//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use farmalink_types::{Payment, PaymentRepository, RepoError};

use crate::types::DbPayment;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository with transactional appends.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_payments_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for PostgresRepo {
    async fn append(&self, payment: Payment) -> Result<Payment, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        sqlx::query(
            r#"INSERT INTO payments (holder_name, holder_id, amount, payment_date) VALUES ($1, $2, $3, $4)"#,
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
        "postgres"
    }
}
