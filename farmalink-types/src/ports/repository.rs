//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (InMemory, SQLite, Postgres) implement this trait.

use crate::domain::Payment;
use crate::error::RepoError;

/// The payment registry port.
///
/// The registry is append-only: records come back from `list_all` in the
/// order they were appended and are never changed afterwards. Appends from
/// concurrent callers MUST serialize, each record landing exactly once.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Appends a payment to the end of the registry and returns the stored record.
    async fn append(&self, payment: Payment) -> Result<Payment, RepoError>;

    /// Lists every stored payment in insertion order.
    async fn list_all(&self) -> Result<Vec<Payment>, RepoError>;

    /// Number of stored payments.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }

    /// Short label of the storage backend.
    fn backend(&self) -> &'static str;
}
