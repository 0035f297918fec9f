//! In-memory repository adapter.

use std::sync::RwLock;

use async_trait::async_trait;

use farmalink_types::{Payment, PaymentRepository, RepoError};

/// Process-local payment registry.
///
/// Records live as long as the value does; nothing is persisted. A single
/// `RwLock` orders concurrent appends and lets readers share a consistent
/// snapshot.
#[derive(Default)]
pub struct InMemoryRepo {
    payments: RwLock<Vec<Payment>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> RepoError {
    RepoError::Storage(format!("Payment registry lock poisoned: {}", e))
}

#[async_trait]
impl PaymentRepository for InMemoryRepo {
    async fn append(&self, payment: Payment) -> Result<Payment, RepoError> {
        let mut payments = self.payments.write().map_err(poisoned)?;
        payments.push(payment.clone());
        tracing::debug!(total = payments.len(), "payment appended to in-memory registry");
        Ok(payment)
    }

    async fn list_all(&self) -> Result<Vec<Payment>, RepoError> {
        let payments = self.payments.read().map_err(poisoned)?;
        Ok(payments.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let payments = self.payments.read().map_err(poisoned)?;
        Ok(payments.len() as u64)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.payments.read().map(|_| ()).map_err(poisoned)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;

    fn payment(holder_id: &str, amount: f64) -> Payment {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        Payment::new("Ana Pérez", holder_id, amount, date)
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let repo = InMemoryRepo::new();

        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let repo = InMemoryRepo::new();

        repo.append(payment("1-9", 10.0)).await.unwrap();
        repo.append(payment("2-7", 20.0)).await.unwrap();
        repo.append(payment("3-5", 30.0)).await.unwrap();

        let ids: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.holder_id)
            .collect();

        assert_eq!(ids, vec!["1-9", "2-7", "3-5"]);
    }

    #[tokio::test]
    async fn test_append_does_not_alter_existing_records() {
        let repo = InMemoryRepo::new();
        let first = repo.append(payment("1-9", 10.0)).await.unwrap();

        repo.append(payment("1-9", 99.0)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all[0], first);
        assert_eq!(all.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_land_exactly_once() {
        let repo = Arc::new(InMemoryRepo::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.append(payment(&format!("{i}-K"), i as f64)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 50);

        let mut ids: Vec<_> = all.into_iter().map(|p| p.holder_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_ping_and_backend() {
        let repo = InMemoryRepo::new();

        assert!(repo.ping().await.is_ok());
        assert_eq!(repo.backend(), "memory");
    }
}
