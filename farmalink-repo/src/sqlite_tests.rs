//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use farmalink_types::{Payment, PaymentRepository};

    use crate::sqlite::pool_options;
    use crate::{SqliteRepo, build_repo};

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let repo = setup_repo().await;

        let stored = repo
            .append(Payment::new("Ana Pérez", "12345678-9", 50000.0, date()))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();

        assert_eq!(all, vec![stored]);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = setup_repo().await;

        for (i, id) in ["3-5", "1-9", "2-7"].iter().enumerate() {
            repo.append(Payment::new("Holder", *id, i as f64, date()))
                .await
                .unwrap();
        }

        let ids: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.holder_id)
            .collect();

        assert_eq!(ids, vec!["3-5", "1-9", "2-7"]);
    }

    #[tokio::test]
    async fn test_negative_and_fractional_amounts_round_trip() {
        let repo = setup_repo().await;

        repo.append(Payment::new("A", "1-9", -100.0, date()))
            .await
            .unwrap();
        repo.append(Payment::new("B", "2-7", 1234.56, date()))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();

        assert_eq!(all[0].amount, -100.0);
        assert_eq!(all[1].amount, 1234.56);
    }

    #[tokio::test]
    async fn test_count() {
        let repo = setup_repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.append(Payment::new("A", "1-9", 1.0, date()))
            .await
            .unwrap();
        repo.append(Payment::new("A", "1-9", 1.0, date()))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = setup_repo().await;

        assert!(repo.ping().await.is_ok());
        assert_eq!(repo.backend(), "sqlite");
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("pagos.db").display());

        let repo = SqliteRepo::new(&url).await.unwrap();
        repo.append(Payment::new("Ana Pérez", "12345678-9", 50000.0, date()))
            .await
            .unwrap();
        repo.close().await;

        let reopened = SqliteRepo::new(&url).await.unwrap();
        let all = reopened.list_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].holder_name, "Ana Pérez");
        assert_eq!(all[0].payment_date, date());
    }

    #[tokio::test]
    async fn test_build_repo_selects_sqlite() {
        let repo = build_repo(Some("sqlite::memory:")).await.unwrap();

        assert_eq!(repo.backend(), "sqlite");
    }

    #[test]
    fn test_memory_pool_keeps_its_connection() {
        let options = pool_options("sqlite::memory:");

        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[test]
    fn test_file_pool_uses_default_reaping() {
        let options = pool_options("sqlite://data/farmalink.db");

        assert_eq!(options.get_max_connections(), 5);
        assert!(options.get_idle_timeout().is_some());
    }

    #[tokio::test]
    async fn test_memory_repo_pool_is_pinned() {
        let repo = setup_repo().await;
        let options = repo.pool().options();

        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
        assert_eq!(repo.pool().size(), 1);
    }
}
