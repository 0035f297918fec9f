//! End-to-end tests: the client SDK against a server on a real socket.

use farmalink_client::{ClientError, FarmaLinkClient};
use farmalink_hex::{PaymentService, inbound::HttpServer};
use farmalink_repo::build_repo;
use tokio::net::TcpListener;

/// Starts a server over the registry selected by `database_url` and returns its base URL.
async fn spawn_server(database_url: Option<&str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let repo = build_repo(database_url).await.unwrap();
    let router = HttpServer::new(PaymentService::new(repo)).router();

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_create_and_list_in_memory() {
    let client = FarmaLinkClient::new(spawn_server(None).await);

    assert!(client.health().await.unwrap());
    assert_eq!(client.info().await.unwrap().storage, "memory");

    let created = client
        .create_payment("Ana Pérez", "12345678-9", 50000.0)
        .await
        .unwrap();
    let listed = client.list_payments().await.unwrap();

    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_create_and_list_sqlite() {
    let tmp = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", tmp.path().join("pagos.db").display());
    let client = FarmaLinkClient::new(spawn_server(Some(&url)).await);

    client.create_payment("Ana", "11111111-1", 100.0).await.unwrap();
    client.create_payment("Luis", "22222222-2", -100.0).await.unwrap();

    let listed = client.list_payments().await.unwrap();
    assert_eq!(holder_ids(&listed), vec!["11111111-1", "22222222-2"]);
    assert_eq!(listed[1].amount, -100.0);

    let report = client.health_report().await.unwrap();
    assert_eq!(report.storage, "healthy");
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let base_url = spawn_server(None).await;

    let response = reqwest_post(&base_url, r#"{"holder_name": "Ana", "amount": 1}"#).await;
    assert_eq!(response.0, 422);
    assert!(response.1.contains("holder_id"));

    let client = FarmaLinkClient::new(&base_url);
    assert!(client.list_payments().await.unwrap().is_empty());

    let err = FarmaLinkClient::new(format!("{base_url}/nope"))
        .list_payments()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

fn holder_ids(payments: &[farmalink_types::Payment]) -> Vec<&str> {
    payments.iter().map(|p| p.holder_id.as_str()).collect()
}

/// Posts a raw body, bypassing the typed client, and returns status and body text.
async fn reqwest_post(base_url: &str, body: &str) -> (u16, String) {
    let resp = reqwest::Client::new()
        .post(format!("{base_url}/api/pagos/realizar"))
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    (resp.status().as_u16(), resp.text().await.unwrap())
}
