// Integration tests for the dashboard fetchers using wiremock.
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use backoffice_api::fetchers::{
    fetch_qr_location_type_list, fetch_qr_type_list, merchant_create_qr,
    merchant_transaction_history_print,
};
use backoffice_api::types::{
    MerchantCreateQrRequest, MerchantTransactionHistoryPrintParams, QrLocationTypeListParams,
    QrTypeListParams, RecordId,
};
use backoffice_api::{Error, HttpTransport, ServiceClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, HttpTransport) {
    let server = MockServer::start().await;
    let transport = HttpTransport::from_reqwest(reqwest::Client::new());
    (server, transport)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_qr_location_type_list_with_filters() {
    let (server, transport) = setup().await;

    let body = json!({
        "items": [
            { "id": "2", "name": "Station" },
            { "id": "1", "name": "Airport" }
        ],
        "merchantLocationList": [{ "id": "L9", "name": "Platform 3" }],
        "pagination": { "page": 1, "size": 10, "total": 2 }
    });

    Mock::given(method("GET"))
        .and(path("/qr-location-type"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .and(query_param("name", "Station"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let params = QrLocationTypeListParams {
        page: Some(1),
        size: Some(10),
        id: None,
        name: Some("Station".into()),
    };
    let resp = fetch_qr_location_type_list(&transport, &server.uri(), &params)
        .await
        .unwrap();

    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].name, "Station");
    assert_eq!(resp.items[1].name, "Airport");
    assert_eq!(resp.pagination.total, 2);
    assert_eq!(resp.merchant_location_list[0].id, Some(RecordId::from("L9")));
}

#[tokio::test]
async fn test_list_without_filters_still_issues_request() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/qr-type"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "qrType": ["STATIC", "DYNAMIC"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = fetch_qr_type_list(&transport, &server.uri(), &QrTypeListParams::default())
        .await
        .unwrap();

    assert_eq!(resp.qr_type, ["STATIC", "DYNAMIC"]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_merchant_create_qr_posts_body() {
    let (server, transport) = setup().await;

    Mock::given(method("POST"))
        .and(path("/merchant/cashout/inquiry"))
        .and(body_json(json!({ "amount": 1000, "merchantCode": "M1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "amount": 1000 })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = MerchantCreateQrRequest {
        amount: 1000,
        merchant_code: "M1".into(),
    };
    let resp = merchant_create_qr(&transport, &server.uri(), &payload)
        .await
        .unwrap();

    assert_eq!(resp.amount, 1000);
}

#[tokio::test]
async fn test_transaction_history_print_substitutes_id() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/merchant/transaction-history/print"))
        .and(query_param("id", "42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "url": "https://files.example.com/tx/42.pdf" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = MerchantTransactionHistoryPrintParams { id: "42".into() };
    let resp = merchant_transaction_history_print(&transport, &server.uri(), &params)
        .await
        .unwrap();

    assert_eq!(resp.url, "https://files.example.com/tx/42.pdf");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.as_str(),
        format!("{}/merchant/transaction-history/print?id=42", server.uri())
    );
}

#[tokio::test]
async fn test_identical_calls_are_not_cached() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/qr-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "qrType": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let client = ServiceClient::new(transport, server.uri());
    let params = QrTypeListParams::default();
    client.qr_type_list(&params).await.unwrap();
    client.qr_type_list(&params).await.unwrap();
}

#[tokio::test]
async fn test_service_client_base_path_prefix() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/principal/qr-location-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ServiceClient::new(transport, format!("{}/principal/", server.uri()));
    let resp = client
        .qr_location_type_list(&QrLocationTypeListParams::default())
        .await
        .unwrap();

    assert!(resp.items.is_empty());
}

#[tokio::test]
async fn test_base_path_without_trailing_slash_keeps_template() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/qr-type"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "qrType": ["STATIC"] })))
        .expect(1)
        .mount(&server)
        .await;

    let params = QrTypeListParams {
        page: Some(1),
        ..QrTypeListParams::default()
    };
    let resp = fetch_qr_type_list(&transport, &format!("{}/v1", server.uri()), &params)
        .await
        .unwrap();

    assert_eq!(resp.qr_type, ["STATIC"]);
}

#[tokio::test]
async fn test_base_url_with_query_never_reaches_the_network() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "qrType": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let base_url = format!("{}/v1?tenant=co", server.uri());
    let params = QrTypeListParams {
        page: Some(1),
        ..QrTypeListParams::default()
    };
    let err = fetch_qr_type_list(&transport, &base_url, &params).await.unwrap_err();

    assert!(matches!(err, Error::InvalidBaseUrl { .. }), "got: {err:?}");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_401_propagates_status() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetch_qr_type_list(&transport, &server.uri(), &QrTypeListParams::default()).await;

    let err = result.unwrap_err();
    assert!(err.is_unauthorized(), "expected 401, got: {err:?}");
    assert!(matches!(err, Error::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_error_404_with_service_body() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/merchant/transaction-history/print"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Transaction not found",
            "code": "TX_NOT_FOUND"
        })))
        .mount(&server)
        .await;

    let params = MerchantTransactionHistoryPrintParams { id: "missing".into() };
    let result = merchant_transaction_history_print(&transport, &server.uri(), &params).await;

    match result {
        Err(Error::Status {
            status,
            ref message,
            ref code,
        }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Transaction not found");
            assert_eq!(code.as_deref(), Some("TX_NOT_FOUND"));
        }
        other => panic!("expected Status 404, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_is_not_retried() {
    let (server, transport) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = MerchantCreateQrRequest {
        amount: 5,
        merchant_code: "M2".into(),
    };
    let result = merchant_create_qr(&transport, &server.uri(), &payload).await;

    match result {
        Err(Error::Status {
            status,
            ref message,
            ref code,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
            assert!(code.is_none());
        }
        other => panic!("expected Status 500, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_contract_mismatch_is_deserialization_error() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/merchant/transaction-history/print"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "link": "nope" })))
        .mount(&server)
        .await;

    let params = MerchantTransactionHistoryPrintParams { id: "1".into() };
    let result = merchant_transaction_history_print(&transport, &server.uri(), &params).await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("nope"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let transport = HttpTransport::from_reqwest(reqwest::Client::new());

    // Bind then drop a listener so the port is known to be closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let base_url = format!("http://{addr}");

    let result = fetch_qr_type_list(&transport, &base_url, &QrTypeListParams::default()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "expected Transport, got: {err:?}");
    assert!(err.is_connect());
}
