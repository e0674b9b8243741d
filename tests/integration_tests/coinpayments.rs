use std::collections::BTreeMap;
use std::time::Duration;

use claims::assert_matches;
use coinpayments::service::{
    auth::hmac::sign,
    coinpayments::{
        account::{BalancesRequest, RatesRequest},
        error::ApiError,
        pbn::DeletePbnTagRequest,
        service::{ApiConfig, Service},
        transaction::GetTxInfoRequest,
        transfer::CreateWithdrawalRequest,
    },
};
use serde_json::json;
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{init_tracing, spawn_api, PRIVATE_KEY, PUBLIC_KEY};

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "error": "ok", "result": result }))
}

#[tokio::test]
async fn request_is_signed_form_post() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .and(path("/api.php"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("cmd=rates"))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&api.server)
        .await;

    let request = RatesRequest {
        short: "1".to_string(),
        ..Default::default()
    };
    api.service.rates(&request).await.unwrap();

    let received = api.server.received_requests().await.unwrap();
    let req = received.first().unwrap();
    let body = String::from_utf8(req.body.clone()).unwrap();
    assert_eq!(
        body,
        format!("cmd=rates&format=json&key={PUBLIC_KEY}&short=1&version=1")
    );
    let signature = req.headers.get("HMAC").unwrap().to_str().unwrap();
    assert_eq!(
        signature,
        sign(PRIVATE_KEY.as_bytes(), body.as_bytes()).unwrap()
    );
}

#[tokio::test]
async fn empty_request_fields_are_not_sent() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .respond_with(ok(json!({ "id": "CWXXX", "status": 0, "amount": "0.1" })))
        .mount(&api.server)
        .await;

    let request = CreateWithdrawalRequest {
        amount: "0.1".to_string(),
        currency: "LTC".to_string(),
        address: "Laddr".to_string(),
        ..Default::default()
    };
    let res = api.service.create_withdrawal(&request).await.unwrap();
    assert_eq!(res.id, "CWXXX");
    assert_eq!(res.status, 0);

    let received = api.server.received_requests().await.unwrap();
    let params: BTreeMap<String, String> =
        serde_urlencoded::from_bytes(&received[0].body).unwrap();
    assert_eq!(
        params.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["address", "amount", "cmd", "currency", "format", "key", "version"]
    );
    assert_eq!(params["cmd"], "create_withdrawal");
}

#[tokio::test]
async fn typed_result_is_decoded() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .and(body_string_contains("cmd=balances"))
        .respond_with(ok(json!({
            "BTC": { "balance": 150000000, "balancef": "1.50000000", "status": "available" },
            "LTC": { "balance": 0, "balancef": "0.00000000", "status": "available" }
        })))
        .mount(&api.server)
        .await;

    let balances = api
        .service
        .balances(&BalancesRequest::default())
        .await
        .unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances["BTC"].balance, 150000000);
    assert_eq!(balances["BTC"].balancef, "1.50000000");
}

#[tokio::test]
async fn tx_info_maps_renamed_fields() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .and(body_string_contains("cmd=get_tx_info"))
        .respond_with(ok(json!({
            "time_created": 1700000000,
            "time_expires": 1700003600,
            "status": 100,
            "status_text": "Complete",
            "type": "coins",
            "coin": "BTC",
            "amount": 26000,
            "amountf": "0.00026000",
            "received": 26000,
            "receivedf": "0.00026000",
            "recv_confirms": 3,
            "payment_address": "addr"
        })))
        .mount(&api.server)
        .await;

    let request = GetTxInfoRequest {
        txid: "CPXXX".to_string(),
        ..Default::default()
    };
    let info = api.service.get_tx_info(&request).await.unwrap();
    assert_eq!(info.status, 100);
    assert_eq!(info.kind, "coins");
    assert_eq!(info.status_text, "Complete");
}

#[tokio::test]
async fn empty_list_result_is_kept_as_json() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .and(body_string_contains("cmd=delete_pbn_tag"))
        .respond_with(ok(json!([])))
        .mount(&api.server)
        .await;

    let request = DeletePbnTagRequest {
        tagid: "tag-1".to_string(),
    };
    let res = api.service.delete_pbn_tag(&request).await.unwrap();
    assert_eq!(res, json!([]));
}

#[tokio::test]
async fn provider_error_is_an_api_failure() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": "Invalid API public key", "result": [] })),
        )
        .mount(&api.server)
        .await;

    let err = api.service.get_basic_info().await.unwrap_err();
    assert!(!err.is_transport_failure());
    assert!(matches!(err, ApiError::Api { ref message } if message == "Invalid API public key"));
}

#[tokio::test]
async fn non_200_status_is_a_transport_failure() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api.server)
        .await;

    let err = api.service.execute("rates", BTreeMap::new()).await.unwrap_err();
    assert!(err.is_transport_failure());
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 500 }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let api = spawn_api().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&api.server)
        .await;

    let res = api.service.execute("rates", BTreeMap::new()).await;
    assert_matches!(res, Err(ApiError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    init_tracing();
    let cfg = ApiConfig {
        url: "http://127.0.0.1:1/api.php".to_string(),
        timeout: Duration::from_secs(2),
        ..Default::default()
    };
    let service = Service::new(cfg, PUBLIC_KEY, PRIVATE_KEY).unwrap();
    let err = service.execute("rates", BTreeMap::new()).await.unwrap_err();
    assert!(err.is_transport_failure());
    assert!(matches!(err, ApiError::Transport { .. }));
}

#[test]
fn default_config_points_at_the_provider() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.url, "https://www.coinpayments.net/api.php");
    assert_eq!(cfg.version, "1");
    assert_eq!(cfg.format, "json");
    assert_eq!(cfg.success_marker, "ok");
}

#[test]
fn invalid_url_is_rejected_at_construction() {
    let cfg = ApiConfig {
        url: "not a url".to_string(),
        ..Default::default()
    };
    let res = Service::new(cfg, PUBLIC_KEY, PRIVATE_KEY);
    assert!(matches!(res, Err(ApiError::InvalidUrl { .. })));
}
