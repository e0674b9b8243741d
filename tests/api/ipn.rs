use coinpayments::handler::api::{ipn::IpnAck, response::ApiResponse};
use serde_json::Value;
use tokio::sync::broadcast::error::TryRecvError;

use crate::helpers::{spawn_app, spawn_app_with, MERCHANT_ID};

const DEPOSIT: &str = "ipn_version=1.0&ipn_type=deposit&ipn_mode=hmac&ipn_id=ipn-1&merchant=merchant-1&txn_id=abc123&address=addr1&status=100&status_text=Deposit+confirmed&currency=BTC&confirms=3&amount=1.5&amounti=150000000";

#[tokio::test]
async fn signed_ipn_is_accepted_and_published() {
    let mut app = spawn_app().await;

    let response = app.post_signed_ipn(DEPOSIT).await;
    assert_eq!(200, response.status().as_u16());
    let bytes = response.bytes().await.unwrap();
    let res: ApiResponse<'_, IpnAck> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(res.message, "IPN OK");
    let ack = res.data.unwrap();
    assert_eq!(ack.ipn_id, "ipn-1");
    assert_eq!(ack.ipn_type, "deposit");

    let notification = app.notifications.try_recv().unwrap();
    let deposit = notification.as_deposit().unwrap();
    assert_eq!(deposit.transaction_id, "abc123");
    assert_eq!(deposit.status_text, "Deposit confirmed");
    assert_eq!(deposit.amount, "1.5");
    assert_eq!(deposit.amounti, "150000000");
}

#[tokio::test]
async fn ipn_without_hmac_is_unauthorized() {
    let mut app = spawn_app().await;

    let response = app.post_ipn(DEPOSIT, None).await;
    assert_eq!(401, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "HMAC header is missing");
    assert!(matches!(app.notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn ipn_with_wrong_hmac_is_unauthorized() {
    let mut app = spawn_app().await;

    let response = app.post_ipn(DEPOSIT, Some("0123abcd")).await;
    assert_eq!(401, response.status().as_u16());
    assert!(matches!(app.notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn ipn_changed_after_signing_is_unauthorized() {
    let mut app = spawn_app().await;
    let signature =
        coinpayments::service::auth::hmac::sign(app.cfg.ipn.secret.as_bytes(), DEPOSIT.as_bytes())
            .unwrap();
    let tampered = DEPOSIT.replace("amount=1.5", "amount=9.5");

    let response = app.post_ipn(tampered, Some(&signature)).await;
    assert_eq!(401, response.status().as_u16());
    assert!(matches!(app.notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn ipn_is_accepted_without_hmac_when_secret_is_empty() {
    let mut app = spawn_app_with("", "").await;

    let response = app.post_ipn(DEPOSIT, None).await;
    assert_eq!(200, response.status().as_u16());
    let response = app.post_ipn(DEPOSIT, Some("garbage")).await;
    assert_eq!(200, response.status().as_u16());

    assert!(app.notifications.try_recv().is_ok());
    assert!(app.notifications.try_recv().is_ok());
}

#[tokio::test]
async fn ipn_without_type_is_bad_request() {
    let app = spawn_app().await;

    let response = app.post_signed_ipn("ipn_id=1&status=100&amount=1").await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn ipn_over_body_limit_is_bad_request() {
    let app = spawn_app().await;
    let body = format!("ipn_type=deposit&custom={}", "x".repeat(8192));

    let response = app.post_signed_ipn(&body).await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn ipn_for_other_merchant_is_unauthorized() {
    let app = spawn_app_with("", "merchant-2").await;
    let response = app.post_ipn(DEPOSIT, None).await;
    assert_eq!(401, response.status().as_u16());

    let app = spawn_app_with("", MERCHANT_ID).await;
    let response = app.post_ipn(DEPOSIT, None).await;
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn unknown_ipn_type_is_accepted() {
    let mut app = spawn_app().await;

    let response = app
        .post_signed_ipn("ipn_type=future_kind&ipn_id=ipn-9&merchant=merchant-1")
        .await;
    assert_eq!(200, response.status().as_u16());
    let bytes = response.bytes().await.unwrap();
    let res: ApiResponse<'_, IpnAck> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(res.data.unwrap().ipn_type, "future_kind");

    let notification = app.notifications.try_recv().unwrap();
    assert!(notification.as_deposit().is_err());
    assert_eq!(notification.kind().as_str(), "future_kind");
}

#[tokio::test]
async fn non_ascii_hmac_header_is_an_invalid_signature() {
    let mut app = spawn_app().await;
    let header = reqwest::header::HeaderValue::from_bytes(b"\xe9\xe8abc").unwrap();

    let response = app
        .api_client
        .post(format!("{}{}", app.address, app.cfg.ipn.path))
        .header("HMAC", header.clone())
        .body(DEPOSIT)
        .send()
        .await
        .expect("failed to execute request");
    assert_eq!(401, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "could not validate ipn hmac");
    assert!(matches!(app.notifications.try_recv(), Err(TryRecvError::Empty)));

    let app = spawn_app_with("", "").await;
    let response = app
        .api_client
        .post(format!("{}{}", app.address, app.cfg.ipn.path))
        .header("HMAC", header)
        .body(DEPOSIT)
        .send()
        .await
        .expect("failed to execute request");
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn percent_escaped_non_utf8_field_is_bad_request() {
    let mut app = spawn_app().await;

    let response = app
        .post_signed_ipn("ipn_type=deposit&amount=%FF1.5&txn_id=a")
        .await;
    assert_eq!(400, response.status().as_u16());
    assert!(matches!(app.notifications.try_recv(), Err(TryRecvError::Empty)));
}
