use std::sync::{Arc, LazyLock};

use coinpayments::{
    config,
    http_server::HttpServer,
    service::{auth::hmac, ipn::notification::Notification},
    telemetry::{get_subscriber, init_subscriber},
};
use tokio::sync::broadcast;

pub const IPN_SECRET: &str = "test-ipn-secret";
pub const MERCHANT_ID: &str = "merchant-1";

static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the subscriber type, so each branch builds its own.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub cfg: config::Settings,
    pub notifications: broadcast::Receiver<Arc<Notification>>,
    pub api_client: reqwest::Client,
}

/// Server that verifies HMACs with [`IPN_SECRET`].
pub async fn spawn_app() -> TestApp {
    spawn_app_with(IPN_SECRET, "").await
}

pub async fn spawn_app_with(secret: &str, merchant_id: &str) -> TestApp {
    LazyLock::force(&TRACING);
    let cfg = {
        let mut cfg = config::Settings::new().expect("cannot parse configuration");
        //consider the port 0, so the os will provide a free port
        cfg.server.address = "127.0.0.1:0".to_string();
        cfg.ipn.path = "/api/v1/ipn".to_string();
        cfg.ipn.secret = secret.to_string();
        cfg.ipn.merchant_id = merchant_id.to_string();
        cfg.ipn.max_body_bytes = 4096;
        cfg
    };
    let http_server = HttpServer::build(cfg.clone())
        .await
        .expect("cannot build http server");
    let address = format!("http://127.0.0.1:{}", http_server.port());
    let notifications = http_server.subscribe();
    tokio::spawn(http_server.run());

    TestApp {
        address,
        cfg,
        notifications,
        api_client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub async fn post_ipn(&self, body: impl Into<String>, signature: Option<&str>) -> reqwest::Response {
        let mut req = self
            .api_client
            .post(format!("{}{}", self.address, self.cfg.ipn.path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.into());
        if let Some(signature) = signature {
            req = req.header(hmac::HMAC_HEADER, signature);
        }
        req.send().await.expect("failed to execute request")
    }

    /// Posts `body` with the HMAC the provider would send.
    pub async fn post_signed_ipn(&self, body: &str) -> reqwest::Response {
        let signature =
            hmac::sign(self.cfg.ipn.secret.as_bytes(), body.as_bytes()).expect("cannot sign body");
        self.post_ipn(body, Some(&signature)).await
    }
}
