use std::time::Duration;

use config::Config;

use crate::service::coinpayments::service::{
    ApiConfig, API_FORMAT, API_SUCCESS, API_VERSION, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS,
};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerConfig,
    pub coinpayments: CoinpaymentsConfig,
    pub ipn: IpnConfig,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub address: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct CoinpaymentsConfig {
    pub url: String,
    pub public_key: String,
    pub private_key: String,
    pub version: String,
    pub timeout_secs: u64,
}

impl CoinpaymentsConfig {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            url: self.url.clone(),
            version: self.version.clone(),
            format: API_FORMAT.to_string(),
            success_marker: API_SUCCESS.to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct IpnConfig {
    pub path: String,
    /// IPN secret from the merchant settings. Empty disables HMAC checks.
    pub secret: String,
    pub merchant_id: String,
    pub max_body_bytes: usize,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let cfg = Config::builder()
            .set_default("server.address", "127.0.0.1:8000")?
            .set_default("coinpayments.url", DEFAULT_API_URL)?
            .set_default("coinpayments.public_key", "")?
            .set_default("coinpayments.private_key", "")?
            .set_default("coinpayments.version", API_VERSION)?
            .set_default("coinpayments.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("ipn.path", "/api/v1/ipn")?
            .set_default("ipn.secret", "")?
            .set_default("ipn.merchant_id", "")?
            .set_default("ipn.max_body_bytes", 65536)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        cfg.try_deserialize::<Settings>()
    }
}
