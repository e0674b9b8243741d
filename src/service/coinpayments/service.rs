use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use snafu::ResultExt;
use tracing::{debug, error};
use url::Url;

use super::command::{Command, Params};
use super::error::{
    ApiError, DecodeSnafu, EncodeBodySnafu, HttpClientSnafu, InvalidUrlSnafu, SigningSnafu,
    TransportSnafu,
};
use crate::service::auth::hmac::{self, HMAC_HEADER};

pub const DEFAULT_API_URL: &str = "https://www.coinpayments.net/api.php";
pub const API_VERSION: &str = "1";
pub const API_FORMAT: &str = "json";
pub const API_SUCCESS: &str = "ok";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how the API is reached. Fixed for the lifetime of a [`Service`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: String,
    pub version: String,
    pub format: String,
    /// Value of the `error` member on successful calls.
    pub success_marker: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            url: DEFAULT_API_URL.to_string(),
            version: API_VERSION.to_string(),
            format: API_FORMAT.to_string(),
            success_marker: API_SUCCESS.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    error: String,
    #[serde(default)]
    result: Value,
}

/// Signed caller for the merchant API.
#[derive(Clone)]
pub struct Service {
    http_client: reqwest::Client,
    endpoint: Url,
    cfg: ApiConfig,
    public_key: String,
    private_key: String,
}

impl Service {
    pub fn new(
        cfg: ApiConfig,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&cfg.url).context(InvalidUrlSnafu { url: cfg.url.as_str() })?;
        let http_client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context(HttpClientSnafu)?;
        Ok(Service {
            http_client,
            endpoint,
            cfg,
            public_key: public_key.into(),
            private_key: private_key.into(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.cfg
    }

    /// Sends `command` with `params` and returns the raw `result` member.
    pub async fn execute(&self, command: &str, mut params: Params) -> Result<Value, ApiError> {
        params.insert("key".to_string(), self.public_key.clone());
        params.insert("version".to_string(), self.cfg.version.clone());
        params.insert("cmd".to_string(), command.to_string());
        params.insert("format".to_string(), self.cfg.format.clone());

        let body = serde_urlencoded::to_string(&params).context(EncodeBodySnafu)?;
        let signature =
            hmac::sign(self.private_key.as_bytes(), body.as_bytes()).context(SigningSnafu)?;

        debug!(command, url = %self.cfg.url, "calling coinpayments api");
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(HMAC_HEADER, signature)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .context(TransportSnafu {
                url: self.cfg.url.as_str(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("cannot call {command} due to unexpected status: {status}");
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.context(TransportSnafu {
            url: self.cfg.url.as_str(),
        })?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&bytes).context(DecodeSnafu)?;
        if envelope.error != self.cfg.success_marker {
            error!("cannot call {command} due to err: {}", envelope.error);
            return Err(ApiError::Api {
                message: envelope.error,
            });
        }
        Ok(envelope.result)
    }

    /// Sends a typed command and decodes its result.
    pub async fn call<C: Command>(&self, request: &C) -> Result<C::Response, ApiError> {
        let params = request.params()?;
        let result = self.execute(C::NAME, params).await?;
        serde_json::from_value(result).context(DecodeSnafu)
    }
}
