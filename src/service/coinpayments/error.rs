use snafu::Snafu;

use crate::service::auth::error::SignerError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("invalid api url {url}: {source}"))]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[snafu(display("cannot build http client: {source}"))]
    HttpClient { source: reqwest::Error },
    #[snafu(display("cannot encode {command} parameters: {source}"))]
    EncodeParams {
        command: String,
        source: serde_json::Error,
    },
    #[snafu(display("cannot encode request body: {source}"))]
    EncodeBody {
        source: serde_urlencoded::ser::Error,
    },
    #[snafu(display("cannot sign request: {source}"))]
    Signing { source: SignerError },
    #[snafu(display("error doing api request to {url}: {source}"))]
    Transport { url: String, source: reqwest::Error },
    #[snafu(display("api call returned unexpected status: {status}"))]
    UnexpectedStatus { status: u16 },
    #[snafu(display("api error - {message}"))]
    Api { message: String },
    #[snafu(display("cannot decode api response: {source}"))]
    Decode { source: serde_json::Error },
}

impl ApiError {
    /// The request never produced a usable HTTP 200 response.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::UnexpectedStatus { .. })
    }
}
