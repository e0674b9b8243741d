use snafu::Snafu;

use crate::service::auth::error::SignerError;
use crate::service::coinpayments::error::ApiError;
use crate::service::ipn::error::IpnError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CmdError {
    #[snafu(display("cannot parse configuration: {source}"))]
    Config { source: config::ConfigError },
    #[snafu(display("{source}"))]
    Api { source: ApiError },
    #[snafu(display("{source}"))]
    Ipn { source: IpnError },
    #[snafu(display("{source}"))]
    Signer { source: SignerError },
    #[snafu(display("cannot read {path}: {source}"))]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("cannot encode output: {source}"))]
    Output { source: serde_json::Error },
    #[snafu(display("unknown command {name}"))]
    UnknownCommand { name: String },
}
