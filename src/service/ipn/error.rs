use snafu::Snafu;

use super::notification::IpnType;
use crate::service::auth::error::SignerError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum IpnError {
    #[snafu(display("HMAC header is missing"))]
    MissingSignature,
    #[snafu(display("could not validate ipn hmac"))]
    InvalidSignature,
    #[snafu(display("ipn was sent for merchant '{merchant}'"))]
    UnknownMerchant { merchant: String },
    #[snafu(display("malformed ipn payload: {reason}"))]
    MalformedPayload { reason: String },
    #[snafu(display("ipn type is '{actual}', not '{expected}'"))]
    TypeMismatch { expected: IpnType, actual: IpnType },
    #[snafu(display("cannot compute ipn hmac: {source}"))]
    Signing { source: SignerError },
}

impl IpnError {
    /// True for the rejections caused by the sender not proving who it is.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingSignature | Self::InvalidSignature | Self::UnknownMerchant { .. }
        )
    }
}
