//! HMAC-SHA512 signatures as used by CoinPayments.
//!
//! Outbound API calls are signed with the account private key, inbound IPN
//! bodies are verified with the IPN secret configured on the merchant
//! account. Both produce a lowercase hex digest.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use snafu::ResultExt;

use super::error::{InvalidKeySnafu, SignerError};

/// Header carrying the hex signature on both API requests and IPN deliveries.
pub const HMAC_HEADER: &str = "HMAC";

type HmacSha512 = Hmac<Sha512>;

/// Returns the lowercase hex HMAC-SHA512 of `message` keyed with `secret`.
///
/// Empty secrets and empty messages are both valid inputs.
pub fn sign(secret: &[u8], message: &[u8]) -> Result<String, SignerError> {
    let mut mac = HmacSha512::new_from_slice(secret).context(InvalidKeySnafu)?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks `signature` against the digest of `message`.
///
/// The comparison is on the hex text itself, so an uppercase signature does
/// not match.
pub fn verify(secret: &[u8], message: &[u8], signature: &str) -> Result<bool, SignerError> {
    let expected = sign(secret, message)?;
    Ok(expected == signature)
}
