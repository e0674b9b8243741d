use tracing::{debug, warn};

use super::error::IpnError;
use super::notification::Notification;
use crate::service::auth::hmac;

/// Authenticates and decodes IPN deliveries.
///
/// An empty secret turns signature checking off; that is a choice left to
/// the integrator, the provider always signs. The service holds no mutable
/// state and can be shared freely between request handlers.
#[derive(Clone)]
pub struct Service {
    secret: String,
    merchant_id: Option<String>,
}

impl Service {
    pub fn new(secret: impl Into<String>) -> Self {
        Service {
            secret: secret.into(),
            merchant_id: None,
        }
    }

    /// Rejects notifications addressed to any other merchant id.
    pub fn with_merchant(mut self, merchant_id: impl Into<String>) -> Self {
        let merchant_id = merchant_id.into();
        self.merchant_id = (!merchant_id.is_empty()).then_some(merchant_id);
        self
    }

    pub fn verifies_signatures(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Runs one delivery through authentication, decoding and the merchant
    /// check. `body` must be the raw bytes as received.
    pub fn parse(&self, signature: Option<&str>, body: &[u8]) -> Result<Notification, IpnError> {
        self.authenticate(signature, body)?;

        let notification = Notification::from_form(body)?;
        if let Some(merchant_id) = &self.merchant_id {
            if notification.merchant() != merchant_id {
                warn!(
                    ipn_id = notification.ipn_id(),
                    merchant = notification.merchant(),
                    "ipn rejected for unknown merchant"
                );
                return Err(IpnError::UnknownMerchant {
                    merchant: notification.merchant().to_string(),
                });
            }
        }

        debug!(
            ipn_id = notification.ipn_id(),
            ipn_type = %notification.kind(),
            "ipn decoded"
        );
        Ok(notification)
    }

    fn authenticate(&self, signature: Option<&str>, body: &[u8]) -> Result<(), IpnError> {
        if !self.verifies_signatures() {
            debug!("ipn secret is empty, skipping hmac verification");
            return Ok(());
        }
        let Some(signature) = signature else {
            warn!("ipn rejected, HMAC header is missing");
            return Err(IpnError::MissingSignature);
        };
        let valid = hmac::verify(self.secret.as_bytes(), body, signature)
            .map_err(|source| IpnError::Signing { source })?;
        if !valid {
            warn!("ipn rejected, HMAC does not match the body");
            return Err(IpnError::InvalidSignature);
        }
        Ok(())
    }
}
