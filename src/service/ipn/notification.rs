use std::fmt::Display;

use percent_encoding::percent_decode;
use serde::{de::DeserializeOwned, Serialize};

use super::error::IpnError;
use super::fields::{
    cart_items, AdvancedButtonFields, ApiTransactionFields, BuyerInfo, DepositInfo,
    DonationButtonFields, IpnEnvelope, ShippingInfo, ShoppingCartFields, SimpleButtonFields,
    WithdrawalInfo,
};

pub const IPN_TYPE_SIMPLE: &str = "simple";
pub const IPN_TYPE_BUTTON: &str = "button";
pub const IPN_TYPE_CART: &str = "cart";
pub const IPN_TYPE_DONATION: &str = "donation";
pub const IPN_TYPE_DEPOSIT: &str = "deposit";
pub const IPN_TYPE_WITHDRAWAL: &str = "withdrawal";
pub const IPN_TYPE_API: &str = "api";

/// The `ipn_type` discriminator.
///
/// Values this crate does not know about are kept in `Other` so newer
/// notification kinds still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum IpnType {
    Simple,
    Button,
    Cart,
    Donation,
    Deposit,
    Withdrawal,
    Api,
    Other(String),
}

impl IpnType {
    pub fn as_str(&self) -> &str {
        match self {
            IpnType::Simple => IPN_TYPE_SIMPLE,
            IpnType::Button => IPN_TYPE_BUTTON,
            IpnType::Cart => IPN_TYPE_CART,
            IpnType::Donation => IPN_TYPE_DONATION,
            IpnType::Deposit => IPN_TYPE_DEPOSIT,
            IpnType::Withdrawal => IPN_TYPE_WITHDRAWAL,
            IpnType::Api => IPN_TYPE_API,
            IpnType::Other(other) => other,
        }
    }
}

impl From<&str> for IpnType {
    fn from(s: &str) -> Self {
        match s {
            IPN_TYPE_SIMPLE => IpnType::Simple,
            IPN_TYPE_BUTTON => IpnType::Button,
            IPN_TYPE_CART => IpnType::Cart,
            IPN_TYPE_DONATION => IpnType::Donation,
            IPN_TYPE_DEPOSIT => IpnType::Deposit,
            IPN_TYPE_WITHDRAWAL => IpnType::Withdrawal,
            IPN_TYPE_API => IpnType::Api,
            other => IpnType::Other(other.to_string()),
        }
    }
}

impl From<IpnType> for String {
    fn from(ipn_type: IpnType) -> Self {
        ipn_type.as_str().to_string()
    }
}

impl Display for IpnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Buyer and shipping details plus the transaction fields of one checkout
/// button kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkout<F> {
    buyer: BuyerInfo,
    shipping: ShippingInfo,
    transaction: F,
}

impl<F: DeserializeOwned> Checkout<F> {
    fn decode(body: &[u8]) -> Result<Self, IpnError> {
        Ok(Checkout {
            buyer: decode(body)?,
            shipping: decode(body)?,
            transaction: decode(body)?,
        })
    }
}

impl<F> Checkout<F> {
    pub fn buyer(&self) -> &BuyerInfo {
        &self.buyer
    }

    pub fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    pub fn transaction(&self) -> &F {
        &self.transaction
    }
}

pub type SimpleIpn = Checkout<SimpleButtonFields>;
pub type ButtonIpn = Checkout<AdvancedButtonFields>;
pub type CartIpn = Checkout<ShoppingCartFields>;
pub type DonationIpn = Checkout<DonationButtonFields>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Simple(SimpleIpn),
    Button(ButtonIpn),
    Cart(CartIpn),
    Donation(DonationIpn),
    Deposit(DepositInfo),
    Withdrawal(WithdrawalInfo),
    Api(ApiTransactionFields),
    /// The `ipn_type` is not one this crate knows, only the envelope was read.
    Unknown,
}

/// A decoded IPN. Exactly one projection matches its `ipn_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    envelope: IpnEnvelope,
    #[serde(skip)]
    kind: IpnType,
    payload: Payload,
}

impl Notification {
    /// Decodes a form-encoded IPN body without checking its signature.
    pub fn from_form(body: &[u8]) -> Result<Self, IpnError> {
        check_utf8(body)?;
        let envelope: IpnEnvelope = decode(body)?;
        if envelope.ipn_type.is_empty() {
            return Err(IpnError::MalformedPayload {
                reason: "ipn_type is missing".to_string(),
            });
        }

        let kind = IpnType::from(envelope.ipn_type.as_str());
        let payload = match &kind {
            IpnType::Simple => Payload::Simple(Checkout::decode(body)?),
            IpnType::Button => Payload::Button(Checkout::decode(body)?),
            IpnType::Cart => {
                let mut cart: CartIpn = Checkout::decode(body)?;
                let pairs: Vec<(String, String)> = decode(body)?;
                cart.transaction.items = cart_items(&pairs)?;
                Payload::Cart(cart)
            }
            IpnType::Donation => Payload::Donation(Checkout::decode(body)?),
            IpnType::Deposit => Payload::Deposit(decode(body)?),
            IpnType::Withdrawal => Payload::Withdrawal(decode(body)?),
            IpnType::Api => Payload::Api(decode(body)?),
            IpnType::Other(_) => Payload::Unknown,
        };

        Ok(Notification {
            envelope,
            kind,
            payload,
        })
    }

    pub fn envelope(&self) -> &IpnEnvelope {
        &self.envelope
    }

    pub fn kind(&self) -> &IpnType {
        &self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn ipn_id(&self) -> &str {
        &self.envelope.ipn_id
    }

    pub fn merchant(&self) -> &str {
        &self.envelope.merchant
    }

    pub fn as_simple(&self) -> Result<&SimpleIpn, IpnError> {
        match &self.payload {
            Payload::Simple(ipn) => Ok(ipn),
            _ => Err(self.mismatch(IpnType::Simple)),
        }
    }

    pub fn as_button(&self) -> Result<&ButtonIpn, IpnError> {
        match &self.payload {
            Payload::Button(ipn) => Ok(ipn),
            _ => Err(self.mismatch(IpnType::Button)),
        }
    }

    pub fn as_cart(&self) -> Result<&CartIpn, IpnError> {
        match &self.payload {
            Payload::Cart(ipn) => Ok(ipn),
            _ => Err(self.mismatch(IpnType::Cart)),
        }
    }

    pub fn as_donation(&self) -> Result<&DonationIpn, IpnError> {
        match &self.payload {
            Payload::Donation(ipn) => Ok(ipn),
            _ => Err(self.mismatch(IpnType::Donation)),
        }
    }

    pub fn as_deposit(&self) -> Result<&DepositInfo, IpnError> {
        match &self.payload {
            Payload::Deposit(info) => Ok(info),
            _ => Err(self.mismatch(IpnType::Deposit)),
        }
    }

    pub fn as_withdrawal(&self) -> Result<&WithdrawalInfo, IpnError> {
        match &self.payload {
            Payload::Withdrawal(info) => Ok(info),
            _ => Err(self.mismatch(IpnType::Withdrawal)),
        }
    }

    pub fn as_api(&self) -> Result<&ApiTransactionFields, IpnError> {
        match &self.payload {
            Payload::Api(fields) => Ok(fields),
            _ => Err(self.mismatch(IpnType::Api)),
        }
    }

    fn mismatch(&self, expected: IpnType) -> IpnError {
        IpnError::TypeMismatch {
            expected,
            actual: self.kind.clone(),
        }
    }
}

/// Rejects bodies whose keys or values are not utf-8 once percent-decoded,
/// before serde would replace the bad bytes with U+FFFD.
fn check_utf8(body: &[u8]) -> Result<(), IpnError> {
    for pair in body.split(|b| *b == b'&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.iter().position(|b| *b == b'=') {
            Some(i) => (&pair[..i], &pair[i + 1..]),
            None => (pair, &pair[pair.len()..]),
        };
        for part in [key, value] {
            if percent_decode(part).decode_utf8().is_err() {
                return Err(IpnError::MalformedPayload {
                    reason: format!(
                        "field `{}` is not valid utf-8",
                        String::from_utf8_lossy(key)
                    ),
                });
            }
        }
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, IpnError> {
    serde_urlencoded::from_bytes(body).map_err(|e| IpnError::MalformedPayload {
        reason: e.to_string(),
    })
}
