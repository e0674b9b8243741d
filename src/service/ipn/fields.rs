//! Field groups carried by IPN bodies.
//!
//! Every value is kept exactly as it arrived on the wire. Keys missing from
//! the body decode to an empty string and keys nobody asked for are ignored.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::error::IpnError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpnEnvelope {
    pub ipn_version: String,
    pub ipn_type: String,
    pub ipn_mode: String,
    pub ipn_id: String,
    pub merchant: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerInfo {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingInfo {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zip")]
    pub zip_code: String,
    pub country: String,
    pub country_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleButtonFields {
    pub status: String,
    pub status_text: String,
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub currency1: String,
    pub currency2: String,
    pub amount1: String,
    pub amount2: String,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub fee: String,
    pub net: String,
    pub item_amount: String,
    pub item_name: String,
    #[serde(rename = "item_desc")]
    pub item_description: String,
    pub item_number: String,
    pub invoice: String,
    pub custom: String,
    #[serde(rename = "on1")]
    pub option1_name: String,
    #[serde(rename = "ov1")]
    pub option1_value: String,
    #[serde(rename = "on2")]
    pub option2_name: String,
    #[serde(rename = "ov2")]
    pub option2_value: String,
    pub send_tx: String,
    pub received_amount: String,
    pub received_confirms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedButtonFields {
    pub status: String,
    pub status_text: String,
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub currency1: String,
    pub currency2: String,
    pub amount1: String,
    pub amount2: String,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub fee: String,
    pub net: String,
    pub item_amount: String,
    pub item_name: String,
    pub quantity: String,
    pub item_number: String,
    pub invoice: String,
    pub custom: String,
    #[serde(rename = "on1")]
    pub option1_name: String,
    #[serde(rename = "ov1")]
    pub option1_value: String,
    #[serde(rename = "on2")]
    pub option2_name: String,
    #[serde(rename = "ov2")]
    pub option2_value: String,
    pub extra: String,
    pub send_tx: String,
    pub received_amount: String,
    pub received_confirms: String,
}

/// Cart checkouts list their items with a positional suffix:
/// `item_name_1`, `item_amount_1`, `item_name_2`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingCartFields {
    pub status: String,
    pub status_text: String,
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub currency1: String,
    pub currency2: String,
    pub amount1: String,
    pub amount2: String,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub fee: String,
    pub invoice: String,
    pub custom: String,
    pub extra: String,
    pub send_tx: String,
    pub received_amount: String,
    pub received_confirms: String,
    #[serde(skip_deserializing)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The numeric suffix the item was sent with, starting at 1.
    pub index: u32,
    pub name: String,
    pub amount: String,
    pub quantity: String,
    pub number: String,
    pub option1_name: String,
    pub option1_value: String,
    pub option2_name: String,
    pub option2_value: String,
}

const CART_ITEM_FIELDS: [&str; 8] = [
    "name", "amount", "quantity", "number", "on1", "ov1", "on2", "ov2",
];

impl CartItem {
    fn new(index: u32) -> Self {
        CartItem {
            index,
            ..Default::default()
        }
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "amount" => Some(&mut self.amount),
            "quantity" => Some(&mut self.quantity),
            "number" => Some(&mut self.number),
            "on1" => Some(&mut self.option1_name),
            "ov1" => Some(&mut self.option1_value),
            "on2" => Some(&mut self.option2_name),
            "ov2" => Some(&mut self.option2_value),
            _ => None,
        }
    }
}

/// Collects `item_<field>_<n>` pairs into items ordered by `n`.
///
/// An item exists as soon as one recognised field is sent for it, even
/// with an empty value. Each field may be sent once per item.
pub(crate) fn cart_items(pairs: &[(String, String)]) -> Result<Vec<CartItem>, IpnError> {
    let mut items: BTreeMap<u32, CartItem> = BTreeMap::new();
    let mut seen: HashSet<(&str, u32)> = HashSet::new();
    for (key, value) in pairs {
        let Some((field, index)) = split_item_key(key) else {
            continue;
        };
        if !CART_ITEM_FIELDS.contains(&field) {
            continue;
        }
        if !seen.insert((field, index)) {
            return Err(IpnError::MalformedPayload {
                reason: format!("duplicate field `{key}`"),
            });
        }
        let item = items.entry(index).or_insert_with(|| CartItem::new(index));
        if let Some(slot) = item.field_mut(field) {
            *slot = value.clone();
        }
    }
    Ok(items.into_values().collect())
}

fn split_item_key(key: &str) -> Option<(&str, u32)> {
    let rest = key.strip_prefix("item_")?;
    let (field, index) = rest.rsplit_once('_')?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: u32 = index.parse().ok()?;
    (index > 0).then_some((field, index))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationButtonFields {
    pub status: String,
    pub status_text: String,
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub currency1: String,
    pub currency2: String,
    pub amount1: String,
    pub amount2: String,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub fee: String,
    pub net: String,
    pub item_name: String,
    pub item_number: String,
    pub invoice: String,
    pub custom: String,
    #[serde(rename = "on1")]
    pub option1_name: String,
    #[serde(rename = "ov1")]
    pub option1_value: String,
    #[serde(rename = "on2")]
    pub option2_name: String,
    #[serde(rename = "ov2")]
    pub option2_value: String,
    pub extra: String,
    pub send_tx: String,
    pub received_amount: String,
    pub received_confirms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiTransactionFields {
    pub status: String,
    pub status_text: String,
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub currency1: String,
    pub currency2: String,
    pub amount1: String,
    pub amount2: String,
    pub fee: String,
    pub buyer_name: String,
    pub email: String,
    pub item_name: String,
    pub item_number: String,
    pub invoice: String,
    pub custom: String,
    pub send_tx: String,
    pub received_amount: String,
    pub received_confirms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositInfo {
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub address: String,
    pub dest_tag: String,
    pub label: String,
    pub status: String,
    pub status_text: String,
    pub currency: String,
    pub confirms: String,
    pub amount: String,
    pub amounti: String,
    pub fee: String,
    pub feei: String,
    pub fiat_coin: String,
    pub fiat_amount: String,
    pub fiat_amounti: String,
    pub fiat_fee: String,
    pub fiat_feei: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalInfo {
    pub id: String,
    pub status: String,
    pub status_text: String,
    pub address: String,
    #[serde(rename = "txn_id")]
    pub transaction_id: String,
    pub currency: String,
    pub amount: String,
    pub amounti: String,
}
