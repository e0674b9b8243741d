//! Checkout transactions created through the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::command::Command;
use super::error::ApiError;
use super::service::Service;

/// Creates a payment. Its status changes are reported as `api` IPNs sent
/// to `ipn_url`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTransactionRequest {
    pub amount: String,
    pub currency1: String,
    pub currency2: String,
    pub buyer_email: String,
    pub address: String,
    pub buyer_name: String,
    pub item_name: String,
    pub item_number: String,
    pub invoice: String,
    pub custom: String,
    pub ipn_url: String,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTransactionResponse {
    pub amount: String,
    pub address: String,
    pub dest_tag: String,
    pub txn_id: String,
    pub confirms_needed: String,
    pub timeout: i64,
    pub checkout_url: String,
    pub status_url: String,
    pub qrcode_url: String,
}

impl Command for CreateTransactionRequest {
    const NAME: &'static str = "create_transaction";
    type Response = CreateTransactionResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTxInfoRequest {
    pub txid: String,
    /// `1` to include checkout and shipping details.
    pub full: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxInfo {
    pub time_created: i64,
    pub time_expires: i64,
    pub status: i64,
    pub status_text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub coin: String,
    pub amount: i64,
    pub amountf: String,
    pub received: i64,
    pub receivedf: String,
    #[serde(rename = "recv_confirms")]
    pub received_confirms: i64,
    pub payment_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<TxCheckout>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub shipping: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxCheckout {
    pub currency: String,
    pub amount: i64,
    pub test: i64,
    pub item_number: String,
    pub item_name: String,
    pub details: Vec<Value>,
    pub invoice: String,
    pub custom: String,
    pub ipn_url: String,
    pub amountf: Value,
}

impl Command for GetTxInfoRequest {
    const NAME: &'static str = "get_tx_info";
    type Response = TxInfo;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTxInfoMultiRequest {
    /// Transaction ids separated by `|`.
    pub txid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxInfoEntry {
    /// Per-transaction error, `ok` when the lookup succeeded.
    pub error: String,
    pub time_created: i64,
    pub time_expires: i64,
    pub status: i64,
    pub status_text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub coin: String,
    pub amount: i64,
    pub amountf: String,
    pub received: i64,
    pub receivedf: String,
    #[serde(rename = "recv_confirms")]
    pub received_confirms: i64,
    pub payment_address: String,
}

pub type GetTxInfoMultiResponse = BTreeMap<String, TxInfoEntry>;

impl Command for GetTxInfoMultiRequest {
    const NAME: &'static str = "get_tx_info_multi";
    type Response = GetTxInfoMultiResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetTxIdsRequest {
    pub limit: String,
    pub start: String,
    pub newer: String,
}

impl Command for GetTxIdsRequest {
    const NAME: &'static str = "get_tx_ids";
    type Response = Vec<String>;
}

impl Service {
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_tx_info(&self, request: &GetTxInfoRequest) -> Result<TxInfo, ApiError> {
        self.call(request).await
    }

    pub async fn get_tx_info_multi(
        &self,
        request: &GetTxInfoMultiRequest,
    ) -> Result<GetTxInfoMultiResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_tx_ids(&self, request: &GetTxIdsRequest) -> Result<Vec<String>, ApiError> {
        self.call(request).await
    }
}
