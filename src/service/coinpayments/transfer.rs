//! Moving funds out: merchant transfers and withdrawals.

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::error::ApiError;
use super::service::Service;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTransferRequest {
    pub amount: String,
    pub currency: String,
    pub merchant: String,
    pub pbntag: String,
    pub auto_confirm: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTransferResponse {
    pub id: String,
    pub status: i64,
}

impl Command for CreateTransferRequest {
    const NAME: &'static str = "create_transfer";
    type Response = CreateTransferResponse;
}

/// Creates a withdrawal. Progress is reported as `withdrawal` IPNs sent to
/// `ipn_url`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWithdrawalRequest {
    pub amount: String,
    pub add_tx_fee: String,
    pub currency: String,
    pub currency2: String,
    pub address: String,
    pub pbntag: String,
    pub dest_tag: String,
    pub ipn_url: String,
    pub auto_confirm: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateWithdrawalResponse {
    pub id: String,
    pub status: i64,
    pub amount: String,
}

impl Command for CreateWithdrawalRequest {
    const NAME: &'static str = "create_withdrawal";
    type Response = CreateWithdrawalResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWithdrawalInfoRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetWithdrawalInfoResponse {
    pub time_created: i64,
    pub status: i64,
    pub status_text: String,
    pub coin: String,
    pub amount: i64,
    pub amountf: String,
    pub note: String,
    pub send_address: String,
    pub send_txid: String,
}

impl Command for GetWithdrawalInfoRequest {
    const NAME: &'static str = "get_withdrawal_info";
    type Response = GetWithdrawalInfoResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetWithdrawalHistoryRequest {
    pub limit: String,
    pub start: String,
    pub newer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalHistoryEntry {
    pub id: String,
    pub time_created: i64,
    pub status: i64,
    pub status_text: String,
    pub coin: String,
    pub amount: i64,
    pub amountf: String,
    pub note: String,
    pub send_address: String,
    pub send_dest_tag: String,
    pub send_txid: String,
}

impl Command for GetWithdrawalHistoryRequest {
    const NAME: &'static str = "get_withdrawal_history";
    type Response = Vec<WithdrawalHistoryEntry>;
}

impl Service {
    pub async fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> Result<CreateTransferResponse, ApiError> {
        self.call(request).await
    }

    pub async fn create_withdrawal(
        &self,
        request: &CreateWithdrawalRequest,
    ) -> Result<CreateWithdrawalResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_withdrawal_info(
        &self,
        request: &GetWithdrawalInfoRequest,
    ) -> Result<GetWithdrawalInfoResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_withdrawal_history(
        &self,
        request: &GetWithdrawalHistoryRequest,
    ) -> Result<Vec<WithdrawalHistoryEntry>, ApiError> {
        self.call(request).await
    }
}
