//! Account level commands: merchant info, balances, addresses and rates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::error::ApiError;
use super::service::Service;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetBasicInfoRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBasicInfoResponse {
    pub username: String,
    pub merchant_id: String,
    pub email: String,
    pub public_name: String,
}

impl Command for GetBasicInfoRequest {
    const NAME: &'static str = "get_basic_info";
    type Response = GetBasicInfoResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BalancesRequest {
    /// `1` to include coins with a zero balance.
    pub all: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinBalance {
    /// Balance in satoshis (or the coin's smallest unit).
    pub balance: i64,
    pub balancef: String,
    pub status: String,
}

pub type BalancesResponse = BTreeMap<String, CoinBalance>;

impl Command for BalancesRequest {
    const NAME: &'static str = "balances";
    type Response = BalancesResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetDepositAddressRequest {
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetDepositAddressResponse {
    pub address: String,
    pub pubkey: String,
    pub dest_tag: i64,
}

impl Command for GetDepositAddressRequest {
    const NAME: &'static str = "get_deposit_address";
    type Response = GetDepositAddressResponse;
}

/// Deposit addresses created this way send `deposit` IPNs to `ipn_url`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCallbackAddressRequest {
    pub currency: String,
    pub ipn_url: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCallbackAddressResponse {
    pub address: String,
    pub pubkey: String,
    pub dest_tag: String,
}

impl Command for GetCallbackAddressRequest {
    const NAME: &'static str = "get_callback_address";
    type Response = GetCallbackAddressResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RatesRequest {
    pub short: String,
    pub accepted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    pub is_fiat: i64,
    pub rate_btc: String,
    pub last_update: String,
    pub tx_fee: String,
    pub status: String,
    pub name: String,
    pub confirms: String,
    pub capabilities: Vec<String>,
    pub accepted: i64,
}

pub type RatesResponse = BTreeMap<String, Rate>;

impl Command for RatesRequest {
    const NAME: &'static str = "rates";
    type Response = RatesResponse;
}

impl Service {
    pub async fn get_basic_info(&self) -> Result<GetBasicInfoResponse, ApiError> {
        self.call(&GetBasicInfoRequest {}).await
    }

    pub async fn balances(&self, request: &BalancesRequest) -> Result<BalancesResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_deposit_address(
        &self,
        request: &GetDepositAddressRequest,
    ) -> Result<GetDepositAddressResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_callback_address(
        &self,
        request: &GetCallbackAddressRequest,
    ) -> Result<GetCallbackAddressResponse, ApiError> {
        self.call(request).await
    }

    pub async fn rates(&self, request: &RatesRequest) -> Result<RatesResponse, ApiError> {
        self.call(request).await
    }
}
