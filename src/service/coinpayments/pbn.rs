//! $PayByName tag management.
//!
//! Most of these commands answer with an empty list on success, their
//! result is returned as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::command::Command;
use super::error::ApiError;
use super::service::Service;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPbnInfoRequest {
    pub pbntag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPbnInfoResponse {
    pub pbntag: String,
    pub merchant: String,
    pub profile_name: String,
    pub profile_url: String,
    pub profile_email: String,
    pub profile_image: String,
    pub member_since: i64,
    pub feedback: PbnFeedback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbnFeedback {
    #[serde(rename = "pos")]
    pub positive: i64,
    #[serde(rename = "neg")]
    pub negative: i64,
    #[serde(rename = "neut")]
    pub neutral: String,
    pub total: i64,
    pub percent: String,
}

impl Command for GetPbnInfoRequest {
    const NAME: &'static str = "get_pbn_info";
    type Response = GetPbnInfoResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPbnListRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbnTag {
    pub tagid: String,
    pub pbntag: String,
    pub time_expires: i64,
}

impl Command for GetPbnListRequest {
    const NAME: &'static str = "get_pbn_list";
    type Response = Vec<PbnTag>;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BuyPbnTagsRequest {
    pub coin: String,
    #[serde(rename = "num")]
    pub number: String,
}

impl Command for BuyPbnTagsRequest {
    const NAME: &'static str = "buy_pbn_tags";
    type Response = Value;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClaimPbnTagRequest {
    pub tagid: String,
    pub name: String,
}

impl Command for ClaimPbnTagRequest {
    const NAME: &'static str = "claim_pbn_tag";
    type Response = Value;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClaimPbnCouponRequest {
    pub coupon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimPbnCouponResponse {
    pub tagid: String,
}

impl Command for ClaimPbnCouponRequest {
    const NAME: &'static str = "claim_pbn_coupon";
    type Response = ClaimPbnCouponResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePbnTagRequest {
    pub tagid: String,
    pub name: String,
    pub email: String,
    pub url: String,
    pub image: String,
}

impl Command for UpdatePbnTagRequest {
    const NAME: &'static str = "update_pbn_tag";
    type Response = Value;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenewPbnTagRequest {
    pub tagid: String,
    pub coin: String,
    pub years: String,
}

impl Command for RenewPbnTagRequest {
    const NAME: &'static str = "renew_pbn_tag";
    type Response = Value;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletePbnTagRequest {
    pub tagid: String,
}

impl Command for DeletePbnTagRequest {
    const NAME: &'static str = "delete_pbn_tag";
    type Response = Value;
}

impl Service {
    pub async fn get_pbn_info(
        &self,
        request: &GetPbnInfoRequest,
    ) -> Result<GetPbnInfoResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_pbn_list(&self) -> Result<Vec<PbnTag>, ApiError> {
        self.call(&GetPbnListRequest {}).await
    }

    pub async fn buy_pbn_tags(&self, request: &BuyPbnTagsRequest) -> Result<Value, ApiError> {
        self.call(request).await
    }

    pub async fn claim_pbn_tag(&self, request: &ClaimPbnTagRequest) -> Result<Value, ApiError> {
        self.call(request).await
    }

    pub async fn claim_pbn_coupon(
        &self,
        request: &ClaimPbnCouponRequest,
    ) -> Result<ClaimPbnCouponResponse, ApiError> {
        self.call(request).await
    }

    pub async fn update_pbn_tag(&self, request: &UpdatePbnTagRequest) -> Result<Value, ApiError> {
        self.call(request).await
    }

    pub async fn renew_pbn_tag(&self, request: &RenewPbnTagRequest) -> Result<Value, ApiError> {
        self.call(request).await
    }

    pub async fn delete_pbn_tag(&self, request: &DeletePbnTagRequest) -> Result<Value, ApiError> {
        self.call(request).await
    }
}
