use serde::{Deserialize, Serialize};

use super::command::Command;
use super::error::ApiError;
use super::service::Service;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertRequest {
    pub amount: String,
    pub from: String,
    pub to: String,
    pub address: String,
    pub dest_tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertResponse {
    pub id: String,
}

impl Command for ConvertRequest {
    const NAME: &'static str = "convert";
    type Response = ConvertResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertLimitsRequest {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertLimitsResponse {
    pub min: String,
    pub max: String,
}

impl Command for ConvertLimitsRequest {
    const NAME: &'static str = "convert_limits";
    type Response = ConvertLimitsResponse;
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetConversionInfoRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConversionInfoResponse {
    pub time_created: String,
    pub status: i64,
    pub status_text: String,
    pub coin1: String,
    pub coin2: String,
    pub amount_sent: i64,
    pub amount_sentf: String,
    pub received: i64,
    pub receivedf: String,
}

impl Command for GetConversionInfoRequest {
    const NAME: &'static str = "get_conversion_info";
    type Response = GetConversionInfoResponse;
}

impl Service {
    pub async fn convert(&self, request: &ConvertRequest) -> Result<ConvertResponse, ApiError> {
        self.call(request).await
    }

    pub async fn convert_limits(
        &self,
        request: &ConvertLimitsRequest,
    ) -> Result<ConvertLimitsResponse, ApiError> {
        self.call(request).await
    }

    pub async fn get_conversion_info(
        &self,
        request: &GetConversionInfoRequest,
    ) -> Result<GetConversionInfoResponse, ApiError> {
        self.call(request).await
    }
}
