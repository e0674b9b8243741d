use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::service::ipn::error::IpnError;

use super::response::ApiError;

impl IntoResponse for IpnError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::MissingSignature => StatusCode::UNAUTHORIZED,
            Self::InvalidSignature => StatusCode::UNAUTHORIZED,
            Self::UnknownMerchant { .. } => StatusCode::UNAUTHORIZED,
            Self::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            Self::TypeMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Signing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status_code,
            Json(ApiError {
                message: &self.to_string(),
            }),
        )
            .into_response()
    }
}
