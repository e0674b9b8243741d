use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::service::auth::hmac::HMAC_HEADER;
use crate::SharedState;

use super::response;

pub const IPN_ACCEPTED_MESSAGE: &str = "IPN OK";

#[derive(Debug, Serialize, Deserialize)]
pub struct IpnAck {
    pub ipn_id: String,
    pub ipn_type: String,
}

/// Receives one IPN delivery.
///
/// The body is read as raw bytes since the HMAC covers them exactly as sent.
pub async fn handle_ipn(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let (head, body) = req.into_parts();
    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Err(e) => {
            warn!("cannot read ipn body due to err: {e}");
            return response::error(StatusCode::BAD_REQUEST, "invalid request body")
                .into_response();
        }
        Ok(b) => b,
    };

    // A present but non-ascii header is still a signature, not a missing one.
    let signature = head.headers.get(HMAC_HEADER).map(|header| {
        if header.to_str().is_err() {
            warn!("HMAC header is not visible ascii");
        }
        String::from_utf8_lossy(header.as_bytes())
    });

    let notification = match state.ipn_service.parse(signature.as_deref(), &body) {
        Ok(n) => n,
        Err(err) => return err.into_response(),
    };

    let ack = IpnAck {
        ipn_id: notification.ipn_id().to_string(),
        ipn_type: notification.kind().to_string(),
    };
    if state.notifications.send(Arc::new(notification)).is_err() {
        debug!(ipn_id = %ack.ipn_id, "no subscriber for accepted ipn");
    }
    response::success(ack, IPN_ACCEPTED_MESSAGE).into_response()
}
