pub mod config;
pub mod handler;
pub mod http_server;
pub mod service;
pub mod telemetry;

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::service::ipn::notification::Notification;
use crate::service::ipn::service::Service as IpnService;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub ipn_service: IpnService,
    pub notifications: broadcast::Sender<Arc<Notification>>,
    pub max_body_bytes: usize,
}
