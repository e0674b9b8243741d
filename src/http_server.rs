use crate::{config::Settings, handler, AppState, SharedState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::{io, net::TcpListener, sync::broadcast};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::service::ipn::notification::Notification;
use crate::service::ipn::service::Service as IpnService;

/// Decoded notifications kept for subscribers that fall behind.
const NOTIFICATION_BUFFER: usize = 256;

pub struct HttpServer {
    router: Router,
    listener: TcpListener,
    port: u16,
    notifications: broadcast::Sender<Arc<Notification>>,
}

impl HttpServer {
    pub async fn build(cfg: Settings) -> Result<Self, io::Error> {
        let ipn_service = IpnService::new(cfg.ipn.secret).with_merchant(cfg.ipn.merchant_id);
        if !ipn_service.verifies_signatures() {
            info!("ipn secret is not set, HMAC headers will not be checked");
        }
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);

        let app_state = AppState {
            ipn_service,
            notifications: notifications.clone(),
            max_body_bytes: cfg.ipn.max_body_bytes,
        };
        let shared_state = Arc::new(app_state);

        let router = get_router(shared_state, &cfg.ipn.path);
        let listener = TcpListener::bind(&cfg.server.address).await?;
        let port = listener.local_addr()?.port();
        info!("ipn listener bound to {}", cfg.server.address);
        Ok(HttpServer {
            router,
            listener,
            port,
            notifications,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Receives every notification accepted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Notification>> {
        self.notifications.subscribe()
    }

    pub async fn run(self) -> Result<(), io::Error> {
        axum::serve(self.listener, self.router).await
    }
}

pub fn get_router(shared_state: SharedState, ipn_path: &str) -> Router {
    let ipn_path = if ipn_path.starts_with('/') {
        ipn_path.to_string()
    } else {
        format!("/{ipn_path}")
    };

    Router::new()
        .route("/health_check", get(handler::api::health_check::health_check))
        .route(&ipn_path, post(handler::api::ipn::handle_ipn))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}
