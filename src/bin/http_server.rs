use coinpayments::config;
use coinpayments::telemetry::{get_subscriber, init_subscriber};

use coinpayments::http_server::HttpServer;

#[tokio::main]
async fn main() {
    let cfg = config::Settings::new().expect("cannot parse configuration");
    let subscriber = get_subscriber("coinpayments-ipn".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let http_server = HttpServer::build(cfg)
        .await
        .expect("cannot bind http server");
    http_server.run().await.expect("http server stopped");
}
