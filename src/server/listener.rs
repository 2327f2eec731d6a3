use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    if cfg.directory.is_none() {
        warn!("No --directory given, /files/ requests will return 404");
    }

    let router = Arc::new(Router::new(cfg.directory.clone()));
    serve(listener, router).await
}

/// Accepts connections forever, one task per connection. A failed accept or
/// a failed connection is logged and does not stop the loop.
pub async fn serve(listener: TcpListener, router: Arc<Router>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
