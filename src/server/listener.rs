use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind to {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    match cfg.files.directory.as_deref() {
        Some(dir) => info!("Serving files from {}", dir.display()),
        None => warn!("No file directory configured, /files/ routes are disabled"),
    }

    let router = Arc::new(Router::new(cfg.file_store()));
    serve(listener, router).await
}

/// Accepts connections until `accept` fails, handling each one on its own
/// task. Tasks share nothing but the read-only router.
pub async fn serve(listener: TcpListener, router: Arc<Router>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                warn!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
