use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::Site;
use crate::site::fs::FileSystem;

pub async fn run<F: FileSystem>(cfg: &Config, site: Arc<Site<F>>) -> anyhow::Result<()> {
    let addr = cfg.server.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    serve(listener, site).await
}

/// Accepts connections forever, one task per connection.
///
/// A failed accept is logged and the loop carries on.
pub async fn serve<F: FileSystem>(listener: TcpListener, site: Arc<Site<F>>) -> anyhow::Result<()> {
    info!("started listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "server error");
                continue;
            }
        };

        let site = Arc::clone(&site);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer.to_string(), site);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
