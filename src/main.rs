use std::sync::Arc;

use snake_server::config::Config;
use snake_server::server;
use snake_server::site::Site;
use snake_server::site::fs::LocalFs;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let site = Arc::new(Site::new(&cfg.static_files, LocalFs));

    tokio::select! {
        res = server::listener::run(&cfg, site) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
