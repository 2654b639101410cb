use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use clap::Parser;

use super::handlers;
use super::state::DeviceState;

#[derive(Parser)]
#[command(name = "rowsync-device")]
#[command(about = "Guidance-camera device simulator", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<()> {
    let args = Args::parse();
    let state = Arc::new(DeviceState::seeded());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("rowsync-device listening on {}", local_addr);
    maybe_write_addr_file(args.addr_file.as_ref(), local_addr)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn build_router(state: Arc<DeviceState>) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/config", get(handlers::get_config))
        .route("/update", post(handlers::post_update))
        .route("/calibrate", post(handlers::post_calibrate))
        .route("/out.jpg", get(handlers::get_image))
        .route("/logs/log.txt", get(handlers::get_log))
        .route("/journal", get(handlers::get_journal))
        .with_state(state)
}

fn maybe_write_addr_file(addr_file: Option<&PathBuf>, local_addr: SocketAddr) -> Result<()> {
    if let Some(addr_file) = addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
