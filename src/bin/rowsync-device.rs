//! Device simulator: serves the guidance camera's HTTP API for development
//! and integration tests. State lives in memory, seeded from the factory
//! defaults; `/journal` exposes the handled-request order for tests.

use anyhow::Result;

#[path = "rowsync_device/state.rs"]
mod state;
#[path = "rowsync_device/handlers.rs"]
mod handlers;
#[path = "rowsync_device/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    runtime::run().await
}
