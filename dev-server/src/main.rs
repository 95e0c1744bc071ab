//! Development server for the machinery registration UI
//!
//! Runs the mock machinery backend on a fixed port, seeded with reference
//! lists and one stored machine, so the UI can be developed without the real
//! backend.
//!
//! Usage: cargo run -p dev-server

use anyhow::{Context, Result};
use test_helpers::{mock, spawn_backend_on_port, telemetry};
use tracing::info;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber);

    let port = match std::env::var("MOCK_BACKEND_PORT") {
        Ok(port) => port
            .parse()
            .with_context(|| format!("Invalid MOCK_BACKEND_PORT: {port}"))?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting mock machinery backend");
    let backend = spawn_backend_on_port(port, mock::seeded_state()).await;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}/api", backend.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        backend.port
    );
    info!(
        "   Edit the sample machine at /maquinaria/editar/{}",
        mock::SAMPLE_MACHINE_ID
    );
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
