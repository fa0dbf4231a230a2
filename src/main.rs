//! Boss Helper - An HTTP helper server for boss encounters
//!
//! This is the main entry point for the boss-helper application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use boss_helper::{
    api::create_router,
    config::Config,
    encounters,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("boss_helper={},tower_http=info", config.log_level()))
        .init();

    info!("Starting boss-helper server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    let encounters = encounters::all()?;
    for encounter in &encounters {
        info!(
            "Loaded {} with {} phases: {}",
            encounter.title,
            encounter.table.len(),
            encounter.table.cycle_summary()
        );
    }

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), encounters)?);

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /encounters              - List encounters");
    info!("  GET  /encounters/:slug        - Guide and phase table");
    info!("  GET  /encounters/:slug/timer  - Current and next phase, time remaining");
    info!("  POST /encounters/:slug/start  - Reset and start the timer");
    info!("  POST /encounters/:slug/stop   - Stop the timer");
    info!("  GET  /status                  - All timers and server status");
    info!("  GET  /health                  - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.stop_all();
    info!("Server shutdown complete");
    Ok(())
}
