//! Productivity Timer - A Pomodoro-style timer with a task list, served over HTTP
//!
//! This is the main entry point for the productivity-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use productivity_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("productivity_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting productivity-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state with a fresh widget session
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the ticker background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /                      - Timer widget page");
    info!("  GET    /style.css             - Widget stylesheet");
    info!("  GET    /api/status            - Session status");
    info!("  GET    /api/display           - Latest display projection");
    info!("  POST   /api/timer/start       - Start the timer");
    info!("  POST   /api/timer/pause       - Pause the timer");
    info!("  POST   /api/timer/reset       - Reset the timer");
    info!("  POST   /api/tasks             - Add a task");
    info!("  DELETE /api/tasks/:id         - Delete a task");
    info!("  POST   /api/tasks/:id/select  - Select a task");
    info!("  GET    /health                - Health check");

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

    info!("Server shutdown complete");
    Ok(())
}
