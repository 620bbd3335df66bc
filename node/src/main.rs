// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crystal_node::config::NodeConfig;
use crystal_node::server::{build_router, AppState};
use crystal_node::telemetry::init_telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_telemetry();

    let cfg = NodeConfig::from_env()?;
    tracing::info!("Initializing Crystal node with config: {:?}", cfg);

    let state = Arc::new(AppState::from_config(&cfg)?);
    tracing::info!("Upstream ledger: {}", state.engine.ledger().endpoint());

    let app = build_router(state);

    tracing::info!("Crystal API server listening on {}", cfg.bind_addr);
    tracing::info!("Visit http://localhost:{}/health to check status", cfg.bind_addr.port());
    let listener = TcpListener::bind(cfg.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
