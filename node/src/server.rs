// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{HealthResponse, QueryRequest, ServiceInfoResponse};
use crate::config::NodeConfig;
use crate::engine::Engine;
use crate::errors::NodeError;
use crate::network::LedgerClient;
use crystal_kernel::types::id::AccountId;

pub struct AppState {
    pub engine: Engine,
    pub service_name: String,
    pub service_version: String,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn from_config(cfg: &NodeConfig) -> Result<Self, NodeError> {
        let ledger = LedgerClient::new(cfg.ledger_url.clone(), cfg.ledger_timeout)?;
        Ok(Self {
            engine: Engine::new(ledger),
            service_name: cfg.service_name.clone(),
            service_version: cfg.service_version.clone(),
        })
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Builds the full route table. The returned router is not modified after
/// it is handed to `axum::serve`.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/query", post(query_account).options(preflight))
        .route("/health", get(health))
        .route("/", get(service_info))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

async fn query_account(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, NodeError> {
    let req = QueryRequest::from_body(&body)
        .ok_or_else(|| NodeError::InvalidInput("Invalid request body".to_string()))?;
    let account = AccountId::new(req.into_account())?;

    tracing::info!("Querying account: {}", account);
    metrics::increment_counter!("crystal_queries_total");

    let response = state.engine.query(account).await;
    let body = serde_json::to_vec(&response)?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.clone(),
        version: state.service_version.clone(),
    })
}

async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Crystal Lite Client API".to_string(),
        endpoints: "/api/query, /health".to_string(),
    })
}

async fn metrics_handler() -> String {
    crate::telemetry::render_metrics()
}
