// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crystal_kernel::error::KernelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("{0}")]
    Kernel(KernelError),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Upstream ledger error: {0}")]
    Upstream(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Startup error: {0}")]
    Init(String),
}

impl IntoResponse for NodeError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            NodeError::Kernel(k_err) => (StatusCode::BAD_REQUEST, k_err.to_string()),
            NodeError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            NodeError::Upstream(detail) => {
                tracing::error!("Upstream error reached the response path: {}", detail);
                (StatusCode::BAD_GATEWAY, "Upstream ledger unavailable".to_string())
            }
            NodeError::Serialization(e) => {
                tracing::error!("Error encoding response: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            NodeError::Init(detail) => {
                tracing::error!("Startup error reached the response path: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<KernelError> for NodeError {
    fn from(e: KernelError) -> Self {
        NodeError::Kernel(e)
    }
}
