// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! HTTP-surface error type, mapping every component crate's error into a
//! status code and a `{"error": string}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The HTTP-surface error type. Every component error is folded into a
/// single variant and rendered as `500`; only malformed request bodies are
/// the caller's fault and render as `400`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed validation (missing/empty `text` or
    /// `question`, wrong type).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A chunking operation failed.
    #[error("chunking error: {0}")]
    Chunking(#[from] doc_analysis_chunking::ChunkingError),

    /// A hierarchy-extraction operation failed.
    #[error("hierarchy error: {0}")]
    Hierarchy(#[from] doc_analysis_hierarchy::HierarchyError),

    /// A sync/query operation failed.
    #[error("sync error: {0}")]
    Sync(#[from] doc_analysis_sync::SyncError),

    /// An LLM orchestration operation failed.
    #[error("orchestrator error: {0}")]
    Orchestrator(#[from] doc_analysis_orchestrator::OrchestratorError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Chunking(_) | Self::Hierarchy(_) | Self::Sync(_) | Self::Orchestrator(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
