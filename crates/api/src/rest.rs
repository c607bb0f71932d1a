// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! The REST surface: one route per core operation, thin request validation,
//! and JSON in/out. CORS is permissive; `TraceLayer` logs every request.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use doc_analysis_chunking::analyze_document;
use doc_analysis_hierarchy::extract_hierarchy;
use doc_analysis_orchestrator::{criticize, suggest_changes, summarize};
use doc_analysis_sync::{QueryOptions, SyncOptions};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ChunkRequest, ChunkResponse, CriticizeResponse, HealthResponse, HierarchyRequest, QueryRequest,
    QueryResponse, StatsRequest, SuggestResponse, SummarizeResponse, TextOnlyRequest,
};
use crate::state::AppState;

fn require_non_empty(field: &str, value: &str) -> ApiResult<()> {
    if value.is_empty() {
        return Err(ApiError::InvalidRequest(format!("`{}` must not be empty", field)));
    }
    Ok(())
}

async fn chunk(State(state): State<AppState>, Json(req): Json<ChunkRequest>) -> ApiResult<Json<ChunkResponse>> {
    require_non_empty("text", &req.text)?;
    let opts = req.options.unwrap_or_default();

    let hierarchy = if req.use_hierarchy {
        Some(extract_hierarchy(&req.text, Some(state.embedder.as_ref()), &opts.hierarchy).await?)
    } else {
        None
    };

    Ok(Json(analyze_document(&req.text, &opts.chunk, hierarchy.as_ref())))
}

async fn stats(Json(req): Json<StatsRequest>) -> ApiResult<Json<doc_analysis_core::TextStats>> {
    require_non_empty("text", &req.text)?;
    Ok(Json(doc_analysis_chunking::analyze_text(&req.text)))
}

async fn query(State(state): State<AppState>, Json(req): Json<QueryRequest>) -> ApiResult<Json<QueryResponse>> {
    require_non_empty("text", &req.text)?;
    require_non_empty("question", &req.question)?;
    let opts = req.options.unwrap_or_default();

    let sync_opts = SyncOptions {
        chunk: opts.chunk,
        hierarchy: opts.hierarchy,
    };
    let query_opts = QueryOptions {
        sync: sync_opts,
        ..QueryOptions::default()
    };
    let result = state.sync_manager.query_with_sync(&req.text, &req.question, &query_opts).await?;

    Ok(Json(QueryResponse {
        results: result.results,
        hierarchy: result.hierarchy,
    }))
}

async fn hierarchy(
    State(state): State<AppState>,
    Json(req): Json<HierarchyRequest>,
) -> ApiResult<Json<doc_analysis_core::HierarchyMap>> {
    require_non_empty("text", &req.text)?;
    let opts = req.options.unwrap_or_default();
    let map = extract_hierarchy(&req.text, Some(state.embedder.as_ref()), &opts).await?;
    Ok(Json(map))
}

async fn analyze_criticize(
    State(state): State<AppState>,
    Json(req): Json<TextOnlyRequest>,
) -> ApiResult<Json<CriticizeResponse>> {
    require_non_empty("text", &req.text)?;
    let result = criticize(state.agent.as_ref(), &req.text, &state.config.model).await?;
    Ok(Json(result))
}

async fn analyze_suggest(
    State(state): State<AppState>,
    Json(req): Json<TextOnlyRequest>,
) -> ApiResult<Json<SuggestResponse>> {
    require_non_empty("text", &req.text)?;
    let result = suggest_changes(state.agent.as_ref(), &req.text, &state.config.model).await?;
    Ok(Json(result))
}

async fn analyze_summarize(
    State(state): State<AppState>,
    Json(req): Json<TextOnlyRequest>,
) -> ApiResult<Json<SummarizeResponse>> {
    require_non_empty("text", &req.text)?;
    let summary = summarize(state.agent.as_ref(), &req.text, &state.config.model).await?;
    Ok(Json(SummarizeResponse { summary }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router, wiring every `/analyze/*` route plus `/health` against
/// `state`, with a permissive CORS layer and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze/chunk", post(chunk))
        .route("/analyze/stats", post(stats))
        .route("/analyze/query", post(query))
        .route("/analyze/hierarchy", post(hierarchy))
        .route("/analyze/criticize", post(analyze_criticize))
        .route("/analyze/suggest", post(analyze_suggest))
        .route("/analyze/summarize", post(analyze_summarize))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve the router forever (until the process is signaled).
pub async fn run_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "doc-analysis-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use doc_analysis_capabilities::{EchoAgent, HashEmbedder, MemoryVectorStore};
    use doc_analysis_sync::DocSyncManager;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::DocAnalysisConfig;

    fn test_state() -> AppState {
        let embedder: Arc<dyn doc_analysis_core::Embedder> = Arc::new(HashEmbedder::default());
        let agent: Arc<dyn doc_analysis_core::Agent> = Arc::new(EchoAgent::with_response("[]"));
        let sync_manager = Arc::new(DocSyncManager::new(embedder.clone(), Arc::new(MemoryVectorStore::new())));
        AppState::new(embedder, agent, sync_manager, DocAnalysisConfig::default())
    }

    async fn post_json(app: Router, path: &str, body: serde_json::Value) -> axum::http::Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chunk_empty_text_is_400() {
        let app = create_router(test_state());
        let response = post_json(app, "/analyze/chunk", serde_json::json!({"text": ""})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chunk_returns_analysis_result() {
        let app = create_router(test_state());
        let response = post_json(
            app,
            "/analyze/chunk",
            serde_json::json!({"text": "Hello world.\n\nSecond paragraph."}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed["chunks"].as_array().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_stats_counts_words() {
        let app = create_router(test_state());
        let response = post_json(app, "/analyze/stats", serde_json::json!({"text": "one two three"})).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["total_words"], 3);
    }

    #[tokio::test]
    async fn test_query_missing_question_is_400() {
        let app = create_router(test_state());
        let response = post_json(app, "/analyze/query", serde_json::json!({"text": "hello", "question": ""})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summarize_short_document_returns_200() {
        let app = create_router(test_state());
        let response = post_json(app, "/analyze/summarize", serde_json::json!({"text": "word"})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
