// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Doc Analysis API Server Binary
//!
//! Wires the reference in-memory capability implementations into a
//! `DocSyncManager`, builds the REST router, and serves it.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

use doc_analysis_api::{run_server, AppState, DocAnalysisConfig};
use doc_analysis_capabilities::{EchoAgent, HashEmbedder, MemoryVectorStore};
use doc_analysis_core::{Agent, Embedder};
use doc_analysis_sync::DocSyncManager;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DocAnalysisConfig::from_env();

    let embedder: Arc<dyn Embedder> = Arc::new(HashEmbedder::default());
    let agent: Arc<dyn Agent> = Arc::new(EchoAgent::default());
    let vector_store = Arc::new(MemoryVectorStore::new());
    let sync_manager = Arc::new(DocSyncManager::new(embedder.clone(), vector_store));

    info!(model = %config.model, "doc-analysis-api starting");

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(embedder, agent, sync_manager, config);
    run_server(&bind_addr, state).await
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("doc_analysis_api=debug,tower_http=debug,axum=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}
