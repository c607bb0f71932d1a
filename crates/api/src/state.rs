// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Shared application state injected into every handler.

use std::sync::Arc;

use doc_analysis_core::{Agent, Embedder};
use doc_analysis_sync::DocSyncManager;

use crate::config::DocAnalysisConfig;

/// State shared across every handler, cloned cheaply (every field is an
/// `Arc`-backed handle) per the teacher's `AppState` convention.
#[derive(Clone)]
pub struct AppState {
    /// The embedding capability, used directly by `/analyze/query`.
    pub embedder: Arc<dyn Embedder>,
    /// The LLM capability, used by the criticize/suggest/summarize routes.
    pub agent: Arc<dyn Agent>,
    /// The document/vector-index synchronizer backing `/analyze/query`.
    pub sync_manager: Arc<DocSyncManager>,
    /// Server-wide configuration and option defaults.
    pub config: Arc<DocAnalysisConfig>,
}

impl AppState {
    /// Construct state from its collaborators.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        agent: Arc<dyn Agent>,
        sync_manager: Arc<DocSyncManager>,
        config: DocAnalysisConfig,
    ) -> Self {
        Self {
            embedder,
            agent,
            sync_manager,
            config: Arc::new(config),
        }
    }
}
