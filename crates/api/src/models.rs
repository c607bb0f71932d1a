// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Request/response DTOs for the `/analyze/*` and `/health` routes.

use doc_analysis_core::{AnalysisResult, ChunkOptions, HierarchyMap, HierarchyOptions, ScoredRecord};
use doc_analysis_orchestrator::{Criticism, Suggestion};
use serde::{Deserialize, Serialize};

/// Combined chunk/hierarchy options accepted on request bodies that accept
/// `options`. Both are optional and fall back to their own defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Chunking options, defaulted when omitted.
    pub chunk: ChunkOptions,
    /// Hierarchy extraction options, defaulted when omitted.
    pub hierarchy: HierarchyOptions,
}

/// `POST /analyze/chunk` request body.
#[derive(Debug, Deserialize)]
pub struct ChunkRequest {
    /// The document text to analyze.
    pub text: String,
    /// Chunk/hierarchy options; defaulted when omitted.
    #[serde(default)]
    pub options: Option<AnalysisOptions>,
    /// Whether to extract a hierarchy first and chunk along its leaves.
    #[serde(default)]
    pub use_hierarchy: bool,
}

/// `POST /analyze/stats` request body.
#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    /// The document text to measure.
    pub text: String,
}

/// `POST /analyze/query` request body.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The document text to sync before querying.
    pub text: String,
    /// The natural-language question to search for.
    pub question: String,
    /// Sync/query options; defaulted when omitted.
    #[serde(default)]
    pub options: Option<AnalysisOptions>,
}

/// `POST /analyze/query` response body.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Nearest-neighbor matches, ascending by distance.
    pub results: Vec<ScoredRecord>,
    /// The hierarchy cached by the sync that preceded the search.
    pub hierarchy: HierarchyMap,
}

/// `POST /analyze/hierarchy` request body.
#[derive(Debug, Deserialize)]
pub struct HierarchyRequest {
    /// The document text to extract structure from.
    pub text: String,
    /// Hierarchy options; defaulted when omitted.
    #[serde(default)]
    pub options: Option<HierarchyOptions>,
}

/// `POST /analyze/criticize` and `/analyze/suggest` request body.
#[derive(Debug, Deserialize)]
pub struct TextOnlyRequest {
    /// The document text to review.
    pub text: String,
}

/// `POST /analyze/summarize` response body.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// The synthesized document summary.
    pub summary: String,
}

/// `GET /health` response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the handler runs at all.
    pub status: &'static str,
    /// The crate's `CARGO_PKG_VERSION`.
    pub version: &'static str,
}

/// Chunk/analysis result alias, re-exported for handler signatures.
pub type ChunkResponse = AnalysisResult;
/// Criticism list alias, re-exported for handler signatures.
pub type CriticizeResponse = Vec<Criticism>;
/// Suggestion list alias, re-exported for handler signatures.
pub type SuggestResponse = Vec<Suggestion>;
