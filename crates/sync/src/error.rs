// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Error types for document/vector-index synchronization.

/// Sync error type, wrapping whichever external capability failed during
/// `sync_if_needed` or `query_with_sync`.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The hierarchy extractor's embedder failed.
    #[error("hierarchy error: {0}")]
    Hierarchy(#[from] doc_analysis_hierarchy::HierarchyError),

    /// The embedder failed.
    #[error("embedder error: {0}")]
    Embedder(String),

    /// The vector store failed.
    #[error("vector store error: {0}")]
    VectorStore(String),

    /// `query_with_sync` found no cached hierarchy after its own sync pass,
    /// because a concurrent `reset()` cleared it in the window between that
    /// sync releasing the state lock and this call re-acquiring it.
    #[error("no hierarchy available for query; a concurrent reset raced this call")]
    MissingHierarchy,
}

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
