// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Error types for hierarchy extraction.

/// Hierarchy extraction error type. `extract_hierarchy` only ever fails
/// because the embedder it was given failed; `HierarchyOptions` has no
/// field whose value can be invalid at the type level, so there is no
/// option-validation failure mode to report.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    /// The embedder failed during embedding-similarity segmentation.
    #[error("embedder error: {0}")]
    Embedder(String),
}

impl From<doc_analysis_core::CoreError> for HierarchyError {
    fn from(e: doc_analysis_core::CoreError) -> Self {
        Self::Embedder(e.to_string())
    }
}

/// Result type alias for hierarchy operations.
pub type Result<T> = std::result::Result<T, HierarchyError>;
