// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Error types for the chunking module.

/// Chunking error type. `chunk_text` and `chunk_with_hierarchy` themselves
/// never fail — Rust's static typing rules out the "type mismatch at the
/// API boundary" failure mode the reference implementation guarded against
/// dynamically, and degenerate/empty input yields zero chunks rather than
/// an error. This type exists for the one failure mode that can still
/// reach a caller of this crate: malformed JSON when (de)serializing
/// `ChunkOptions` at a wire boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChunkingError {
    /// Serialization error surfaced while (de)serializing chunk options.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for chunking operations.
pub type Result<T> = std::result::Result<T, ChunkingError>;
