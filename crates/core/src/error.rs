// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

use std::fmt;

/// Core error type for the capability traits (`Embedder`, `VectorStore`, `Agent`).
///
/// The component crates (`doc-analysis-chunking`, `-hierarchy`, `-sync`,
/// `-llm`) define their own `thiserror`-derived enums and wrap a `CoreError`
/// when a capability call fails underneath them.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The embedder rejected the request or failed internally.
    Embedder(String),

    /// The vector store rejected the request or failed internally.
    VectorStore(String),

    /// A vector's dimensionality did not match what the store expects.
    DimensionMismatch {
        /// The dimensionality the store was configured for.
        expected: usize,
        /// The dimensionality actually supplied.
        found: usize,
    },

    /// The agent rejected the request or failed internally.
    Agent(String),

    /// Custom error with message.
    Custom(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedder(e) => write!(f, "embedder error: {}", e),
            Self::VectorStore(e) => write!(f, "vector store error: {}", e),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "vector dimension mismatch: expected {}, found {}", expected, found)
            }
            Self::Agent(e) => write!(f, "agent error: {}", e),
            Self::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core capability operations.
pub type CoreResult<T> = Result<T, CoreError>;
