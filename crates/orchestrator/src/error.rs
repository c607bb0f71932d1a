// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Error types for the sliding-window and map-reduce orchestrators.

/// Orchestrator error type. Per-chunk generation and parse failures are
/// recovered from internally (logged and skipped) everywhere except
/// `summarize`, where an unrecoverable map-reduce failure surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// A single `Agent::generate` call failed. Recovered from (logged,
    /// chunk skipped) in `criticize`/`suggest`; only surfaced directly when
    /// `summarize`'s REDUCE call fails.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The agent's response was not valid JSON after fence-stripping.
    /// Recovered from (logged, chunk skipped) in `criticize`/`suggest`.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Every MAP call failed, or the REDUCE call failed, leaving
    /// `summarize` with nothing to return.
    #[error("summarization failed: {0}")]
    Summarization(String),
}

/// Result type alias for orchestrator operations.
pub type Result<T> = std::result::Result<T, OrchestratorError>;
