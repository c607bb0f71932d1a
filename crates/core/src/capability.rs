// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Capability traits for the external collaborators the core depends on:
//! an embedding model, a vector store, and an LLM agent. Each is opaque to
//! the core; production callers inject real implementations, tests and
//! local runs use the in-memory reference implementations shipped in
//! `doc-analysis-capabilities`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ChunkRecord, CoreResult, ScoredRecord};

/// Embeds text into fixed-dimension vectors.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> CoreResult<Vec<f32>>;

    /// Embed a batch of texts. Implementations must preserve index-to-vector
    /// alignment: `result[i]` corresponds to `texts[i]`.
    async fn embed_batch(&self, texts: &[String]) -> CoreResult<Vec<Vec<f32>>>;

    /// The dimensionality of vectors this embedder produces.
    fn dimensions(&self) -> usize;
}

/// A content-addressed index of embedded chunks.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert records, establishing schema on first use.
    async fn insert(&self, records: Vec<ChunkRecord>) -> CoreResult<()>;

    /// Nearest-neighbor search, ascending by distance (lower is closer).
    async fn search(&self, vector: &[f32], k: usize) -> CoreResult<Vec<ScoredRecord>>;

    /// Drop the table, discarding every record.
    async fn reset(&self) -> CoreResult<()>;

    /// Number of records currently stored.
    async fn count(&self) -> CoreResult<usize>;
}

/// A single turn in a conversation sent to an `Agent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The speaker role, e.g. `"user"`.
    pub role: String,
    /// The turn's content.
    pub content: String,
}

impl Message {
    /// Construct a `user`-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Options accompanying an `Agent::generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// The model identifier to route the request to.
    pub model: String,
}

impl GenerateOptions {
    /// Construct options selecting `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

/// An opaque LLM capability.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Generate a completion given a system prompt and conversation turns.
    /// The returned content may be wrapped in a ` ```json ` fence; callers
    /// are responsible for stripping it before parsing.
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[Message],
        opts: &GenerateOptions,
    ) -> CoreResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user() {
        let m = Message::user("hello");
        assert_eq!(m.role, "user");
        assert_eq!(m.content, "hello");
    }

    #[test]
    fn test_generate_options() {
        let opts = GenerateOptions::new("gpt-test");
        assert_eq!(opts.model, "gpt-test");
    }
}
