// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Sliding-window criticism and suggestion orchestrators: chunk the
//! document, ask the agent to review each chunk in isolation, and
//! aggregate the quote-anchored results in chunk order.

use doc_analysis_chunking::chunk_text;
use doc_analysis_core::{Agent, ChunkOptions, GenerateOptions, Message};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fence::strip_json_fence;
use crate::Result;

const CRITICIZE_SYSTEM_PROMPT: &str = "You are an exacting editor. Read the passage and identify concrete \
problems: unclear phrasing, factual inconsistency, weak argumentation, tone mismatches. Respond with a JSON \
array of objects, each `{\"quote\": \"...\", \"criticism\": \"...\"}`, where `quote` is copied verbatim from \
the passage. Respond with nothing but the JSON array.";

const SUGGEST_SYSTEM_PROMPT: &str = "You are a collaborative editor. Read the passage and propose concrete \
replacement text for passages that could be improved. Respond with a JSON array of objects, each \
`{\"quote\": \"...\", \"suggestion\": \"...\", \"reason\": \"...\"}`, where `quote` is copied verbatim from \
the passage. Respond with nothing but the JSON array.";

/// A single criticism, anchored to an exact quote from its source chunk.
/// The core performs no substring validation; the editor front-end is
/// responsible for exact-match attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criticism {
    /// Verbatim substring of the reviewed chunk the criticism refers to.
    pub quote: String,
    /// The criticism itself.
    pub criticism: String,
}

/// A single replacement suggestion, anchored to an exact quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Verbatim substring of the reviewed chunk the suggestion replaces.
    pub quote: String,
    /// The proposed replacement text.
    pub suggestion: String,
    /// Why the replacement is being proposed.
    pub reason: String,
}

async fn generate_per_chunk<T: for<'de> Deserialize<'de>>(
    agent: &dyn Agent,
    text: &str,
    system_prompt: &str,
    model: &str,
) -> Vec<T> {
    let opts = ChunkOptions::review_window();
    let chunks = chunk_text(text, &opts);
    let mut results = Vec::new();

    for chunk in chunks {
        let response = match agent
            .generate(system_prompt, &[Message::user(chunk.text.clone())], &GenerateOptions::new(model))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(chunk = chunk.index, error = %e, "agent generation failed; skipping chunk");
                continue;
            }
        };

        let cleaned = strip_json_fence(&response);
        match serde_json::from_str::<Vec<T>>(&cleaned) {
            Ok(mut items) => results.append(&mut items),
            Err(e) => {
                warn!(chunk = chunk.index, error = %e, "failed to parse agent response; skipping chunk");
            }
        }
    }

    results
}

/// Slide a 1500/200 review window over `text`, asking `agent` to critique
/// each chunk independently. Per-chunk generation or parse failures are
/// logged and skipped; the call never aborts for a partial failure.
pub async fn criticize(agent: &dyn Agent, text: &str, model: &str) -> Result<Vec<Criticism>> {
    Ok(generate_per_chunk(agent, text, CRITICIZE_SYSTEM_PROMPT, model).await)
}

/// Slide a 1500/200 review window over `text`, asking `agent` for
/// replacement suggestions for each chunk independently.
pub async fn suggest_changes(agent: &dyn Agent, text: &str, model: &str) -> Result<Vec<Suggestion>> {
    Ok(generate_per_chunk(agent, text, SUGGEST_SYSTEM_PROMPT, model).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use doc_analysis_core::CoreResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedAgent {
        responses: Vec<String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Agent for ScriptedAgent {
        async fn generate(&self, _system: &str, _messages: &[Message], _opts: &GenerateOptions) -> CoreResult<String> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.responses.get(i).cloned().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_criticize_parses_fenced_json() {
        let agent = ScriptedAgent {
            responses: vec!["```json\n[{\"quote\": \"bad phrase\", \"criticism\": \"too vague\"}]\n```".to_string()],
            calls: AtomicUsize::new(0),
        };
        let result = criticize(&agent, "A short document with a bad phrase in it.", "test-model")
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].quote, "bad phrase");
    }

    #[tokio::test]
    async fn test_criticize_skips_unparseable_chunk() {
        let agent = ScriptedAgent {
            responses: vec!["not json at all".to_string()],
            calls: AtomicUsize::new(0),
        };
        let result = criticize(&agent, "Some document text here.", "test-model").await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_changes_parses_fenced_json() {
        let agent = ScriptedAgent {
            responses: vec![
                "```json\n[{\"quote\": \"x\", \"suggestion\": \"y\", \"reason\": \"clarity\"}]\n```".to_string(),
            ],
            calls: AtomicUsize::new(0),
        };
        let result = suggest_changes(&agent, "Document containing x somewhere.", "test-model")
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].reason, "clarity");
    }

    #[tokio::test]
    async fn test_empty_document_yields_no_calls_and_no_results() {
        let agent = ScriptedAgent {
            responses: vec![],
            calls: AtomicUsize::new(0),
        };
        let result = criticize(&agent, "", "test-model").await.unwrap();
        assert!(result.is_empty());
        assert_eq!(agent.calls.load(Ordering::SeqCst), 0);
    }
}
