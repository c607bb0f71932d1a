// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Map-reduce summarization, with a single-chunk fast path that skips the
//! MAP phase entirely.

use doc_analysis_chunking::chunk_text;
use doc_analysis_core::{Agent, ChunkOptions, GenerateOptions, Message};
use tracing::warn;

use crate::error::OrchestratorError;
use crate::fence::strip_json_fence;
use crate::Result;

const MAP_SYSTEM_PROMPT: &str =
    "Summarize the following passage in two or three sentences, preserving its key facts and claims. \
Respond with plain text only.";

const REDUCE_SYSTEM_PROMPT: &str =
    "You are given either a single passage or a set of per-section summaries, each preceded by a \
\"--- Chunk N Summary ---\" header. Write one coherent document summary that synthesizes them. \
Respond with plain text only.";

async fn generate(agent: &dyn Agent, system_prompt: &str, content: String, model: &str) -> Result<String> {
    let raw = agent
        .generate(system_prompt, &[Message::user(content)], &GenerateOptions::new(model))
        .await
        .map_err(|e| OrchestratorError::Generation(e.to_string()))?;
    Ok(strip_json_fence(&raw))
}

/// Summarize `text` via a single REDUCE call when it fits in one 10000/400
/// chunk, or via MAP (per-chunk short summaries) then REDUCE (a synthesis
/// over the concatenated MAP output) when it spans multiple chunks.
/// Returns an empty string for empty input, without calling the agent.
pub async fn summarize(agent: &dyn Agent, text: &str, model: &str) -> Result<String> {
    let opts = ChunkOptions::summarize_window();
    let chunks = chunk_text(text, &opts);

    if chunks.is_empty() {
        return Ok(String::new());
    }

    if chunks.len() == 1 {
        return generate(agent, REDUCE_SYSTEM_PROMPT, chunks[0].text.clone(), model).await;
    }

    let mut map_summaries = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        match generate(agent, MAP_SYSTEM_PROMPT, chunk.text.clone(), model).await {
            Ok(summary) => map_summaries.push((chunk.index + 1, summary)),
            Err(e) => warn!(chunk = chunk.index, error = %e, "MAP summary failed; skipping chunk"),
        }
    }

    if map_summaries.is_empty() {
        return Err(OrchestratorError::Summarization("every MAP call failed".to_string()));
    }

    let combined = map_summaries
        .iter()
        .map(|(k, summary)| format!("--- Chunk {} Summary ---\n{}\n\n", k, summary))
        .collect::<String>();

    generate(agent, REDUCE_SYSTEM_PROMPT, combined, model)
        .await
        .map_err(|e| OrchestratorError::Summarization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use doc_analysis_core::CoreResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedAgent {
        responses: Mutex<Vec<Result<String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedAgent {
        fn ok(responses: Vec<&str>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().map(|r| Ok(r.to_string())).rev().collect()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Agent for ScriptedAgent {
        async fn generate(&self, _system: &str, _messages: &[Message], _opts: &GenerateOptions) -> CoreResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            match responses.pop() {
                Some(Ok(text)) => Ok(text),
                Some(Err(_)) | None => Err(doc_analysis_core::CoreError::Agent("exhausted".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_text_returns_empty_without_calling_agent() {
        let agent = ScriptedAgent::ok(vec![]);
        let summary = summarize(&agent, "", "test-model").await.unwrap();
        assert_eq!(summary, "");
        assert_eq!(agent.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_s7_single_chunk_skips_map_phase() {
        let agent = ScriptedAgent::ok(vec!["a tidy summary"]);
        let summary = summarize(&agent, "Short document, one chunk only.", "test-model")
            .await
            .unwrap();
        assert_eq!(summary, "a tidy summary");
        assert_eq!(agent.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_multi_chunk_runs_map_then_reduce() {
        let big = format!("{}\n\n{}\n\n{}", "a".repeat(11_000), "b".repeat(11_000), "c".repeat(11_000));
        let agent = ScriptedAgent::ok(vec!["map one", "map two", "map three", "final summary"]);
        let summary = summarize(&agent, &big, "test-model").await.unwrap();
        assert_eq!(summary, "final summary");
        assert_eq!(agent.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_all_map_calls_failing_is_summarization_error() {
        let big = format!("{}\n\n{}", "a".repeat(11_000), "b".repeat(11_000));
        let agent = ScriptedAgent {
            responses: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        };
        let err = summarize(&agent, &big, "test-model").await.unwrap_err();
        assert!(matches!(err, OrchestratorError::Summarization(_)));
    }
}
