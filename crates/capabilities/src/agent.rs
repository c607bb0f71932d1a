// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! A canned-response `Agent` reference implementation for tests and local
//! runs where no LLM backend is configured.

use async_trait::async_trait;
use doc_analysis_core::{Agent, CoreResult, GenerateOptions, Message};

/// An `Agent` that echoes a fixed response regardless of input, optionally
/// parameterized per call site via `EchoAgent::with_response`.
///
/// Production deployments inject an `Agent` backed by a real LLM API behind
/// this same trait; nothing downstream (the orchestrators) needs to know
/// the difference.
#[derive(Debug, Clone)]
pub struct EchoAgent {
    response: String,
}

impl EchoAgent {
    /// An agent that always returns `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for EchoAgent {
    fn default() -> Self {
        Self::with_response("{}")
    }
}

#[async_trait]
impl Agent for EchoAgent {
    async fn generate(
        &self,
        _system_prompt: &str,
        _messages: &[Message],
        _opts: &GenerateOptions,
    ) -> CoreResult<String> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_agent_returns_configured_response() {
        let agent = EchoAgent::with_response("hello");
        let out = agent
            .generate("system", &[Message::user("hi")], &GenerateOptions::new("test-model"))
            .await
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_echo_agent_default_is_empty_json() {
        let agent = EchoAgent::default();
        let out = agent
            .generate("system", &[], &GenerateOptions::new("test-model"))
            .await
            .unwrap();
        assert_eq!(out, "{}");
    }
}
