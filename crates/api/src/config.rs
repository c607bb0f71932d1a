// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Server configuration, loaded from environment variables with hardcoded
//! defaults. No external config-file crate is pulled in, matching the
//! teacher, which also reads its bind address as a literal in `main`.

use doc_analysis_core::{ChunkOptions, HierarchyOptions};

/// The model identifier handed to every `Agent::generate` call made by the
/// reference server. Meaningless for the bundled `EchoAgent`, but a real
/// `Agent` implementation would route on it.
const DEFAULT_MODEL: &str = "doc-analysis-default";

/// Aggregated server configuration.
#[derive(Debug, Clone)]
pub struct DocAnalysisConfig {
    /// Address the REST server binds to, e.g. `"0.0.0.0:3000"`.
    pub bind_addr: String,
    /// Default chunking options applied when a request omits `options`.
    pub chunk: ChunkOptions,
    /// Default hierarchy options applied when a request omits `options`.
    pub hierarchy: HierarchyOptions,
    /// Model identifier passed to the `Agent` on every orchestrator call.
    pub model: String,
}

impl Default for DocAnalysisConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            chunk: ChunkOptions::default(),
            hierarchy: HierarchyOptions::default(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl DocAnalysisConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults. Only `PORT` (overriding the bind port) and `DOC_ANALYSIS_MODEL`
    /// are recognized; everything else uses its hardcoded default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            config.bind_addr = format!("0.0.0.0:{}", port);
        }

        if let Ok(model) = std::env::var("DOC_ANALYSIS_MODEL") {
            config.model = model;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        let config = DocAnalysisConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }
}
