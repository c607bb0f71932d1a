// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Cheap pure statistics over raw document text, and the top-level
//! `analyze_document` composition.

use doc_analysis_core::{hash_text, AnalysisResult, ChunkOptions, HierarchyMap, TextStats};

use crate::hierarchy_chunk::chunk_with_hierarchy;
use crate::segment::chunk_text;

/// Character, word, and paragraph counts over raw text. Pure and cheap;
/// callers may run it on every keystroke.
pub fn analyze_text(text: &str) -> TextStats {
    let total_characters = text.chars().count();
    let total_words = text.split_whitespace().count();
    let total_paragraphs = text
        .split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .count();

    TextStats {
        total_characters,
        total_words,
        total_paragraphs,
    }
}

/// Chunk `text` (using `hierarchy` when present) and combine the result
/// with its statistics.
pub fn analyze_document(text: &str, opts: &ChunkOptions, hierarchy: Option<&HierarchyMap>) -> AnalysisResult {
    let stats = analyze_text(text);
    let chunks = match hierarchy {
        Some(h) => chunk_with_hierarchy(text, h, opts),
        None => chunk_text(text, opts),
    };

    AnalysisResult {
        total_characters: stats.total_characters,
        total_words: stats.total_words,
        total_paragraphs: stats.total_paragraphs,
        chunks,
        hierarchy: hierarchy.cloned(),
    }
}

/// SHA-256 hex digest of a whole document, used by `DocSyncManager`'s
/// document-level fast path.
pub fn hash_document(text: &str) -> String {
    hash_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text_empty() {
        let stats = analyze_text("");
        assert_eq!(stats.total_characters, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.total_paragraphs, 0);
    }

    #[test]
    fn test_analyze_text_counts() {
        let stats = analyze_text("Hello world.\n\nSecond paragraph here.");
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.total_paragraphs, 2);
    }

    #[test]
    fn test_analyze_text_is_pure() {
        let text = "Repeat this analysis.";
        let first = analyze_text(text);
        for _ in 0..5 {
            assert_eq!(analyze_text(text), first);
        }
    }

    #[test]
    fn test_hash_document_deterministic_on_equality() {
        assert_eq!(hash_document("same"), hash_document("same"));
        assert_ne!(hash_document("same"), hash_document("different"));
    }

    #[test]
    fn test_analyze_document_without_hierarchy() {
        let opts = ChunkOptions::default();
        let result = analyze_document("Some text.\n\nMore text.", &opts, None);
        assert!(result.hierarchy.is_none());
        assert!(!result.chunks.is_empty());
    }
}
