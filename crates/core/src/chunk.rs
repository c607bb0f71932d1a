// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Chunk data structures for document segmentation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A chunk of text from a document, with bit-exact provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Zero-based position among all chunks of a document.
    pub index: usize,

    /// The chunk's content, possibly with a leading overlap prefix
    /// borrowed from the preceding segment.
    pub text: String,

    /// Start char offset of the non-overlapped canonical segment, half-open.
    pub start: usize,

    /// End char offset of the non-overlapped canonical segment, half-open.
    pub end: usize,

    /// SHA-256 hex digest of `text` (the overlapped form).
    pub hash: String,

    /// Title of the section this chunk belongs to, set only when chunking
    /// ran under a hierarchy.
    pub section_title: Option<String>,

    /// `"A > B > C"` section path, set only when chunking ran under a hierarchy.
    pub section_path: Option<String>,

    /// `"[A > B > C] "` string suitable for prepending to LLM prompts, set
    /// only when chunking ran under a hierarchy and the path is non-empty.
    pub context_prefix: Option<String>,
}

impl Chunk {
    /// Create a plain chunk (no structural metadata), hashing `text` now.
    pub fn new(index: usize, text: String, start: usize, end: usize) -> Self {
        let hash = hash_text(&text);
        Self {
            index,
            text,
            start,
            end,
            hash,
            section_title: None,
            section_path: None,
            context_prefix: None,
        }
    }

    /// Attach structural metadata produced by hierarchy-aware chunking.
    pub fn with_section(
        mut self,
        title: impl Into<String>,
        path: impl Into<String>,
        context_prefix: Option<String>,
    ) -> Self {
        self.section_title = Some(title.into());
        self.section_path = Some(path.into());
        self.context_prefix = context_prefix;
        self
    }

    /// Char length of the chunk's text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the chunk's text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// SHA-256 hex digest of a string. Used both for chunk identity and for
/// document-level fast-path comparisons in the sync manager.
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Cheap, pure statistics over a document's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Total character count.
    pub total_characters: usize,
    /// Total whitespace-delimited word count.
    pub total_words: usize,
    /// Total paragraph count (blank-line delimited, empties dropped).
    pub total_paragraphs: usize,
}

/// Result of chunking plus analyzing a document, optionally annotated with
/// the hierarchy used to drive hierarchy-aware chunking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Total character count.
    pub total_characters: usize,
    /// Total whitespace-delimited word count.
    pub total_words: usize,
    /// Total paragraph count.
    pub total_paragraphs: usize,
    /// The document's chunks, in order.
    pub chunks: Vec<Chunk>,
    /// The hierarchy used to produce `chunks`, when hierarchy-aware
    /// chunking ran.
    pub hierarchy: Option<crate::hierarchy::HierarchyMap>,
}

/// A chunk as stored in the vector index, carrying its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// The chunk's content (overlapped form).
    pub text: String,
    /// Identity key used for diffing against the sync manager's bookkeeping.
    pub chunk_hash: String,
    /// Zero-based position among all chunks of the document.
    pub chunk_index: usize,
    /// Start char offset of the canonical segment.
    pub start: usize,
    /// End char offset of the canonical segment.
    pub end: usize,
    /// Section title, when produced under a hierarchy.
    pub section_title: Option<String>,
    /// Section path, when produced under a hierarchy.
    pub section_path: Option<String>,
    /// Context prefix, when produced under a hierarchy.
    pub context_prefix: Option<String>,
    /// The embedding vector.
    pub vector: Vec<f32>,
}

impl ChunkRecord {
    /// Build a record from a chunk and its embedding.
    pub fn from_chunk(chunk: &Chunk, vector: Vec<f32>) -> Self {
        Self {
            text: chunk.text.clone(),
            chunk_hash: chunk.hash.clone(),
            chunk_index: chunk.index,
            start: chunk.start,
            end: chunk.end,
            section_title: chunk.section_title.clone(),
            section_path: chunk.section_path.clone(),
            context_prefix: chunk.context_prefix.clone(),
            vector,
        }
    }
}

/// A `ChunkRecord` returned from a vector search, with its distance to the
/// query vector (ascending order; lower is more similar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The matched record.
    pub record: ChunkRecord,
    /// Distance to the query vector (implementation-defined metric; lower
    /// is more similar). Serialized as `_distance` to match the vector
    /// store's own result-row convention.
    #[serde(rename = "_distance")]
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_hash_matches_text() {
        let chunk = Chunk::new(0, "hello world".to_string(), 0, 11);
        assert_eq!(chunk.hash, hash_text("hello world"));
    }

    #[test]
    fn test_chunk_len() {
        let chunk = Chunk::new(0, "hello".to_string(), 0, 5);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_hash_text_deterministic() {
        assert_eq!(hash_text("abc"), hash_text("abc"));
        assert_ne!(hash_text("abc"), hash_text("abd"));
    }

    #[test]
    fn test_with_section() {
        let chunk = Chunk::new(0, "body".to_string(), 0, 4).with_section(
            "Intro",
            "Intro",
            Some("[Intro] ".to_string()),
        );
        assert_eq!(chunk.section_title.as_deref(), Some("Intro"));
        assert_eq!(chunk.context_prefix.as_deref(), Some("[Intro] "));
    }
}
