// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Shared option types for chunking and hierarchy extraction.

use serde::{Deserialize, Serialize};

/// Options controlling the chunker's segmentation, merge, and overlap steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkOptions {
    /// Upper bound, in chars, per chunk after merging. The overlap prefix
    /// may push a chunk's final length above this.
    pub max_chunk_size: usize,
    /// Char count borrowed from the previous canonical segment's tail.
    pub overlap: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: 1000,
            overlap: 200,
        }
    }
}

impl ChunkOptions {
    /// Options tuned for the criticism/suggestion sliding window.
    pub fn review_window() -> Self {
        Self {
            max_chunk_size: 1500,
            overlap: 200,
        }
    }

    /// Options tuned for the summarize map-reduce window.
    pub fn summarize_window() -> Self {
        Self {
            max_chunk_size: 10000,
            overlap: 400,
        }
    }
}

/// Options controlling hierarchy extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyOptions {
    /// Z-score multiplier applied to the population stdev of adjacent-paragraph
    /// similarities, used to derive the embedding-similarity segmentation
    /// threshold. Despite its name, not an absolute cosine bound.
    pub similarity_threshold: f32,
    /// Smallest permissible embedding-derived section, in chars.
    pub min_section_size: usize,
    /// Max sentences in the whole-document extractive summary.
    pub doc_summary_max_sentences: usize,
    /// Max sentences in each section's extractive summary.
    pub section_summary_max_sentences: usize,
    /// Maximum heading depth rendered in the outline.
    pub max_outline_depth: u8,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.5,
            min_section_size: 200,
            doc_summary_max_sentences: 3,
            section_summary_max_sentences: 1,
            max_outline_depth: 6,
        }
    }
}
