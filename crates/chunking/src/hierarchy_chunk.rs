// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Hierarchy-aware chunking: segmentation restricted to each leaf section
//! of a `HierarchyMap`, with offsets translated back to document-relative
//! positions and structural metadata attached.

use doc_analysis_core::{Chunk, ChunkOptions, HierarchyMap};

use crate::segment::chunk_text;

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Flatten `hierarchy` to its leaf sections, segment each one
/// independently, and stitch the results into one globally-indexed,
/// section-annotated chunk list.
///
/// Mid-level sections that have both their own text and children are, per
/// the leaves-only flattening, omitted from the result entirely — their
/// text is only reachable through whichever child section happens to
/// cover it.
pub fn chunk_with_hierarchy(text: &str, hierarchy: &HierarchyMap, opts: &ChunkOptions) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut global_index = 0usize;

    for leaf in hierarchy.leaves() {
        let section_text = char_slice(text, leaf.start_offset, leaf.end_offset);
        let prefix = hierarchy.context_prefix_at(leaf.start_offset);
        let context_prefix = if prefix.is_empty() {
            None
        } else {
            Some(format!("[{}] ", prefix))
        };

        for mut chunk in chunk_text(&section_text, opts) {
            chunk.index = global_index;
            global_index += 1;
            chunk.start += leaf.start_offset;
            chunk.end += leaf.start_offset;
            chunk = chunk.with_section(leaf.title.clone(), prefix.clone(), context_prefix.clone());
            chunks.push(chunk);
        }
    }

    chunks
}
