// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Strategy selection and the top-level `extract_hierarchy` entry point.

use doc_analysis_core::{Embedder, HeadingNode, HierarchyMap, HierarchyOptions, HierarchyStrategy};
use tracing::debug;

use crate::embedding_segment::segment_by_embedding_similarity;
use crate::error::Result;
use crate::heading::extract_headings;
use crate::outline::{extract_sentences, render_outline, section_summaries};
use crate::positional::positional_fallback;

/// Detect the structural tree of `text`, choosing a strategy in order:
/// headings, then embedding-similarity segmentation (if an embedder is
/// supplied), then a positional fallback.
pub async fn extract_hierarchy(
    text: &str,
    embedder: Option<&dyn Embedder>,
    opts: &HierarchyOptions,
) -> Result<HierarchyMap> {
    let headings = extract_headings(text);

    let (forest, strategy) = if !headings.is_empty() {
        debug!(count = headings.len(), "heading strategy selected");
        (headings, HierarchyStrategy::Heading)
    } else if let Some(embedder) = embedder {
        debug!("embedding-similarity strategy selected");
        let forest = segment_by_embedding_similarity(text, embedder, opts).await?;
        (forest, HierarchyStrategy::EmbeddingSimilarity)
    } else {
        debug!("positional strategy selected");
        (positional_fallback(text), HierarchyStrategy::Positional)
    };

    let outline = render_outline(&forest, opts.max_outline_depth);
    let document_summary = extract_sentences(text, opts.doc_summary_max_sentences);
    let summaries = section_summaries(text, &forest, opts.section_summary_max_sentences);

    Ok(HierarchyMap {
        headings: forest,
        outline,
        document_summary,
        section_summaries: summaries,
        strategy,
    })
}

/// Build the `"A > B > C"` context prefix for `offset` by descending
/// `tree` and collecting the titles of every node whose range contains it.
/// Returns `""` when no section contains `offset`.
pub fn build_context_prefix(offset: usize, tree: &[HeadingNode]) -> String {
    for root in tree {
        if let Some(titles) = root.path_titles_at(offset) {
            return titles.join(" > ");
        }
    }
    String::new()
}
