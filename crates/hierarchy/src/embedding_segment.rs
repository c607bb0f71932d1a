// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Topic segmentation by adjacent-paragraph embedding similarity, used when
//! no headings are present but an `Embedder` is available.

use std::sync::OnceLock;

use doc_analysis_core::{Embedder, HeadingNode, HierarchyOptions};
use regex::Regex;

use crate::error::{HierarchyError, Result};

struct Paragraph {
    text: String,
    start: usize,
    end: usize,
}

fn paragraph_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Split `text` into paragraphs, recovering each one's char offsets with a
/// forward-only search cursor rather than by summing trimmed lengths, so
/// that any whitespace normalization inside the split cannot desynchronize
/// offsets from the source.
fn paragraphs_with_offsets(text: &str) -> Vec<Paragraph> {
    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0usize;
    let mut out = Vec::new();

    for raw in paragraph_splitter().split(text) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let needle: Vec<char> = trimmed.chars().collect();
        let found = (cursor..=chars.len().saturating_sub(needle.len()))
            .find(|&start| chars[start..start + needle.len()] == needle[..]);
        let start = found.unwrap_or(cursor);
        let end = start + needle.len();
        cursor = end;
        out.push(Paragraph {
            text: trimmed.to_string(),
            start,
            end,
        });
    }

    out
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for i in 0..a.len() {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom > 0.0 {
        dot / denom
    } else {
        0.0
    }
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population standard deviation (divides by `n`, not `n - 1`).
fn population_stdev(values: &[f32], mean: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32;
    variance.sqrt()
}

/// Scan candidate boundaries left to right, dropping any whose would-be
/// previous section falls under `min_section_size` total paragraph chars.
/// Boundary `0` is always kept; a dropped candidate absorbs its section
/// into the prior group.
fn merge_tiny_sections(paragraphs: &[Paragraph], mut boundaries: Vec<usize>, min_section_size: usize) -> Vec<usize> {
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut kept = vec![boundaries[0]];
    for &candidate in &boundaries[1..] {
        let prev_start = *kept.last().unwrap();
        let prev_len: usize = paragraphs[prev_start..candidate].iter().map(|p| p.text.chars().count()).sum();
        if prev_len < min_section_size {
            continue;
        }
        kept.push(candidate);
    }
    kept
}

/// Segment `text` by embedding adjacent paragraphs and cutting wherever
/// their cosine similarity drops below an adaptive, mean-minus-stdev
/// threshold.
pub async fn segment_by_embedding_similarity(
    text: &str,
    embedder: &dyn Embedder,
    opts: &HierarchyOptions,
) -> Result<Vec<HeadingNode>> {
    let paragraphs = paragraphs_with_offsets(text);
    let text_len = text.chars().count();

    if paragraphs.len() <= 1 {
        return Ok(vec![HeadingNode::new(1, "Section 1 of 1", 0, text_len)]);
    }

    let texts: Vec<String> = paragraphs.iter().map(|p| p.text.clone()).collect();
    let vectors = embedder
        .embed_batch(&texts)
        .await
        .map_err(|e| HierarchyError::Embedder(e.to_string()))?;

    let similarities: Vec<f32> = vectors
        .windows(2)
        .map(|pair| cosine_similarity(&pair[0], &pair[1]))
        .collect();

    let avg = mean(&similarities);
    let threshold = avg - opts.similarity_threshold * population_stdev(&similarities, avg);

    let mut boundaries = vec![0usize];
    for (i, &s) in similarities.iter().enumerate() {
        if s < threshold {
            boundaries.push(i + 1);
        }
    }

    let boundaries = merge_tiny_sections(&paragraphs, boundaries, opts.min_section_size);
    let n = boundaries.len();

    let mut sections = Vec::with_capacity(n);
    for (k, &boundary_start) in boundaries.iter().enumerate() {
        let next_start = boundaries.get(k + 1).copied().unwrap_or(paragraphs.len());
        let start = paragraphs[boundary_start].start;
        let end = if k + 1 == n {
            text_len
        } else {
            paragraphs[next_start - 1].end
        };
        sections.push(HeadingNode::new(1, format!("Section {} of {}", k + 1, n), start, end));
    }

    Ok(sections)
}
