// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Outline rendering and extractive summaries over a hierarchy forest.

use std::collections::HashMap;
use std::sync::OnceLock;

use doc_analysis_core::HeadingNode;
use regex::Regex;

fn sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+").unwrap())
}

/// Join the first `n` regex-matched sentences of `text`. Falls back to the
/// whole trimmed text when no terminator is found (e.g. a single
/// unterminated sentence).
pub fn extract_sentences(text: &str, n: usize) -> String {
    let matches: Vec<&str> = sentence_re()
        .find_iter(text)
        .take(n)
        .map(|m| m.as_str().trim())
        .collect();

    if matches.is_empty() {
        text.trim().to_string()
    } else {
        matches.join(" ")
    }
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

fn render_node(node: &HeadingNode, number: &str, max_depth: u8, out: &mut Vec<String>) {
    if node.level > max_depth {
        return;
    }
    let indent = "  ".repeat((node.level - 1) as usize);
    out.push(format!("{}{}. {}", indent, number, node.title));
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, &format!("{}.{}", number, i + 1), max_depth, out);
    }
}

/// Depth-first, indented outline of `forest`. Nodes deeper than `max_depth`
/// are skipped entirely (neither rendered nor recursed into).
pub fn render_outline(forest: &[HeadingNode], max_depth: u8) -> String {
    let mut lines = Vec::new();
    for (i, root) in forest.iter().enumerate() {
        render_node(root, &(i + 1).to_string(), max_depth, &mut lines);
    }
    lines.join("\n")
}

fn min_level(forest: &[HeadingNode]) -> Option<u8> {
    let mut min = None;
    let mut stack: Vec<&HeadingNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        min = Some(min.map_or(node.level, |m: u8| m.min(node.level)));
        stack.extend(node.children.iter());
    }
    min
}

/// Extractive summary per shallowest-level node in `forest` (the nodes
/// whose level equals the minimum level present anywhere in the tree),
/// keyed by title.
pub fn section_summaries(text: &str, forest: &[HeadingNode], max_sentences: usize) -> HashMap<String, String> {
    let mut out = HashMap::new();
    let Some(shallowest) = min_level(forest) else {
        return out;
    };

    let mut stack: Vec<&HeadingNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        if node.level == shallowest {
            let section_text = char_slice(text, node.start_offset, node.end_offset);
            out.insert(node.title.clone(), extract_sentences(&section_text, max_sentences));
        }
        stack.extend(node.children.iter());
    }
    out
}
