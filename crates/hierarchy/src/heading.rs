// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Line-by-line heading detection (Markdown, ALL-CAPS, numeric) and tree
//! construction from the resulting flat list.

use std::sync::OnceLock;

use doc_analysis_core::HeadingNode;
use regex::Regex;

struct FlatHeading {
    level: u8,
    title: String,
    offset: usize,
}

fn markdown_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap())
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+(?:\.\d+)*)[.)]\s+(.+)$").unwrap())
}

fn is_all_caps_heading(trimmed: &str) -> bool {
    let char_len = trimmed.chars().count();
    if char_len < 5 {
        return false;
    }
    if trimmed != trimmed.to_uppercase() {
        return false;
    }
    let starts_with_letter = trimmed
        .chars()
        .next()
        .map(|c| c.is_ascii_uppercase())
        .unwrap_or(false);
    if !starts_with_letter {
        return false;
    }
    if trimmed.starts_with(['#', '-', '*', '>']) {
        return false;
    }
    trimmed.split_whitespace().count() >= 3
}

fn title_case(trimmed: &str) -> String {
    trimmed
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn dot_depth(number: &str) -> u8 {
    number.split('.').count() as u8
}

/// Scan `text` line by line and return every detected heading, in document
/// order, with its char offset set to the start of its source line.
fn extract_flat_headings(text: &str) -> Vec<FlatHeading> {
    let mut headings = Vec::new();
    let mut offset = 0usize;

    for line in text.split('\n') {
        let trimmed = line.trim();

        if let Some(caps) = markdown_re().captures(trimmed) {
            let level = caps[1].len() as u8;
            let title = caps[2].trim().to_string();
            headings.push(FlatHeading { level, title, offset });
        } else if is_all_caps_heading(trimmed) {
            headings.push(FlatHeading {
                level: 1,
                title: title_case(trimmed),
                offset,
            });
        } else if let Some(caps) = numeric_re().captures(trimmed) {
            let level = dot_depth(&caps[1]).min(6);
            let title = caps[2].trim().to_string();
            headings.push(FlatHeading { level, title, offset });
        }

        offset += line.chars().count() + 1;
    }

    headings
}

/// Recursively consume `flat` starting at `*idx`, gathering every
/// contiguous heading whose level is strictly greater than `parent_level`
/// as a child, stopping at the next sibling or shallower heading.
fn build_children(flat: &[(u8, String, usize, usize)], idx: &mut usize, parent_level: u8) -> Vec<HeadingNode> {
    let mut children = Vec::new();
    while *idx < flat.len() {
        let (level, _, _, _) = &flat[*idx];
        if *level <= parent_level {
            break;
        }
        let (level, title, start, end) = flat[*idx].clone();
        *idx += 1;
        let grandchildren = build_children(flat, idx, level);
        let mut node = HeadingNode::new(level, title, start, end);
        node.children = grandchildren;
        children.push(node);
    }
    children
}

/// Detect every heading in `text` and nest them into a nested forest.
/// Returns an empty forest when no headings are found, so that callers can
/// fall through to the next strategy.
pub fn extract_headings(text: &str) -> Vec<HeadingNode> {
    let flat = extract_flat_headings(text);
    if flat.is_empty() {
        return Vec::new();
    }

    let text_len = text.chars().count();
    let with_ends: Vec<(u8, String, usize, usize)> = flat
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let end = flat[i + 1..]
                .iter()
                .find(|next| next.level <= h.level)
                .map(|next| next.offset)
                .unwrap_or(text_len);
            (h.level, h.title.clone(), h.offset, end)
        })
        .collect();

    let mut idx = 0;
    build_children(&with_ends, &mut idx, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headings_yields_empty_forest() {
        assert!(extract_headings("just some plain text.\n\nno headings here.").is_empty());
    }

    #[test]
    fn test_markdown_headings_nest() {
        let text = "# Intro\n\nHello world.\n\n## Details\n\nMore text.";
        let forest = extract_headings(text);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].title, "Intro");
        assert_eq!(forest[0].level, 1);
        assert_eq!(forest[0].end_offset, text.chars().count());
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].title, "Details");
        assert_eq!(forest[0].children[0].level, 2);
    }

    #[test]
    fn test_numeric_headings_produce_depth_based_levels() {
        let text = "1. First\n\ncontent\n\n1.1 Nested\n\nmore\n\n2. Second";
        let forest = extract_headings(text);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].title, "First");
        assert_eq!(forest[1].title, "Second");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].title, "Nested");
        assert_eq!(forest[0].children[0].level, 2);
    }

    #[test]
    fn test_all_caps_two_words_is_not_a_heading() {
        let text = "HELLO WORLD\n\nSome body text that follows.";
        assert!(extract_headings(text).is_empty());
    }

    #[test]
    fn test_all_caps_three_words_is_a_heading() {
        let text = "PROJECT STATUS REPORT\n\nBody text here.";
        let forest = extract_headings(text);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].title, "Project Status Report");
    }

    #[test]
    fn test_mixed_numeric_depth_clamped_to_six() {
        let text = "1.1.1.1.1.1.1 Too Deep\n\nbody";
        let forest = extract_headings(text);
        assert_eq!(forest[0].level, 6);
    }
}
