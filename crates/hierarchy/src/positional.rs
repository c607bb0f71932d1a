// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! The fallback strategy used when no headings are found and no embedder
//! is available: slice the document into equal-sized ranges.

use doc_analysis_core::HeadingNode;

/// Slice `text` into `clamp(1, min(5, ceil(len / 500)))` equal char ranges,
/// each a level-1 `"Section k of N"` node. The final range absorbs any
/// remainder from integer division.
pub fn positional_fallback(text: &str) -> Vec<HeadingNode> {
    let len = text.chars().count();
    if len == 0 {
        return vec![HeadingNode::new(1, "Section 1 of 1", 0, 0)];
    }

    let count = (len.div_ceil(500)).clamp(1, 5);
    let size = len / count;

    let mut sections = Vec::with_capacity(count);
    for k in 0..count {
        let start = k * size;
        let end = if k + 1 == count { len } else { (k + 1) * size };
        sections.push(HeadingNode::new(1, format!("Section {} of {}", k + 1, count), start, end));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_single_zero_length_section() {
        let sections = positional_fallback("");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].start_offset, 0);
        assert_eq!(sections[0].end_offset, 0);
    }

    #[test]
    fn test_short_document_is_one_section() {
        let sections = positional_fallback("a short document");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].end_offset, "a short document".chars().count());
    }

    #[test]
    fn test_long_document_caps_at_five_sections() {
        let text = "x".repeat(10_000);
        let sections = positional_fallback(&text);
        assert_eq!(sections.len(), 5);
        assert_eq!(sections.last().unwrap().end_offset, 10_000);
    }

    #[test]
    fn test_sections_are_contiguous_and_non_overlapping() {
        let text = "x".repeat(1200);
        let sections = positional_fallback(&text);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end_offset, pair[1].start_offset);
        }
    }
}
