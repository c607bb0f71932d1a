// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! The paragraph/sentence-aware segmentation algorithm at the core of
//! `chunk_text`. Every offset produced here is a char index, not a byte
//! index, so multi-byte UTF-8 text chunks correctly.

use doc_analysis_core::{Chunk, ChunkOptions};
use regex::Regex;
use std::sync::OnceLock;

fn paragraph_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").unwrap())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split text on blank lines, dropping empty paragraphs.
fn split_into_paragraphs(text: &str) -> Vec<String> {
    paragraph_splitter()
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentences on `[.!?]` followed by whitespace, keeping the
/// terminator attached to the sentence that precedes it. A trailing
/// fragment with no terminator becomes its own, final sentence.
fn split_into_sentences(text: &str) -> Vec<String> {
    let re = sentence_boundary();
    let mut sentences = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        let punct_end = m.start() + 1;
        sentences.push(text[last..punct_end].to_string());
        last = m.end();
    }
    if last < text.len() {
        sentences.push(text[last..].to_string());
    }
    sentences
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Break any paragraph over `max_chunk_size` chars at sentence boundaries,
/// greedily packing sentences into a running buffer. A paragraph with no
/// sentence terminators never flushes early, so it survives as one
/// oversized segment.
fn break_oversized(paragraphs: Vec<String>, max_chunk_size: usize) -> Vec<String> {
    let mut segments = Vec::new();
    for paragraph in paragraphs {
        if char_len(&paragraph) <= max_chunk_size {
            segments.push(paragraph);
            continue;
        }

        let sentences = split_into_sentences(&paragraph);
        if sentences.is_empty() {
            segments.push(paragraph);
            continue;
        }

        let mut buffer = String::new();
        for sentence in sentences {
            let would_be_len = if buffer.is_empty() {
                char_len(&sentence)
            } else {
                char_len(&buffer) + 1 + char_len(&sentence)
            };

            if would_be_len > max_chunk_size && !buffer.is_empty() {
                segments.push(std::mem::take(&mut buffer));
                buffer = sentence;
            } else if buffer.is_empty() {
                buffer = sentence;
            } else {
                buffer.push(' ');
                buffer.push_str(&sentence);
            }
        }
        if !buffer.is_empty() {
            segments.push(buffer);
        }
    }
    segments
}

/// Pack consecutive segments, joined by a blank line, while the combined
/// length stays within `max_chunk_size + 2`.
fn merge_tiny(segments: Vec<String>, max_chunk_size: usize) -> Vec<String> {
    let mut merged = Vec::new();
    let mut buffer: Option<String> = None;

    for segment in segments {
        match buffer.take() {
            None => buffer = Some(segment),
            Some(mut buf) => {
                let combined_len = char_len(&buf) + 2 + char_len(&segment);
                if combined_len <= max_chunk_size + 2 {
                    buf.push_str("\n\n");
                    buf.push_str(&segment);
                    buffer = Some(buf);
                } else {
                    merged.push(buf);
                    buffer = Some(segment);
                }
            }
        }
    }
    if let Some(buf) = buffer {
        merged.push(buf);
    }
    merged
}

/// Prepend each segment (after the first) with a word-boundary-trimmed
/// slice of the previous canonical segment's tail.
fn apply_overlap(segments: &[String], overlap: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 || overlap == 0 {
            out.push(segment.clone());
            continue;
        }

        let prev_chars: Vec<char> = segments[i - 1].chars().collect();
        let take = overlap.min(prev_chars.len());
        let overlap_slice: String = prev_chars[prev_chars.len() - take..].iter().collect();

        let trimmed = match overlap_slice.find(' ') {
            Some(pos) => overlap_slice[pos + 1..].to_string(),
            None => overlap_slice,
        };

        if trimmed.is_empty() {
            out.push(segment.clone());
        } else {
            out.push(format!("{} {}", trimmed, segment));
        }
    }
    out
}

fn find_char_subsequence(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(haystack.len()));
    }
    if needle.len() > haystack.len() {
        return None;
    }
    let max_start = haystack.len() - needle.len();
    if from > max_start {
        return None;
    }
    (from..=max_start).find(|&start| haystack[start..start + needle.len()] == *needle)
}

/// Locate each canonical segment's offset in `text` via a forward-only
/// search cursor that advances past each match, allowing overlapping
/// literal matches while guaranteeing progress.
fn locate_segments(text: &str, canonical: &[String]) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().collect();
    let mut search_from = 0usize;
    let mut positions = Vec::with_capacity(canonical.len());

    for segment in canonical {
        let needle: Vec<char> = segment.chars().collect();
        match find_char_subsequence(&haystack, &needle, search_from) {
            Some(match_start) => {
                let match_end = match_start + needle.len();
                positions.push((match_start, match_end));
                search_from = match_start + 1;
            }
            None => positions.push((0, search_from)),
        }
    }
    positions
}

/// Split `text` into chunks: paragraph/sentence segmentation, tiny-segment
/// merging, overlap, position assignment, and hashing. Never fails — an
/// empty document simply produces no chunks.
pub fn chunk_text(text: &str, opts: &ChunkOptions) -> Vec<Chunk> {
    let paragraphs = split_into_paragraphs(text);
    let broken = break_oversized(paragraphs, opts.max_chunk_size);
    let canonical = merge_tiny(broken, opts.max_chunk_size);
    let positions = locate_segments(text, &canonical);
    let overlapped = apply_overlap(&canonical, opts.overlap);

    overlapped
        .into_iter()
        .zip(positions)
        .enumerate()
        .map(|(index, (text, (start, end)))| Chunk::new(index, text, start, end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let opts = ChunkOptions::default();
        assert!(chunk_text("", &opts).is_empty());
    }

    #[test]
    fn test_s1_plain_chunking_no_overlap() {
        let text = "A paragraph.\n\nAnother.";
        let opts = ChunkOptions {
            max_chunk_size: 50,
            overlap: 0,
        };
        let chunks = chunk_text(text, &opts);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "A paragraph.\n\nAnother.");
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, char_len(text));
        assert_eq!(chunks[0].hash, doc_analysis_core::hash_text(&chunks[0].text));
    }

    #[test]
    fn test_short_text_has_no_overlap_applied() {
        let opts = ChunkOptions {
            max_chunk_size: 50,
            overlap: 200,
        };
        let text = "short";
        let chunks = chunk_text(text, &opts);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, 5);
        assert_eq!(chunks[0].text, "short");
    }

    #[test]
    fn test_oversized_paragraph_without_terminators_is_one_chunk() {
        let paragraph = "word ".repeat(400);
        let opts = ChunkOptions {
            max_chunk_size: 100,
            overlap: 0,
        };
        let chunks = chunk_text(paragraph.trim(), &opts);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, paragraph.trim());
    }

    #[test]
    fn test_overlap_prepends_trimmed_tail() {
        let text = format!("{}\n\n{}", "a".repeat(30), "b".repeat(30));
        let opts = ChunkOptions {
            max_chunk_size: 30,
            overlap: 10,
        };
        let chunks = chunk_text(&text, &opts);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[1].text.starts_with(&"a".repeat(10)));
    }

    #[test]
    fn test_chunks_monotone_by_start() {
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird one too.";
        let opts = ChunkOptions {
            max_chunk_size: 20,
            overlap: 0,
        };
        let chunks = chunk_text(text, &opts);
        for pair in chunks.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
    }

    #[test]
    fn test_hash_always_matches_text() {
        let text = "One.\n\nTwo.\n\nThree.";
        let opts = ChunkOptions::default();
        for chunk in chunk_text(text, &opts) {
            assert_eq!(chunk.hash, doc_analysis_core::hash_text(&chunk.text));
        }
    }
}
