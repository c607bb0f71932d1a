// Copyright 2025 Doc Analysis Team
//
// Licensed under the Apache License, Version 2.0 (the "License");

//! Stripping the optional ```` ```json ```` fence LLM providers tend to
//! wrap structured responses in.

/// Strip a leading ```` ```json ```` (optionally followed by a newline) and
/// a trailing ```` ``` ```` (optionally preceded by a newline), then trim
/// surrounding whitespace.
pub fn strip_json_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_prefix = trimmed
        .strip_prefix("```json")
        .map(|rest| rest.strip_prefix('\n').unwrap_or(rest))
        .unwrap_or(trimmed);
    let without_suffix = without_prefix
        .strip_suffix("```")
        .map(|rest| rest.strip_suffix('\n').unwrap_or(rest))
        .unwrap_or(without_prefix);
    without_suffix.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_fenced_json() {
        let raw = "```json\n[{\"a\": 1}]\n```";
        assert_eq!(strip_json_fence(raw), "[{\"a\": 1}]");
    }

    #[test]
    fn test_passes_through_unfenced_json() {
        assert_eq!(strip_json_fence("[1, 2, 3]"), "[1, 2, 3]");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(strip_json_fence("  \n{}\n  "), "{}");
    }
}
