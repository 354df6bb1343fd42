//! Turns raw model output into reply suggestions. Two-stage, order-preserving
//! fallback: JSON array first, bullet-stripped lines second, fixed defaults
//! when both come up empty. Pure and total over any input string.

use serde_json::Value;

const DEFAULT_SUGGESTIONS: [&str; 3] = [
    "Got it, tell me more.",
    "That sounds interesting.",
    "Can you explain a bit more?",
];

pub fn extract_suggestions(raw: &str) -> Vec<String> {
    let from_json = parse_json_array(raw);
    if !from_json.is_empty() {
        return from_json;
    }

    let from_lines = parse_lines(raw);
    if !from_lines.is_empty() {
        return from_lines;
    }

    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Stage 1: the model was told to answer with a JSON array of strings.
/// Non-empty trimmed elements are kept in array order; no truncation or
/// padding if the model returned more or fewer than three.
fn parse_json_array(raw: &str) -> Vec<String> {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(strip_code_fence(raw)) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stage 2: treat the output as a bullet or numbered list, one suggestion per
/// line, up to three.
fn parse_lines(raw: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in raw.lines() {
        let cleaned = line
            .trim_start_matches(|c: char| {
                c.is_whitespace() || matches!(c, '-' | '•' | '.' | '0'..='9')
            })
            .trim();
        if cleaned.is_empty() {
            continue;
        }
        out.push(cleaned.to_string());
        if out.len() == 3 {
            break;
        }
    }
    out
}

/// Gemini often wraps JSON answers in a markdown code fence.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // the opening fence may carry a language tag ("```json"); a one-line
    // fence has no newline and no tag
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim(),
    }
}
