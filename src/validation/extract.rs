//! Structured Payload Extraction
//!
//! Finds the first parseable JSON object or array embedded in model output.

use serde_json::Value;

use super::Rejection;

/// Opening brackets tried before giving up. Each attempt may scan the rest
/// of the text, so this bounds the work on bracket-heavy output.
pub const MAX_CANDIDATES: usize = 64;

/// Extracts the first balanced JSON object or array from free-form text.
///
/// Each `{` or `[` is tried in order, up to [`MAX_CANDIDATES`] of them. A
/// candidate runs to its matching closing bracket (brackets inside string
/// literals are ignored) and is accepted if it parses. Mismatched brackets
/// abandon the candidate.
pub fn extract_structured(text: &str) -> Result<Value, Rejection> {
    let bytes = text.as_bytes();
    let starts = bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'{' || b == b'[')
        .map(|(start, _)| start)
        .take(MAX_CANDIDATES);

    for start in starts {
        if let Some(end) = balanced_end(bytes, start) {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(Rejection::Parse(
        "no parseable JSON object or array in response".to_string(),
    ))
}

/// Index of the bracket closing the one at `start`, if the brackets balance.
///
/// Operates on bytes: the ASCII delimiters never occur inside multi-byte
/// UTF-8 sequences, so every returned index is a char boundary.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut expected: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => expected.push(b'}'),
            b'[' => expected.push(b']'),
            b'}' | b']' => {
                if expected.pop() != Some(b) {
                    return None;
                }
                if expected.is_empty() {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
