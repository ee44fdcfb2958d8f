//! Pulling a JSON object out of free-form model output.

use serde_json::Value;
use tracing::{debug, warn};

/// Extract and parse the first JSON object in `text`.
///
/// The first balanced `{...}` span is parsed. When the text holds no
/// balanced span, markdown code-fence markers are stripped and the remainder
/// parsed instead. Returns None if parsing fails.
pub fn extract_json(text: &str) -> Option<Value> {
    let candidate = match balanced_object(text) {
        Some(span) => span.to_string(),
        None => strip_code_fences(text),
    };

    match serde_json::from_str(&candidate) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "gateway reply did not contain parseable JSON");
            debug!(raw = text, "raw gateway reply");
            None
        }
    }
}

/// First `{...}` span whose braces balance, ignoring braces inside strings.
///
/// One forward pass over open-brace positions. The first span to close back
/// to an empty stack wins; if an earlier brace never closes, the earliest
/// opening span that did close is used.
fn balanced_object(text: &str) -> Option<&str> {
    let mut opens: Vec<usize> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate() {
        if opens.is_empty() {
            if b == b'{' {
                opens.push(i);
            }
            continue;
        }
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
            b'{' => opens.push(i),
            b'}' => {
                let Some(start) = opens.pop() else { continue };
                if opens.is_empty() {
                    return Some(&text[start..=i]);
                }
                if best.map_or(true, |(s, _)| start < s) {
                    best = Some((start, i));
                }
            }
            _ => {}
        }
    }

    best.map(|(start, end)| &text[start..=end])
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
