//! JSON recovery from model responses.
//!
//! Models asked for "JSON only" still routinely wrap their answer in a
//! markdown code fence, with or without a language tag. This strips the
//! fence before parsing and turns every parse failure into a typed error.

use crate::{LectioError, Result};

/// Longest response excerpt carried in a malformed-output error.
const SNIPPET_LIMIT: usize = 200;

/// Parse a model response that is expected to contain JSON.
pub fn extract_json(raw: &str) -> Result<serde_json::Value> {
    let body = strip_fence(raw);
    serde_json::from_str(body).map_err(|e| LectioError::MalformedOutput {
        detail: e.to_string(),
        snippet: snippet(body),
    })
}

/// Remove a surrounding triple-backtick fence, if present.
///
/// Handles an optional language tag right after the opening fence, so
/// "```json\n{...}\n```", "```\n{...}\n```", and bare "{...}" all yield
/// the same payload.
fn strip_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };
    let body = body
        .strip_prefix("json")
        .or_else(|| body.strip_prefix("JSON"))
        .unwrap_or(body);
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

fn snippet(text: &str) -> String {
    if text.len() <= SNIPPET_LIMIT {
        return text.to_string();
    }
    let mut end = SNIPPET_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"flashcards": [{"id": 1}], "total": 1}"#;

    #[test]
    fn parses_bare_json() {
        let value = extract_json(PAYLOAD).unwrap();
        assert_eq!(value["total"], 1);
    }

    #[test]
    fn fence_variants_parse_identically() {
        let bare = extract_json(PAYLOAD).unwrap();
        let tagged = extract_json(&format!("```json\n{PAYLOAD}\n```")).unwrap();
        let untagged = extract_json(&format!("```\n{PAYLOAD}\n```")).unwrap();

        assert_eq!(bare, tagged);
        assert_eq!(bare, untagged);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let value = extract_json(&format!("\n\n  ```json\n{PAYLOAD}\n```  \n")).unwrap();
        assert_eq!(value["total"], 1);
    }

    #[test]
    fn non_json_is_malformed_output() {
        let err = extract_json("Sure! Here are your flashcards.").unwrap_err();
        assert!(matches!(err, LectioError::MalformedOutput { .. }));
    }

    #[test]
    fn truncated_json_is_malformed_output() {
        let err = extract_json(r#"```json
{"questions": [{"id": 1,
```"#)
            .unwrap_err();
        assert!(matches!(err, LectioError::MalformedOutput { .. }));
    }

    #[test]
    fn snippet_is_truncated() {
        let long = format!("not json {}", "x".repeat(500));
        match extract_json(&long).unwrap_err() {
            LectioError::MalformedOutput { snippet, .. } => {
                assert!(snippet.len() <= SNIPPET_LIMIT + 3);
                assert!(snippet.ends_with("..."));
            }
            other => panic!("expected MalformedOutput, got {other:?}"),
        }
    }
}
