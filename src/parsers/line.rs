use serde_json::Value;

use crate::models::Candidate;

/// Turn one trimmed input line into the candidate the filters operate on
///
/// Without a JSON field the line itself is the URL. With one, the line must parse as JSON
/// and the field's string value becomes the URL while the full line is kept for output.
/// A missing or non-string field yields an empty URL, which the URL parser later rejects.
///
/// Returns `None` when JSON mode is on and the line is not valid JSON.
pub fn extract_candidate(line: &str, json_field: Option<&str>) -> Option<Candidate> {
    let Some(field) = json_field else {
        return Some(Candidate::plain(line));
    };

    let document: Value = serde_json::from_str(line).ok()?;
    let url = document.get(field).and_then(Value::as_str).unwrap_or_default();

    Some(Candidate { url: url.to_string(), original: line.to_string(), from_json: true })
}
