use serde_json::{Map, Value};

use crate::domain::{ApiResult, RemoteErrorEntry};

const ERRORS_FIELD: &str = "errors";
const REDIRECT_FIELD: &str = "REDIRECT";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response is an empty JSON object")]
    Empty,

    #[error("`REDIRECT` value is not a string")]
    MalformedRedirect,
}

#[derive(Debug, Clone, PartialEq)]
/// Classified response body.
pub enum Outcome {
    /// The service reported one or more failures.
    Failed(Vec<RemoteErrorEntry>),
    /// Resubmit the same payload against this path.
    Redirect(String),
    /// Terminal result, returned verbatim.
    Done(ApiResult),
}

/// Decode a response body into a JSON object.
pub fn decode_response(body: &str) -> Result<ApiResult, TransportError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(TransportError::NotAnObject),
    }
}

/// Classify a decoded body: `errors` first, then emptiness, then `REDIRECT`.
///
/// A body carrying both `errors` and `REDIRECT` is a failure, never a redirect. Any `errors`
/// value selects [`Outcome::Failed`], whatever the shape of its entries.
pub fn classify_response(mut result: Map<String, Value>) -> Result<Outcome, TransportError> {
    if let Some(errors) = result.remove(ERRORS_FIELD) {
        let entries = match errors {
            Value::Array(items) => items.into_iter().map(RemoteErrorEntry::from_value).collect(),
            other => vec![RemoteErrorEntry::from_value(other)],
        };
        return Ok(Outcome::Failed(entries));
    }

    if result.is_empty() {
        return Err(TransportError::Empty);
    }

    if let Some(redirect) = result.get(REDIRECT_FIELD) {
        return match redirect {
            Value::String(path) => Ok(Outcome::Redirect(path.clone())),
            _ => Err(TransportError::MalformedRedirect),
        };
    }

    Ok(Outcome::Done(result))
}

/// Pretty rendering of a raw response body for verbose logs; non-JSON bodies pass through.
pub fn render_response(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_owned())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn classify(body: &str) -> Result<Outcome, TransportError> {
        classify_response(decode_response(body)?)
    }

    #[test]
    fn decode_response_rejects_invalid_json() {
        assert!(matches!(
            decode_response("<html>oops</html>"),
            Err(TransportError::Json(_))
        ));
    }

    #[test]
    fn decode_response_rejects_non_objects() {
        assert!(matches!(
            decode_response("[1, 2]"),
            Err(TransportError::NotAnObject)
        ));
    }

    #[test]
    fn classify_maps_errors_envelope() {
        let outcome = classify(
            r#"{"errors": [{"id": "error/auth/failed", "explain": "wrong password"},
                           {"id": "error/other"}]}"#,
        )
        .unwrap();
        let Outcome::Failed(entries) = outcome else {
            panic!("unexpected outcome: {outcome:?}");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "error/auth/failed");
        assert_eq!(entries[0].explain_text(), "wrong password");
        assert_eq!(entries[1].explain_text(), "");
    }

    #[test]
    fn classify_prefers_errors_over_redirect() {
        let outcome = classify(r#"{"REDIRECT": "a", "errors": [{"id": "error/x"}]}"#).unwrap();
        assert!(matches!(outcome, Outcome::Failed(_)));
    }

    #[test]
    fn classify_maps_redirect() {
        assert_eq!(
            classify(r#"{"REDIRECT": "/general/api/v100/json/acme"}"#).unwrap(),
            Outcome::Redirect("/general/api/v100/json/acme".to_owned())
        );
    }

    #[test]
    fn classify_rejects_non_string_redirect() {
        assert!(matches!(
            classify(r#"{"REDIRECT": 5}"#),
            Err(TransportError::MalformedRedirect)
        ));
    }

    #[test]
    fn classify_rejects_empty_object() {
        assert!(matches!(classify("{}"), Err(TransportError::Empty)));
    }

    #[test]
    fn classify_accepts_loosely_shaped_errors() {
        let body = r#"{"errors": ["error/x", 7, {"explain": "no id"}], "REDIRECT": "a"}"#;
        let outcome = classify(body).unwrap();
        let Outcome::Failed(entries) = outcome else {
            panic!("unexpected outcome: {outcome:?}");
        };
        let ids = entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["error/x", "7", ""]);
        assert_eq!(entries[2].explain_text(), "no id");

        let outcome = classify(r#"{"errors": "boom"}"#).unwrap();
        let Outcome::Failed(entries) = outcome else {
            panic!("unexpected outcome: {outcome:?}");
        };
        assert_eq!(entries[0].id, "boom");
    }

    #[test]
    fn classify_returns_result_verbatim() {
        let outcome = classify(r#"{"pong": 1, "request.id": "r1"}"#).unwrap();
        let Outcome::Done(result) = outcome else {
            panic!("unexpected outcome: {outcome:?}");
        };
        assert_eq!(result.get("pong"), Some(&json!(1)));
        assert_eq!(result.get("request.id"), Some(&json!("r1")));
    }

    #[test]
    fn render_response_pretty_prints_json_and_passes_text_through() {
        assert!(render_response(r#"{"a":1}"#).contains('\n'));
        assert_eq!(render_response("plain"), "plain");
    }
}
