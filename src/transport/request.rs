use serde_json::{Map, Value};
use url::Url;

use crate::domain::{Credentials, Password};

/// Name of the single form field carrying the JSON-encoded payload.
pub const REQUEST_FIELD: &str = "request";

const API_VERSION: &str = "100";

/// Build the POST target for `path` relative to `base`.
///
/// An empty `path` targets the base endpoint itself. Redirect paths returned by the service
/// are always appended below the base path, so scheme and host never change even when the
/// service answers with an absolute URL. The `apiversion` and `json` query parameters are
/// always appended.
pub fn endpoint_url(base: &str, path: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    if !path.is_empty() {
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
    }
    url.query_pairs_mut()
        .append_pair("apiversion", API_VERSION)
        .append_pair("json", "1");
    Ok(url)
}

/// Encode the wire object as form params: one `request` field holding compact JSON.
///
/// Non-ASCII characters are written as UTF-8, not as `\u` escapes; the form encoder then
/// percent-encodes the bytes.
pub fn encode_request_form(
    wire: &Map<String, Value>,
) -> Result<Vec<(String, String)>, serde_json::Error> {
    let json = serde_json::to_string(wire)?;
    Ok(vec![(REQUEST_FIELD.to_owned(), json)])
}

#[cfg(test)]
/// Inverse of [`encode_request_form`] applied to a urlencoded body.
pub fn decode_request_form(body: &str) -> Option<Map<String, Value>> {
    url::form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == REQUEST_FIELD)
        .and_then(|(_, json)| serde_json::from_str(&json).ok())
}

/// Pretty rendering of an outgoing payload for verbose logs. The password is masked.
pub fn render_request(wire: &Map<String, Value>) -> String {
    let mut masked = wire.clone();
    if let Some(Value::Object(auth)) = masked.get_mut(Credentials::FIELD) {
        if auth.contains_key(Password::FIELD) {
            auth.insert(Password::FIELD.to_owned(), Value::String("***".to_owned()));
        }
    }
    serde_json::to_string_pretty(&masked).unwrap_or_else(|_| format!("{masked:?}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::Payload;

    fn credentials() -> Credentials {
        Credentials::new("acme", "ops", "secret").unwrap()
    }

    #[test]
    fn endpoint_url_for_root() {
        let url = endpoint_url("https://api.sendsay.ru/", "").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.sendsay.ru/?apiversion=100&json=1"
        );
    }

    #[test]
    fn endpoint_url_for_redirect_path() {
        let url = endpoint_url("https://api.sendsay.ru/", "general/api/v100/json/acme").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.sendsay.ru/general/api/v100/json/acme?apiversion=100&json=1"
        );

        let url = endpoint_url("https://api.sendsay.ru/", "/acme").unwrap();
        assert_eq!(url.as_str(), "https://api.sendsay.ru/acme?apiversion=100&json=1");
    }

    #[test]
    fn endpoint_url_keeps_base_prefix_for_redirects() {
        let url = endpoint_url("https://example.invalid/api/", "acme").unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/api/acme?apiversion=100&json=1");
    }

    #[test]
    fn endpoint_url_never_leaves_the_base_host() {
        for path in [
            "https://evil.example/steal",
            "//evil.example/steal",
            "/../../steal?x=1#frag",
        ] {
            let url = endpoint_url("https://api.sendsay.ru/", path).unwrap();
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.host_str(), Some("api.sendsay.ru"), "path {path}");
            assert_eq!(url.query(), Some("apiversion=100&json=1"), "path {path}");
        }
    }

    #[test]
    fn endpoint_url_rejects_garbage_base() {
        assert!(endpoint_url("not a url", "").is_err());
    }

    #[test]
    fn encode_request_form_uses_single_field() {
        let wire = Payload::builder("group.list").build().to_wire(&credentials());
        let form = encode_request_form(&wire).unwrap();
        assert_eq!(form.len(), 1);
        assert_eq!(form[0].0, "request");
    }

    #[test]
    fn encode_request_form_keeps_unicode_unescaped() {
        let wire = Payload::builder("group.create")
            .field("name", "Подписчики")
            .build()
            .to_wire(&credentials());
        let form = encode_request_form(&wire).unwrap();
        assert!(form[0].1.contains("Подписчики"));
        assert!(!form[0].1.contains("\\u"));
    }

    #[test]
    fn form_body_round_trips_to_the_same_payload() {
        let wire = Payload::builder("member.set")
            .field("email", "user+tag@example.com")
            .field("obj", json!({"a": {"q1": "Ответ & co"}, "n": [1, 2.5, true, null]}))
            .field("newbie.confirm", false)
            .build()
            .to_wire(&credentials());
        let form = encode_request_form(&wire).unwrap();
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        assert_eq!(decode_request_form(&body), Some(wire));
    }

    #[test]
    fn render_request_masks_password() {
        let wire = Payload::builder("pong").build().to_wire(&credentials());
        let rendered = render_request(&wire);
        assert!(rendered.contains("\"acme\""));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains('\n'));
    }
}
