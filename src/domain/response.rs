use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decoded response body. The client imposes no schema; callers read it per operation.
pub type ApiResult = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// One entry of the `errors` envelope.
pub struct RemoteErrorEntry {
    #[serde(default, deserialize_with = "any_as_text")]
    pub id: String,
    #[serde(default)]
    pub explain: Option<Value>,
}

impl RemoteErrorEntry {
    /// Read one `errors` item. A bare string is taken as the identifier and any other
    /// non-object value as its JSON text.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            other => Self {
                id: text_of(other),
                explain: None,
            },
        }
    }

    /// Human-readable explanation, empty when the service sent none.
    pub fn explain_text(&self) -> String {
        match &self.explain {
            None => String::new(),
            Some(value) => text_of(value.clone()),
        }
    }
}

fn text_of(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn any_as_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(text_of)
}
