use serde_json::{Map, Value};

use crate::domain::value::Credentials;

/// Top-level payload key naming the remote operation.
pub const ACTION_FIELD: &str = "action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    OneTimeAuth,
    Anonymous,
}

#[derive(Debug, Clone, PartialEq)]
/// One request to the Sendsay API: the `action` discriminator plus operation fields.
///
/// A payload is assembled once through [`PayloadBuilder`] and is immutable afterwards.
/// Credentials are not stored in the payload itself; the client merges them in when the
/// payload goes on the wire (see [`Payload::to_wire`]).
pub struct Payload {
    action: String,
    auth: AuthMode,
    fields: Map<String, Value>,
}

impl Payload {
    /// Start an authenticated payload for `action`.
    pub fn builder(action: impl Into<String>) -> PayloadBuilder {
        PayloadBuilder::new(action.into(), AuthMode::OneTimeAuth)
    }

    /// Start a payload that is sent without credentials (only the `ping` probe uses this).
    pub fn anonymous(action: impl Into<String>) -> PayloadBuilder {
        PayloadBuilder::new(action.into(), AuthMode::Anonymous)
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Whether the credential triple is merged in on the wire.
    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthMode::OneTimeAuth
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Full JSON object sent to the remote service.
    ///
    /// `action` and `one_time_auth` always win over same-named operation fields.
    pub fn to_wire(&self, credentials: &Credentials) -> Map<String, Value> {
        let mut wire = self.fields.clone();
        wire.insert(ACTION_FIELD.to_owned(), Value::String(self.action.clone()));
        match self.auth {
            AuthMode::OneTimeAuth => {
                wire.insert(Credentials::FIELD.to_owned(), credentials.to_json());
            }
            AuthMode::Anonymous => {
                wire.remove(Credentials::FIELD);
            }
        }
        wire
    }
}

#[derive(Debug, Clone)]
#[must_use]
/// One-pass builder for [`Payload`].
///
/// Required fields go through [`PayloadBuilder::field`]; optional arguments go through
/// [`PayloadBuilder::optional`], which omits the key entirely when the value is `None`.
pub struct PayloadBuilder {
    action: String,
    auth: AuthMode,
    fields: Map<String, Value>,
}

impl PayloadBuilder {
    fn new(action: String, auth: AuthMode) -> Self {
        Self {
            action,
            auth,
            fields: Map::new(),
        }
    }

    /// Set a field unconditionally.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field only when `value` is present.
    pub fn optional<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Copy every entry of `extra` into the top level of the payload.
    pub fn merge(mut self, extra: Map<String, Value>) -> Self {
        self.fields.extend(extra);
        self
    }

    /// Apply a shared shaping step (tagged unions, statistics result mode, ...).
    pub fn with(self, apply: impl FnOnce(Self) -> Self) -> Self {
        apply(self)
    }

    pub fn build(self) -> Payload {
        Payload {
            action: self.action,
            auth: self.auth,
            fields: self.fields,
        }
    }
}
