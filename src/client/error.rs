use std::fmt;
use std::path::PathBuf;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SendsayClient`](super::SendsayClient).
///
/// The error kind and the identifier list never depend on the verbose flag; verbose mode
/// only fills in the `detail` of [`SendsayError::Remote`].
pub enum SendsayError {
    /// The HTTP client could not be constructed from the builder settings.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// No usable API response: the exchange failed before any answer (status `0`), or the
    /// service answered with something that is not an API result.
    #[error("bad response (HTTP {status}): {reason}")]
    BadResponse {
        status: u16,
        body: String,
        reason: BadResponseReason,
    },

    /// The service reported failures in an `errors` envelope.
    #[error("API error: {ids}{}", format_detail(.detail))]
    Remote {
        /// Error identifiers joined with `;`.
        ids: String,
        /// Only populated when the client is verbose.
        detail: Option<RemoteErrorDetail>,
    },

    /// The operation exists in the API surface but is not realized by this client.
    #[error("operation not implemented: {operation}")]
    NotImplemented { operation: &'static str },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The payload could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured endpoint or a redirect path does not form a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A local file could not be read for upload.
    #[error("cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SendsayError {
    /// Remote error identifiers, in the order the service reported them.
    pub fn error_ids(&self) -> Vec<&str> {
        match self {
            Self::Remote { ids, .. } if !ids.is_empty() => ids.split(';').collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verbose-mode diagnostics attached to [`SendsayError::Remote`].
pub struct RemoteErrorDetail {
    /// Explanations joined with `;`.
    pub explain: String,
    pub http_status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadResponseReason {
    /// The request got no response at all (DNS, TLS, connect, timeout).
    Network(String),
    /// Non-2xx status without an `errors` envelope.
    HttpStatus,
    /// The body is not a JSON object, is empty, or has a malformed envelope.
    Undecodable(String),
    /// The service kept redirecting past the configured limit.
    TooManyRedirects { limit: usize },
}

impl fmt::Display for BadResponseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(why) => write!(f, "no response: {why}"),
            Self::HttpStatus => f.write_str("unexpected HTTP status"),
            Self::Undecodable(why) => write!(f, "undecodable body: {why}"),
            Self::TooManyRedirects { limit } => write!(f, "more than {limit} redirects"),
        }
    }
}

fn format_detail(detail: &Option<RemoteErrorDetail>) -> String {
    match detail {
        Some(detail) => format!(" (HTTP {}): {}", detail.http_status, detail.explain),
        None => String::new(),
    }
}
