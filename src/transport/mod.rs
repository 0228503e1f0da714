//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod request;
mod response;

pub use request::{REQUEST_FIELD, encode_request_form, endpoint_url, render_request};
pub use response::{Outcome, TransportError, classify_response, decode_response, render_response};
