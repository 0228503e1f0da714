//! Scripted in-memory transport shared by the client tests.

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::{BoxFuture, HttpResponse, HttpTransport, SendsayClient};
use crate::domain::Credentials;
use crate::transport::REQUEST_FIELD;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Decoded JSON of the `request` form field.
    pub fn payload(&self) -> Map<String, Value> {
        let json = self
            .params
            .iter()
            .find(|(key, _)| key == REQUEST_FIELD)
            .map(|(_, value)| value.as_str())
            .expect("request field");
        serde_json::from_str(json).expect("request field holds a JSON object")
    }
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<(u16, String)>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    /// Answer every request with the same response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body: String = body.into();
        Self::scripted(vec![(status, body)])
    }

    /// Successful generic answer.
    pub fn ok() -> Self {
        Self::new(200, r#"{"request.id": "test"}"#)
    }

    /// Answer requests in order; the last response repeats. An empty script fails every call.
    pub fn scripted<S: Into<String>>(responses: Vec<(u16, S)>) -> Self {
        let responses = responses
            .into_iter()
            .map(|(status, body)| (status, body.into()))
            .collect();
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                responses,
            })),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_payload(&self) -> Map<String, Value> {
        self.requests()
            .last()
            .expect("at least one request")
            .payload()
    }
}

impl HttpTransport for FakeTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let next = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest {
                    url: url.to_owned(),
                    params,
                });
                if state.responses.len() > 1 {
                    state.responses.pop_front()
                } else {
                    state.responses.front().cloned()
                }
            };
            match next {
                Some((status, body)) => Ok(HttpResponse { status, body }),
                None => Err("connection refused".into()),
            }
        })
    }
}

fn credentials() -> Credentials {
    Credentials::new("acme", "ops", "secret").unwrap()
}

pub(crate) fn fake_client(transport: &FakeTransport) -> SendsayClient {
    SendsayClient {
        credentials: credentials(),
        endpoint: "https://example.invalid/".to_owned(),
        verbose: false,
        max_redirects: super::DEFAULT_MAX_REDIRECTS,
        http: Arc::new(transport.clone()),
    }
}

pub(crate) fn fake_verbose_client(transport: &FakeTransport) -> SendsayClient {
    SendsayClient {
        verbose: true,
        ..fake_client(transport)
    }
}
