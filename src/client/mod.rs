//! Client layer: credential injection, the HTTP exchange, response classification and the
//! redirect loop, plus one async method per remote action.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiResult, Credentials, Payload, RemoteErrorEntry};
use crate::transport::{self, Outcome, TransportError};

mod anketa;
mod authext;
mod error;
mod format;
mod group;
mod issue;
mod member;
mod sequence;
mod stat;
mod storage;
mod system;
mod user;

#[cfg(test)]
mod fake;

pub use error::{BadResponseReason, RemoteErrorDetail, SendsayError};
pub use member::{DataKeys, MemberDataModel, QuestionnaireAnswers};

const DEFAULT_ENDPOINT: &str = "https://api.sendsay.ru/";

/// Redirect hops followed by one `execute` call before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SendsayClient`].
///
/// Use this when you need verbose diagnostics, a different endpoint, a redirect limit,
/// a timeout, or a custom user-agent.
pub struct SendsayClientBuilder {
    credentials: Credentials,
    endpoint: String,
    verbose: bool,
    max_redirects: usize,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendsayClientBuilder {
    /// Create a builder with the default endpoint, quiet errors and no timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            verbose: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API root (`https://api.sendsay.ru/`). Redirect paths resolve against it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Log payloads and raw bodies, and attach explanations and the HTTP status to
    /// [`SendsayError::Remote`].
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Limit the number of `REDIRECT` hops a single call follows.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set an HTTP client timeout applied to each exchange.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendsayClient`].
    pub fn build(self) -> Result<SendsayClient, SendsayError> {
        transport::endpoint_url(&self.endpoint, "")?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(SendsayError::HttpClient)?;

        Ok(SendsayClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            verbose: self.verbose,
            max_redirects: self.max_redirects,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Sendsay client.
///
/// Every action method builds a [`Payload`] and hands it to [`SendsayClient::execute`],
/// which posts it to `https://api.sendsay.ru/?apiversion=100&json=1` and follows any
/// `REDIRECT` the service answers with. The client holds no mutable state and can be
/// cloned and shared across tasks.
pub struct SendsayClient {
    credentials: Credentials,
    endpoint: String,
    verbose: bool,
    max_redirects: usize,
    http: Arc<dyn HttpTransport>,
}

impl SendsayClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`SendsayClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            verbose: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SendsayClientBuilder {
        SendsayClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Send one payload and return the decoded result.
    ///
    /// Credentials are merged in unless the payload is anonymous. The response is
    /// classified in this order:
    /// - no response (status `0`), a non-2xx status without an `errors` envelope, or an
    ///   undecodable body: [`SendsayError::BadResponse`],
    /// - an `errors` envelope: [`SendsayError::Remote`],
    /// - a `REDIRECT`: the same payload is resubmitted to the returned path, up to the
    ///   configured limit ([`SendsayError::BadResponse`] once exceeded),
    /// - anything else is returned verbatim.
    pub async fn execute(&self, payload: Payload) -> Result<ApiResult, SendsayError> {
        let wire = payload.to_wire(&self.credentials);
        let params = transport::encode_request_form(&wire).map_err(SendsayError::Encode)?;
        if self.verbose {
            tracing::info!(
                target: "sendsay::wire",
                action = payload.action(),
                "request:\n{}",
                transport::render_request(&wire)
            );
        }

        let mut path = String::new();
        let mut redirects = 0;
        loop {
            let url = transport::endpoint_url(&self.endpoint, &path)?;
            tracing::debug!(
                action = payload.action(),
                authenticated = payload.is_authenticated(),
                url = %url,
                "sending request"
            );

            let response = match self.http.post_form(url.as_str(), params.clone()).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!(action = payload.action(), error = %err, "no response");
                    return Err(SendsayError::BadResponse {
                        status: 0,
                        body: String::new(),
                        reason: BadResponseReason::Network(err.to_string()),
                    });
                }
            };

            if self.verbose {
                tracing::info!(
                    target: "sendsay::wire",
                    action = payload.action(),
                    status = response.status,
                    "response:\n{}",
                    transport::render_response(&response.body)
                );
            }

            match self.classify(response) {
                Ok(Step::Done(result)) => return Ok(result),
                Ok(Step::Redirect { to, status, body }) => {
                    if redirects >= self.max_redirects {
                        tracing::warn!(
                            action = payload.action(),
                            limit = self.max_redirects,
                            "redirect limit exceeded"
                        );
                        return Err(SendsayError::BadResponse {
                            status,
                            body,
                            reason: BadResponseReason::TooManyRedirects {
                                limit: self.max_redirects,
                            },
                        });
                    }
                    redirects += 1;
                    tracing::debug!(
                        action = payload.action(),
                        to = %to,
                        hop = redirects,
                        "following redirect"
                    );
                    path = to;
                }
                Err(err) => {
                    tracing::warn!(action = payload.action(), error = %err, "request failed");
                    return Err(err);
                }
            }
        }
    }

    fn classify(&self, response: HttpResponse) -> Result<Step, SendsayError> {
        let HttpResponse { status, body } = response;
        let success = (200..=299).contains(&status);

        let outcome = transport::decode_response(&body).and_then(transport::classify_response);
        match outcome {
            Ok(Outcome::Failed(entries)) => Err(self.remote_error(&entries, status)),
            _ if !success => Err(SendsayError::BadResponse {
                status,
                body,
                reason: BadResponseReason::HttpStatus,
            }),
            Ok(Outcome::Redirect(to)) => Ok(Step::Redirect { to, status, body }),
            Ok(Outcome::Done(result)) => Ok(Step::Done(result)),
            Err(err) => Err(bad_body(status, body, &err)),
        }
    }

    fn remote_error(&self, entries: &[RemoteErrorEntry], status: u16) -> SendsayError {
        let ids = entries
            .iter()
            .map(|entry| entry.id.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let detail = self.verbose.then(|| RemoteErrorDetail {
            explain: entries
                .iter()
                .map(RemoteErrorEntry::explain_text)
                .collect::<Vec<_>>()
                .join(";"),
            http_status: status,
        });
        SendsayError::Remote { ids, detail }
    }
}

enum Step {
    Done(ApiResult),
    Redirect {
        to: String,
        status: u16,
        body: String,
    },
}

fn bad_body(status: u16, body: String, err: &TransportError) -> SendsayError {
    SendsayError::BadResponse {
        status,
        body,
        reason: BadResponseReason::Undecodable(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::fake::{FakeTransport, fake_client, fake_verbose_client};
    use super::*;

    #[tokio::test]
    async fn execute_merges_credentials_and_posts_to_root() {
        let transport = FakeTransport::new(200, r#"{"list": []}"#);
        let client = fake_client(&transport);

        let result = client
            .execute(Payload::builder("group.list").build())
            .await
            .unwrap();
        assert_eq!(result.get("list"), Some(&json!([])));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://example.invalid/?apiversion=100&json=1"
        );
        assert_eq!(requests[0].params.len(), 1);
        assert_eq!(requests[0].params[0].0, "request");

        let payload = requests[0].payload();
        assert_eq!(payload["action"], json!("group.list"));
        assert_eq!(
            payload["one_time_auth"],
            json!({"login": "acme", "sublogin": "ops", "passwd": "secret"})
        );
    }

    #[tokio::test]
    async fn execute_anonymous_payload_sends_no_credentials() {
        let transport = FakeTransport::new(200, r#"{"pong": 1}"#);
        let client = fake_client(&transport);

        client
            .execute(Payload::anonymous("ping").build())
            .await
            .unwrap();

        let payload = transport.last_payload();
        assert_eq!(payload, json!({"action": "ping"}).as_object().cloned().unwrap());
    }

    #[tokio::test]
    async fn execute_follows_redirect_with_same_payload() {
        let transport = FakeTransport::scripted(vec![
            (200, r#"{"REDIRECT": "a"}"#),
            (200, r#"{"done": true}"#),
        ]);
        let client = fake_client(&transport);

        let result = client
            .execute(Payload::builder("member.get").field("email", "x@example.com").build())
            .await
            .unwrap();
        assert_eq!(result.get("done"), Some(&json!(true)));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[1].url,
            "https://example.invalid/a?apiversion=100&json=1"
        );
        assert_eq!(requests[0].params, requests[1].params);
    }

    #[tokio::test]
    async fn execute_follows_multiple_redirect_hops() {
        let transport = FakeTransport::scripted(vec![
            (200, r#"{"REDIRECT": "/first"}"#),
            (200, r#"{"REDIRECT": "/second"}"#),
            (200, r#"{"ok": 1}"#),
        ]);
        let client = fake_client(&transport);

        client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap();

        let urls = transport
            .requests()
            .into_iter()
            .map(|request| request.url)
            .collect::<Vec<_>>();
        assert_eq!(
            urls,
            vec![
                "https://example.invalid/?apiversion=100&json=1",
                "https://example.invalid/first?apiversion=100&json=1",
                "https://example.invalid/second?apiversion=100&json=1",
            ]
        );
    }

    #[tokio::test]
    async fn execute_keeps_endpoint_host_on_absolute_redirect() {
        let transport = FakeTransport::scripted(vec![
            (200, r#"{"REDIRECT": "https://evil.example/steal"}"#),
            (200, r#"{"REDIRECT": "//evil.example/steal"}"#),
            (200, r#"{"ok": 1}"#),
        ]);
        let client = fake_client(&transport);

        client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        for request in &requests {
            let url = url::Url::parse(&request.url).unwrap();
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.host_str(), Some("example.invalid"));
            assert_eq!(request.params, requests[0].params);
        }
    }

    #[tokio::test]
    async fn execute_caps_redirect_loops() {
        let transport = FakeTransport::new(200, r#"{"REDIRECT": "loop"}"#);
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SendsayError::BadResponse {
                reason: BadResponseReason::TooManyRedirects {
                    limit: DEFAULT_MAX_REDIRECTS
                },
                ..
            }
        ));
        assert_eq!(transport.requests().len(), DEFAULT_MAX_REDIRECTS + 1);
    }

    #[tokio::test]
    async fn execute_maps_errors_envelope_tersely_by_default() {
        let body = r#"{"errors": [{"id": "error/auth/failed", "explain": "wrong password"},
                                  {"id": "error/other", "explain": "second"}]}"#;
        let transport = FakeTransport::new(200, body);
        let client = fake_client(&transport);

        for _ in 0..2 {
            let err = client
                .execute(Payload::builder("pong").build())
                .await
                .unwrap_err();
            match err {
                SendsayError::Remote { ids, detail } => {
                    assert_eq!(ids, "error/auth/failed;error/other");
                    assert_eq!(detail, None);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn execute_adds_detail_in_verbose_mode() {
        let body = r#"{"errors": [{"id": "error/auth/failed", "explain": "wrong password"},
                                  {"id": "error/other", "explain": "second"}]}"#;
        let transport = FakeTransport::new(200, body);
        let client = fake_verbose_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        match err {
            SendsayError::Remote { ids, detail } => {
                assert_eq!(ids, "error/auth/failed;error/other");
                assert_eq!(
                    detail,
                    Some(RemoteErrorDetail {
                        explain: "wrong password;second".to_owned(),
                        http_status: 200,
                    })
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_prefers_errors_over_redirect() {
        let transport =
            FakeTransport::new(200, r#"{"REDIRECT": "a", "errors": [{"id": "error/x"}]}"#);
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        assert!(matches!(err, SendsayError::Remote { ref ids, .. } if ids == "error/x"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn execute_maps_errors_envelope_on_non_success_status() {
        let transport = FakeTransport::new(403, r#"{"errors": [{"id": "error/forbidden"}]}"#);
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        assert_eq!(err.error_ids(), vec!["error/forbidden"]);
    }

    #[tokio::test]
    async fn execute_maps_non_success_status_to_bad_response() {
        let transport = FakeTransport::new(502, "gateway down");
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        match err {
            SendsayError::BadResponse {
                status,
                body,
                reason,
            } => {
                assert_eq!(status, 502);
                assert_eq!(body, "gateway down");
                assert_eq!(reason, BadResponseReason::HttpStatus);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_maps_invalid_json_to_bad_response() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SendsayError::BadResponse {
                status: 200,
                reason: BadResponseReason::Undecodable(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn execute_maps_empty_object_to_bad_response() {
        let transport = FakeTransport::new(200, "{}");
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SendsayError::BadResponse {
                reason: BadResponseReason::Undecodable(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn execute_maps_network_failure_to_bad_response() {
        let transport = FakeTransport::scripted(Vec::<(u16, &str)>::new());
        let client = fake_client(&transport);

        let err = client
            .execute(Payload::builder("pong").build())
            .await
            .unwrap_err();
        match err {
            SendsayError::BadResponse {
                status,
                body,
                reason,
            } => {
                assert_eq!(status, 0);
                assert_eq!(body, "");
                assert_eq!(
                    reason,
                    BadResponseReason::Network("connection refused".to_owned())
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn verbose_mode_does_not_change_success_results() {
        let body = r#"{"list": [{"id": "g1"}]}"#;
        let quiet = FakeTransport::new(200, body);
        let loud = FakeTransport::new(200, body);

        let a = fake_client(&quiet)
            .execute(Payload::builder("group.list").build())
            .await
            .unwrap();
        let b = fake_verbose_client(&loud)
            .execute(Payload::builder("group.list").build())
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(quiet.requests()[0].params, loud.requests()[0].params);
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let credentials = Credentials::new("acme", "ops", "secret").unwrap();
        let err = SendsayClient::builder(credentials)
            .endpoint("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SendsayError::InvalidEndpoint(_)));
    }

    #[test]
    fn builder_settings_are_applied() {
        let credentials = Credentials::new("acme", "ops", "secret").unwrap();
        let client = SendsayClient::builder(credentials)
            .endpoint("https://example.invalid/api/")
            .verbose(true)
            .max_redirects(2)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/api/");
        assert!(client.is_verbose());
        assert_eq!(client.max_redirects, 2);
        assert_eq!(client.credentials().login().as_str(), "acme");
    }
}
