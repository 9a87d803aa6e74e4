// Transport primitive shared by every fetcher.
//
// `Transport` is the seam between the typed fetchers and the network.
// `HttpTransport` is the reqwest-backed implementation used by both
// dashboards; tests and embedders can supply their own.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::request::{Method, Request};

const USER_AGENT: &str = concat!("backoffice/", env!("CARGO_PKG_VERSION"));

/// Executes one `Request` and decodes the body into `T`.
///
/// Implementations perform exactly one round-trip per call: no retries,
/// no caching, no reordering of concurrent calls.
pub trait Transport: Send + Sync {
    fn execute<T: DeserializeOwned + Send>(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<T, Error>> + Send;
}

// ── Error response shape from the dashboard services ─────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

/// Settings for building the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub headers: HeaderMap,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            headers: HeaderMap::new(),
        }
    }
}

impl TransportConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent on every request (e.g. a gateway key).
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(self.headers.clone())
            .build()?;
        Ok(client)
    }
}

// ── HTTP transport ───────────────────────────────────────────────────

/// reqwest-backed `Transport`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: config.build_client()?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages headers and TLS).
    pub fn from_reqwest(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(err) => Error::Status {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
                code: err.code,
            },
            Err(_) => Error::Status {
                status: status.as_u16(),
                message: if raw.is_empty() { status.to_string() } else { raw },
                code: None,
            },
        }
    }
}

impl Transport for HttpTransport {
    async fn execute<T: DeserializeOwned + Send>(&self, request: Request) -> Result<T, Error> {
        let url = request.endpoint()?;
        let params = request.query_pairs();
        debug!(method = %request.method(), %url, ?params, "sending request");

        let builder = match request.method() {
            Method::Get => self.http.get(url),
            Method::Post => {
                let builder = self.http.post(url);
                match request.payload() {
                    Some(payload) => builder.json(payload),
                    None => builder,
                }
            }
        };
        let builder = if params.is_empty() { builder } else { builder.query(params) };

        let resp = builder.send().await?;
        Self::handle_response(resp).await
    }
}
