//! The HTTP seam: a single `send(request) -> response` capability.
//!
//! [`QuartersClient`](crate::QuartersClient) never talks to `reqwest` directly. It builds an
//! [`ApiRequest`], hands it to a [`Transport`], and interprets the [`ApiResponse`]. The default
//! transport is [`ReqwestTransport`]; tests and embedders can supply their own.

use std::fmt;

use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::QuartersError;
use crate::core::conversions::mask_token;

/// A fully-built request, ready to be sent by a [`Transport`].
#[derive(Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, already resolved against the API base.
    pub url: Url,
    /// Request headers. `Accept`, and `Content-Type` when a body is present, are always set.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    pub(crate) fn bearer(mut self, token: &str) -> Result<Self, QuartersError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| QuartersError::validation("token contains invalid header characters"))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub(crate) fn json(mut self, body: serde_json::Value) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(body);
        self
    }

    /// The bearer token carried in the `Authorization` header, if any.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("bearer", &self.bearer_token().map(mask_token))
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// What came back from the platform: status, the final URL, and the raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// URL that produced this response.
    pub url: Url,
    /// Raw response body.
    pub body: String,
}

/// Sends one [`ApiRequest`] and returns the platform's answer.
///
/// Implementations must only fail for transport-level problems (DNS, connect, TLS, timeouts),
/// reported as [`QuartersError::Network`]. Non-2xx responses are returned as ordinary
/// [`ApiResponse`] values; the client turns them into [`QuartersError::Status`].
///
/// The trait is object safe so a client can hold it as `Arc<dyn Transport>`.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends the request. Dropping the returned future cancels the call.
    fn send(&self, req: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, QuartersError>>;
}

/// The default [`Transport`], backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing `reqwest::Client`, keeping its timeouts, proxy and TLS settings.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, req: ApiRequest) -> BoxFuture<'_, Result<ApiResponse, QuartersError>> {
        Box::pin(async move {
            let mut builder = self.http.request(req.method, req.url).headers(req.headers);
            if let Some(body) = &req.body {
                builder = builder.json(body);
            }

            let resp = builder.send().await?;
            let status = resp.status();
            let url = resp.url().clone();
            let body = resp.text().await?;

            Ok(ApiResponse { status, url, body })
        })
    }
}

/// Checks the status and decodes the body of a response.
///
/// An empty 2xx body decodes as `{}` so endpoints that acknowledge without content
/// still produce a value.
pub(crate) fn decode_json<T: DeserializeOwned>(resp: ApiResponse) -> Result<T, QuartersError> {
    if !resp.status.is_success() {
        return Err(QuartersError::Status {
            status: resp.status.as_u16(),
            url: resp.url.to_string(),
            body: resp.body,
        });
    }

    let body = resp.body.trim();
    let body = if body.is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}
