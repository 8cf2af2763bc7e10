//! Public client surface + builder.
//! Defaults live in `constants`; the wire seam lives in `core::net`.

mod constants;

use crate::core::QuartersError;
use crate::core::conversions::mask_token;
use crate::core::error::ConfigField;
use crate::core::net::{self, ApiRequest, ReqwestTransport, Transport};
use constants::{DEFAULT_API_URL, DEFAULT_QUARTERS_URL, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Resolved, immutable client configuration.
///
/// Built once by [`QuartersClientBuilder::build`]. Secrets are masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    app_key: String,
    app_secret: String,
    web_secret: String,
    app_address: String,
    platform_base_url: Url,
    api_base_url: Url,
}

impl ClientConfig {
    /// Public application identifier, sent as `client_id` / `appId` / `clientId`.
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Server-side secret authorizing privileged calls.
    #[must_use]
    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }

    /// Secret used as `client_secret` during OAuth token exchange.
    #[must_use]
    pub fn web_secret(&self) -> &str {
        &self.web_secret
    }

    /// The application's own account address; source of outbound transfers.
    #[must_use]
    pub fn app_address(&self) -> &str {
        &self.app_address
    }

    /// Human-facing platform URL.
    #[must_use]
    pub const fn platform_base_url(&self) -> &Url {
        &self.platform_base_url
    }

    /// REST API root. Always ends with `/`.
    #[must_use]
    pub const fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_key", &self.app_key)
            .field("app_secret", &mask_token(&self.app_secret))
            .field("web_secret", &mask_token(&self.web_secret))
            .field("app_address", &self.app_address)
            .field("platform_base_url", &self.platform_base_url.as_str())
            .field("api_base_url", &self.api_base_url.as_str())
            .finish()
    }
}

/// Client for the Quarters REST API.
///
/// Cheap to clone; clones share configuration and transport. Holds no per-call state, so
/// calls may be issued concurrently from any number of tasks.
///
/// # Example
///
/// ```no_run
/// # use quarters_rs::QuartersClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QuartersClient::builder()
///     .key("app-key")
///     .secret("app-secret")
///     .web_secret("web-secret")
///     .address("0xapp")
///     .build()?;
///
/// let tokens = client.create_refresh_token("authorization-code").await?;
/// println!("refresh token: {:?}", tokens.refresh_token());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QuartersClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for QuartersClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuartersClient")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish()
    }
}

impl QuartersClient {
    /// Create a new builder.
    pub fn builder() -> QuartersClientBuilder {
        QuartersClientBuilder::default()
    }

    /// The resolved configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /* -------- internal helpers used by the API modules -------- */

    /// Resolves path segments under the API root. Each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, QuartersError> {
        // `.` and `..` would be normalized away and silently retarget the request.
        if let Some(seg) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(QuartersError::validation(format!(
                "path segment `{seg}` is not allowed"
            )));
        }
        let mut url = self.config.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<ApiRequest, QuartersError> {
        Ok(ApiRequest::new(method, self.endpoint(segments)?))
    }

    /// Sends one request and decodes the JSON body of a 2xx response.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: ApiRequest,
    ) -> Result<T, QuartersError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(method = %req.method, url = %req.url, "sending request");

        let resp = self.transport.send(req).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status.as_u16(), url = %resp.url, "received response");

        net::decode_json(resp)
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`QuartersClient`].
///
/// `key`, `secret`, `web_secret` and `address` are required; everything else has a default.
#[derive(Default)]
pub struct QuartersClientBuilder {
    key: Option<String>,
    secret: Option<String>,
    web_secret: Option<String>,
    address: Option<String>,
    quarters_url: Option<String>,
    api_url: Option<String>,

    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl QuartersClientBuilder {
    /// Public application key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Application secret, used as the bearer token for transfers and approvals.
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Web secret, used as `client_secret` for OAuth token exchange.
    #[must_use]
    pub fn web_secret(mut self, secret: impl Into<String>) -> Self {
        self.web_secret = Some(secret.into());
        self
    }

    /// The application's own account address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Override the platform URL (default `https://pocketfulofquarters.com`).
    #[must_use]
    pub fn quarters_url(mut self, url: impl Into<String>) -> Self {
        self.quarters_url = Some(url.into());
        self
    }

    /// Override the API root (default `https://api.pocketfulofquarters.com/v1/`).
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a pre-configured `reqwest::Client` (proxy, TLS, pooling).
    /// Timeout and User-Agent settings on this builder are then ignored.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the HTTP stack entirely. Takes precedence over [`Self::http_client`].
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validates the configuration and builds the client. Performs no network access.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::MissingConfig`] naming the first missing field, checked in the
    /// order key, secret, web secret, address. Returns [`QuartersError::Url`] if a URL override
    /// cannot be parsed, and [`QuartersError::Network`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<QuartersClient, QuartersError> {
        let app_key = required(self.key, ConfigField::Key)?;
        let app_secret = required(self.secret, ConfigField::Secret)?;
        let web_secret = required(self.web_secret, ConfigField::WebSecret)?;
        let app_address = required(self.address, ConfigField::Address)?;
        if is_dot_segment(app_address.trim()) {
            return Err(QuartersError::InvalidConfig(format!(
                "{} must not be `{}`",
                ConfigField::Address,
                app_address.trim()
            )));
        }

        let platform_base_url =
            parse_base(self.quarters_url.as_deref().unwrap_or(DEFAULT_QUARTERS_URL))?;
        let mut api_base_url = parse_base(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        if !api_base_url.path().ends_with('/') {
            let path = format!("{}/", api_base_url.path());
            api_base_url.set_path(&path);
        }

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(t), _) => t,
            (None, Some(http)) => Arc::new(ReqwestTransport::new(http)),
            (None, None) => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                Arc::new(ReqwestTransport::new(httpb.build()?))
            }
        };

        Ok(QuartersClient {
            config: Arc::new(ClientConfig {
                app_key,
                app_secret,
                web_secret,
                app_address,
                platform_base_url,
                api_base_url,
            }),
            transport,
        })
    }
}

fn is_dot_segment(s: &str) -> bool {
    s == "." || s == ".."
}

fn required(value: Option<String>, field: ConfigField) -> Result<String, QuartersError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(QuartersError::MissingConfig(field)),
    }
}

fn parse_base(raw: &str) -> Result<Url, QuartersError> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    Ok(url)
}
