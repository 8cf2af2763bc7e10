use std::fmt;

use thiserror::Error;

/// A required piece of client configuration.
///
/// Variants are listed in the order the builder checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    /// The public application key (`key`).
    Key,
    /// The application secret (`secret`).
    Secret,
    /// The web secret used for OAuth token exchange (`webSecret`).
    WebSecret,
    /// The application's own account address (`address`).
    Address,
}

impl ConfigField {
    /// Human-readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Key => "App key",
            Self::Secret => "App secret",
            Self::WebSecret => "App web secret",
            Self::Address => "App address",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum QuartersError {
    /// A required configuration value was missing or empty when building the client.
    #[error("{0} is required")]
    MissingConfig(ConfigField),

    /// A configuration value was present but unusable.
    #[error("{0}")]
    InvalidConfig(String),

    /// A base URL override could not be parsed, or an endpoint path could not be joined onto it.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A per-call argument was missing or malformed. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// The platform answered with a non-2xx status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body.
        body: String,
    },

    /// The request could not be completed (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A successful response body was not the JSON object we expected.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for QuartersError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(Box::new(e))
    }
}

impl QuartersError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn required(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }

    /// The HTTP status code, if the platform responded with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parses the error response body as JSON, if this is a status error with a JSON body.
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// `true` for errors raised while building the client.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingConfig(_) | Self::InvalidConfig(_) | Self::Url(_)
        )
    }

    /// `true` for per-call argument errors raised before any I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// `true` if the underlying transport gave up because a timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Network(e) => e
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }
}
