//! OAuth2 token exchange against the `oauth/token` endpoint.

mod api;
mod model;
mod wire;

pub use model::TokenResponse;

use crate::core::{QuartersClient, QuartersError};
use wire::Grant;

impl QuartersClient {
    /// Exchanges an OAuth authorization code for a refresh token (and usually an access token).
    ///
    /// Sends the app key as `client_id` and the web secret as `client_secret`.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::Status`] if the platform rejects the code (for example an
    /// expired or already-used code), or [`QuartersError::Network`] if the call fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn create_refresh_token(&self, code: &str) -> Result<TokenResponse, QuartersError> {
        api::request_token(self, Grant::AuthorizationCode { code }).await
    }

    /// Exchanges a refresh token for a fresh access token.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_refresh_token`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn create_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, QuartersError> {
        api::request_token(self, Grant::RefreshToken { refresh_token }).await
    }
}
