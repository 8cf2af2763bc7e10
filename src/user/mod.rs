//! The "current user" endpoint.

mod model;

pub use model::UserProfile;

use reqwest::Method;

use crate::core::{QuartersClient, QuartersError};

impl QuartersClient {
    /// Fetches the profile of the user owning `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::Status`] with status 401 for an expired or invalid token, or
    /// for any other non-2xx answer. Returns [`QuartersError::Validation`] if the token cannot
    /// be carried in a header.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn fetch_user(&self, access_token: &str) -> Result<UserProfile, QuartersError> {
        let req = self.request(Method::GET, &["me"])?.bearer(access_token)?;
        self.execute(req).await
    }
}
