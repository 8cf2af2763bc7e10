//! Moving Quarters: app-to-user transfers, and user-to-app requests with auto-approval.

mod api;
mod model;

pub use model::{
    ApprovalParams, ApprovalResult, RequestResult, RequestTransferParams, TransferParams,
    TransferResult, TxType,
};

use reqwest::Method;

use crate::core::{QuartersClient, QuartersError};

impl QuartersClient {
    /// Sends Quarters from the app's own account to a user or an address.
    ///
    /// Authorized with the app secret, not a user token.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::Validation`] before any request is sent if `amount` is missing,
    /// zero or not an integer, or if neither `user` nor `address` is set. Returns
    /// [`QuartersError::Status`] when the platform rejects the transfer (insufficient balance,
    /// unknown recipient).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn transfer_quarters(
        &self,
        params: &TransferParams,
    ) -> Result<TransferResult, QuartersError> {
        let body = api::transfer_body(params)?;
        let config = self.config();
        let req = self
            .request(Method::POST, &["accounts", config.app_address(), "transfer"])?
            .bearer(config.app_secret())?
            .json(body);
        self.execute(req).await
    }

    /// Asks a user to send Quarters to the app. The returned id feeds [`Self::approve_transfer`].
    ///
    /// Sent without an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::Validation`] before any request is sent if `tokens` is missing,
    /// zero or not an integer.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn request_transfer(
        &self,
        params: &RequestTransferParams,
    ) -> Result<RequestResult, QuartersError> {
        let body = api::request_body(self.config().app_key(), params)?;
        let req = self.request(Method::POST, &["requests"])?.json(body);
        self.execute(req).await
    }

    /// Auto-approves a pending transfer request on behalf of the app.
    ///
    /// # Errors
    ///
    /// Returns [`QuartersError::Validation`] naming `requestId` or `userId` if either is missing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn approve_transfer(
        &self,
        params: &ApprovalParams,
    ) -> Result<ApprovalResult, QuartersError> {
        let config = self.config();
        let (request_id, body) = api::approval_body(config.app_key(), params)?;
        let req = self
            .request(Method::POST, &["requests", request_id, "autoApprove"])?
            .bearer(config.app_secret())?
            .json(body);
        self.execute(req).await
    }
}
