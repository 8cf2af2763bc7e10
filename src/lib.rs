//! quarters-rs: async client for the Quarters platform.
//!
//! Covers the whole public REST surface an app needs:
//!
//! - OAuth token exchange ([`QuartersClient::create_refresh_token`],
//!   [`QuartersClient::create_access_token`])
//! - the current user's profile ([`QuartersClient::fetch_user`])
//! - moving Quarters ([`QuartersClient::transfer_quarters`],
//!   [`QuartersClient::request_transfer`], [`QuartersClient::approve_transfer`])
//!
//! Configuration is validated when the client is built, and per-call arguments are validated
//! before any request is sent. Every operation issues exactly one HTTP request; nothing is
//! retried or cached. Dropping a returned future cancels the request.
//!
//! Enable the `tracing` feature to get spans for each operation and debug events for each
//! request; secrets and tokens are never recorded.

pub mod core;
pub mod oauth;
pub mod transfer;
pub mod user;

pub use crate::core::{
    ApiRequest, ApiResponse, ClientConfig, ConfigField, Quantity, QuartersClient,
    QuartersClientBuilder, QuartersError, ReqwestTransport, Transport,
};
pub use oauth::TokenResponse;
pub use transfer::{
    ApprovalParams, ApprovalResult, RequestResult, RequestTransferParams, TransferParams,
    TransferResult, TxType,
};
pub use user::UserProfile;
