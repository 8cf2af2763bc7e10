use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Quantity;
use crate::core::models::{id_field, json_object};

/// Conventional transaction types for apps moving Quarters.
///
/// Attach one to a payload with [`TransferParams::tx_type`] or [`RequestTransferParams::tx_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    /// Purchase Quarters with money.
    Buy,
    /// Win Quarters in an app.
    Win,
    /// Spend Quarters in an app.
    Spend,
    /// Refund Quarters to the wallet.
    Refund,
    /// Return Quarters for money.
    Return,
    /// Earn Quarters as a reward.
    Bonus,
    /// Get Quarters from redeeming a coupon.
    Coupon,
}

impl TxType {
    /// The wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Win => "win",
            Self::Spend => "spend",
            Self::Refund => "refund",
            Self::Return => "return",
            Self::Bonus => "bonus",
            Self::Coupon => "coupon",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TxType> for Value {
    fn from(t: TxType) -> Self {
        Self::String(t.as_str().to_string())
    }
}

const TX_TYPE_FIELD: &str = "txType";

/// Arguments for [`transfer_quarters`](crate::QuartersClient::transfer_quarters): Quarters
/// pushed from the app's account to a user or an address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferParams {
    pub(crate) amount: Option<Quantity>,
    pub(crate) user: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) extra: Map<String, Value>,
}

impl TransferParams {
    /// Empty parameters; set at least `amount` and one of `user`/`address`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount to transfer. Strings are coerced to an integer before sending.
    #[must_use]
    pub fn amount(mut self, amount: impl Into<Quantity>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Recipient user id.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Recipient account address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn tx_type(self, tx_type: TxType) -> Self {
        self.field(TX_TYPE_FIELD, tx_type)
    }

    /// Adds an extra body field. `address`, `user` and `amount` cannot be overridden this way.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Arguments for [`request_transfer`](crate::QuartersClient::request_transfer): asks a user
/// to send Quarters to the app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestTransferParams {
    pub(crate) tokens: Option<Quantity>,
    pub(crate) user_id: Option<String>,
    pub(crate) extra: Map<String, Value>,
}

impl RequestTransferParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of Quarters requested. Strings are coerced to an integer before sending.
    #[must_use]
    pub fn tokens(mut self, tokens: impl Into<Quantity>) -> Self {
        self.tokens = Some(tokens.into());
        self
    }

    /// The user being asked to pay.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn tx_type(self, tx_type: TxType) -> Self {
        self.field(TX_TYPE_FIELD, tx_type)
    }

    /// Adds an extra body field. `appId`, `userId` and `tokens` cannot be overridden this way.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Arguments for [`approve_transfer`](crate::QuartersClient::approve_transfer).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApprovalParams {
    pub(crate) request_id: Option<String>,
    pub(crate) user_id: Option<String>,
    pub(crate) extra: Map<String, Value>,
}

impl ApprovalParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the transfer request being approved, as returned by `request_transfer`.
    #[must_use]
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The user who owes the Quarters.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Adds an extra body field. `clientId`, `requestId` and `userId` cannot be overridden this way.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

json_object! {
    /// The completed transfer, as described by the platform.
    TransferResult
}

json_object! {
    /// The created transfer request.
    RequestResult
}

impl RequestResult {
    /// Id to pass to [`ApprovalParams::request_id`]. Numeric ids are rendered as strings.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        id_field(&self.raw, "id")
    }
}

json_object! {
    /// Outcome of an auto-approval.
    ApprovalResult
}
