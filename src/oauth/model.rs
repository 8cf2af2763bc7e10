use crate::core::models::json_object;

json_object! {
    /// Body of a successful `oauth/token` response, kept verbatim.
    TokenResponse
}

impl TokenResponse {
    /// The short-lived access token, used with [`fetch_user`](crate::QuartersClient::fetch_user).
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.raw.get("access_token")?.as_str()
    }

    /// The long-lived refresh token, if the grant issued one.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.raw.get("refresh_token")?.as_str()
    }

    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.raw.get("token_type")?.as_str()
    }

    /// Access token lifetime in seconds.
    #[must_use]
    pub fn expires_in(&self) -> Option<u64> {
        match self.raw.get("expires_in")? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
