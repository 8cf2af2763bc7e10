use reqwest::Method;

use crate::core::{QuartersClient, QuartersError};
use crate::oauth::{
    model::TokenResponse,
    wire::{Grant, TokenRequest},
};

pub(super) async fn request_token(
    client: &QuartersClient,
    grant: Grant<'_>,
) -> Result<TokenResponse, QuartersError> {
    let config = client.config();
    let body = TokenRequest {
        client_id: config.app_key(),
        client_secret: config.web_secret(),
        grant,
    };

    let req = client
        .request(Method::POST, &["oauth", "token"])?
        .json(serde_json::to_value(&body)?);
    client.execute(req).await
}
