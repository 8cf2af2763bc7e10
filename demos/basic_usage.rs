use std::time::Duration;

use quarters_rs::{ApprovalParams, QuartersClient, RequestTransferParams, TransferParams, TxType};

fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build a client from the app's credentials, with a 10-second timeout.
    let client = QuartersClient::builder()
        .key(env("QUARTERS_KEY"))
        .secret(env("QUARTERS_SECRET"))
        .web_secret(env("QUARTERS_WEB_SECRET"))
        .address(env("QUARTERS_ADDRESS"))
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Trade the OAuth code from the redirect for tokens, then look the user up.
    let tokens = client.create_refresh_token(&env("QUARTERS_AUTH_CODE")).await?;
    let access = match tokens.access_token() {
        Some(t) => t.to_string(),
        None => {
            let refresh = tokens.refresh_token().unwrap_or_default();
            client
                .create_access_token(refresh)
                .await?
                .access_token()
                .unwrap_or_default()
                .to_string()
        }
    };
    let user = client.fetch_user(&access).await?;
    let user_id = user.id().unwrap_or_default();
    println!("Signed in as user {user_id}");

    // 3. Pay out a prize.
    let payout = client
        .transfer_quarters(
            &TransferParams::new()
                .amount(5)
                .user(user_id.clone())
                .tx_type(TxType::Win),
        )
        .await?;
    println!("Transfer: {}", serde_json::Value::from(payout));

    // 4. Charge the user and approve the charge.
    let request = client
        .request_transfer(
            &RequestTransferParams::new()
                .tokens("2")
                .user_id(user_id.clone())
                .tx_type(TxType::Spend),
        )
        .await?;
    if let Some(request_id) = request.id() {
        let approval = client
            .approve_transfer(&ApprovalParams::new().request_id(request_id).user_id(user_id))
            .await?;
        println!("Approval: {}", serde_json::Value::from(approval));
    }

    Ok(())
}
