use std::time::Duration;

use httpmock::Method::GET;
use quarters_rs::QuartersError;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn slow_response_past_timeout_is_a_network_timeout() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/me");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(json!({"id": 1}));
    });

    let client = common::builder()
        .api_url(format!("{}/v1/", server.base_url()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.fetch_user("token").await.unwrap_err();

    assert!(matches!(err, QuartersError::Network(_)), "got {err:?}");
    assert!(err.is_timeout(), "got {err:?}");
}

#[tokio::test]
async fn fast_response_within_timeout_succeeds() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/me");
        then.status(200).json_body(json!({"id": 1}));
    });

    let client = common::builder()
        .api_url(format!("{}/v1/", server.base_url()))
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let user = client.fetch_user("token").await.unwrap();

    mock.assert();
    assert_eq!(user.id().as_deref(), Some("1"));
}

#[tokio::test]
async fn user_agent_override_is_sent() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/me")
            .header("user-agent", "my-arcade/2.1");
        then.status(200).json_body(json!({}));
    });

    let client = common::builder()
        .api_url(format!("{}/v1/", server.base_url()))
        .user_agent("my-arcade/2.1")
        .build()
        .unwrap();

    client.fetch_user("token").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn default_user_agent_names_the_crate() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/me")
            .header("user-agent", concat!("quarters-rs/", env!("CARGO_PKG_VERSION")));
        then.status(200).json_body(json!({}));
    });

    common::client_for(&server).fetch_user("token").await.unwrap();

    mock.assert();
}
