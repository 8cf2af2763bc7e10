use httpmock::Method::POST;
use quarters_rs::{ApprovalParams, RequestTransferParams, TransferParams};
use serde_json::json;

use crate::common::{self, ADDRESS, KEY, SECRET};

#[tokio::test]
async fn transfer_posts_to_app_account_with_app_secret() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1/accounts/{ADDRESS}/transfer"))
            .header("authorization", format!("Bearer {SECRET}"))
            .header("content-type", "application/json")
            .json_body(json!({"address": "abc", "amount": 5}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"txId": "0xdeadbeef", "amount": 5}));
    });

    let client = common::client_for(&server);
    let result = client
        .transfer_quarters(&TransferParams::new().amount(5).address("abc"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result.get("txId"), Some(&json!("0xdeadbeef")));
}

#[tokio::test]
async fn transfer_to_user_coerces_string_amount() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1/accounts/{ADDRESS}/transfer"))
            .json_body(json!({"user": "u1", "amount": 12}));
        then.status(200).json_body(json!({}));
    });

    let client = common::client_for(&server);
    client
        .transfer_quarters(&TransferParams::new().amount("12").user("u1"))
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn request_transfer_posts_app_id_and_coerced_tokens() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/requests")
            .json_body(json!({"appId": KEY, "userId": "u1", "tokens": 10}));
        then.status(200).json_body(json!({"id": "req-1", "tokens": 10}));
    });

    let client = common::client_for(&server);
    let result = client
        .request_transfer(&RequestTransferParams::new().tokens("10").user_id("u1"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result.id().as_deref(), Some("req-1"));
}

#[tokio::test]
async fn approve_transfer_posts_to_auto_approve() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/requests/r1/autoApprove")
            .header("authorization", format!("Bearer {SECRET}"))
            .json_body(json!({"clientId": KEY, "requestId": "r1", "userId": "u1"}));
        then.status(200).json_body(json!({"status": "approved"}));
    });

    let client = common::client_for(&server);
    let result = client
        .approve_transfer(&ApprovalParams::new().request_id("r1").user_id("u1"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result.get("status"), Some(&json!("approved")));
}

#[tokio::test]
async fn clones_issue_independent_concurrent_calls() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/requests");
        then.status(200).json_body(json!({"id": 1}));
    });

    let client = common::client_for(&server);
    let calls = (1..=4).map(|n| {
        let client = client.clone();
        async move {
            client
                .request_transfer(&RequestTransferParams::new().tokens(n).user_id("u1"))
                .await
        }
    });
    let results = futures::future::join_all(calls).await;

    mock.assert_calls(4);
    for r in results {
        assert_eq!(r.unwrap().id().as_deref(), Some("1"));
    }
}
