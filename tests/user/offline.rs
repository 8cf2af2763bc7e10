use httpmock::Method::GET;
use quarters_rs::QuartersError;
use serde_json::json;

use crate::common::{self, RecordingTransport};

#[tokio::test]
async fn fetch_user_sends_bearer_access_token() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/me")
            .header("authorization", "Bearer user-access-token");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"id": 42, "displayName": "ada", "email": "ada@example.com"}));
    });

    let client = common::client_for(&server);
    let user = client.fetch_user("user-access-token").await.unwrap();

    mock.assert();
    assert_eq!(user.id().as_deref(), Some("42"));
    assert_eq!(user.get("displayName"), Some(&json!("ada")));
}

#[tokio::test]
async fn expired_token_maps_to_status_401() {
    let transport = RecordingTransport::new(401, r#"{"message":"Unauthorized"}"#);
    let client = common::client_with(&transport);

    let err = client.fetch_user("expired").await.unwrap_err();

    assert_eq!(transport.calls(), 1);
    match err {
        QuartersError::Status { status, body, .. } => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"message":"Unauthorized"}"#);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn request_is_a_bodyless_get_to_me() {
    let transport = RecordingTransport::ok();
    let client = common::client_with(&transport);

    client.fetch_user("tok").await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, reqwest::Method::GET);
    assert_eq!(reqs[0].url.as_str(), "https://api.pocketfulofquarters.com/v1/me");
    assert_eq!(reqs[0].bearer_token(), Some("tok"));
    assert!(reqs[0].body.is_none());
}

#[tokio::test]
async fn token_with_newline_is_rejected_before_sending() {
    let transport = RecordingTransport::ok();
    let client = common::client_with(&transport);

    let err = client.fetch_user("bad\ntoken").await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(transport.calls(), 0);
}
