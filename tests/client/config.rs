use quarters_rs::{ConfigField, QuartersClient, QuartersError};

use crate::common::{self, ADDRESS, KEY, SECRET, WEB_SECRET};

fn missing_field(err: QuartersError) -> ConfigField {
    match err {
        QuartersError::MissingConfig(field) => field,
        other => panic!("expected MissingConfig, got {other:?}"),
    }
}

#[test]
fn missing_fields_are_reported_in_fixed_order() {
    let err = QuartersClient::builder().build().unwrap_err();
    assert_eq!(missing_field(err), ConfigField::Key);

    let err = QuartersClient::builder().key(KEY).build().unwrap_err();
    assert_eq!(missing_field(err), ConfigField::Secret);

    let err = QuartersClient::builder()
        .key(KEY)
        .secret(SECRET)
        .build()
        .unwrap_err();
    assert_eq!(missing_field(err), ConfigField::WebSecret);

    let err = QuartersClient::builder()
        .key(KEY)
        .secret(SECRET)
        .web_secret(WEB_SECRET)
        .build()
        .unwrap_err();
    assert_eq!(missing_field(err), ConfigField::Address);
}

#[test]
fn only_the_first_missing_field_is_named() {
    // secret and address both missing: secret comes first
    let err = QuartersClient::builder()
        .key(KEY)
        .web_secret(WEB_SECRET)
        .build()
        .unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.to_string(), "App secret is required");
}

#[test]
fn empty_and_blank_values_count_as_missing() {
    let err = common::builder().key("").build().unwrap_err();
    assert_eq!(err.to_string(), "App key is required");

    let err = common::builder().web_secret("   ").build().unwrap_err();
    assert_eq!(err.to_string(), "App web secret is required");

    let err = common::builder().address("").build().unwrap_err();
    assert_eq!(err.to_string(), "App address is required");
}

#[test]
fn defaults_apply_when_urls_are_omitted() {
    let client = common::builder().build().unwrap();
    let cfg = client.config();

    assert_eq!(cfg.app_key(), KEY);
    assert_eq!(cfg.app_secret(), SECRET);
    assert_eq!(cfg.web_secret(), WEB_SECRET);
    assert_eq!(cfg.app_address(), ADDRESS);
    assert_eq!(cfg.api_base_url().as_str(), "https://api.pocketfulofquarters.com/v1/");
    assert_eq!(cfg.platform_base_url().as_str(), "https://pocketfulofquarters.com/");
}

#[test]
fn overrides_replace_defaults() {
    let client = common::builder()
        .quarters_url("https://staging.example.com/")
        .api_url("https://api.staging.example.com/")
        .build()
        .unwrap();
    let cfg = client.config();

    assert_eq!(cfg.platform_base_url().as_str(), "https://staging.example.com/");
    assert_eq!(cfg.api_base_url().as_str(), "https://api.staging.example.com/");
}

#[test]
fn api_url_without_trailing_slash_keeps_its_last_segment() {
    let client = common::builder()
        .api_url("https://api.staging.example.com/v2")
        .build()
        .unwrap();

    assert_eq!(client.config().api_base_url().as_str(), "https://api.staging.example.com/v2/");
}

#[test]
fn invalid_url_override_fails_construction() {
    let err = common::builder().api_url("not a url").build().unwrap_err();
    assert!(matches!(err, QuartersError::Url(_)), "got {err:?}");

    let err = common::builder().quarters_url("mailto:ops@example.com").build().unwrap_err();
    assert!(matches!(err, QuartersError::Url(_)), "got {err:?}");
}

#[test]
fn debug_output_masks_secrets() {
    let client = common::builder().build().unwrap();
    let dbg = format!("{client:?}");

    assert!(!dbg.contains(SECRET), "{dbg}");
    assert!(!dbg.contains(WEB_SECRET), "{dbg}");
    assert!(dbg.contains("app-se...6789"), "{dbg}");
    assert!(dbg.contains(KEY));
}
