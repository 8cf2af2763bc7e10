use serde_json::{Map, Value};

use crate::core::{QuartersError, Quantity};
use crate::transfer::model::{ApprovalParams, RequestTransferParams, TransferParams};

/// An optional string argument, with empty strings treated as absent.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

fn required_quantity(value: Option<&Quantity>, field: &str) -> Result<i64, QuartersError> {
    value
        .ok_or_else(|| QuartersError::required(field))?
        .to_int(field)
}

/// Caller extras first; canonical fields are written last so they always win.
fn merge(extra: &Map<String, Value>, canonical: Vec<(&str, Option<Value>)>) -> Value {
    let mut body = extra.clone();
    for (key, value) in canonical {
        body.remove(key);
        if let Some(v) = value {
            body.insert(key.to_string(), v);
        }
    }
    Value::Object(body)
}

pub(super) fn transfer_body(params: &TransferParams) -> Result<Value, QuartersError> {
    let amount = required_quantity(params.amount.as_ref(), "amount")?;
    let user = present(params.user.as_ref());
    let address = present(params.address.as_ref());
    if user.is_none() && address.is_none() {
        return Err(QuartersError::validation("user or address is required"));
    }

    Ok(merge(
        &params.extra,
        vec![
            ("address", address.map(Value::from)),
            ("user", user.map(Value::from)),
            ("amount", Some(Value::from(amount))),
        ],
    ))
}

pub(super) fn request_body(
    app_key: &str,
    params: &RequestTransferParams,
) -> Result<Value, QuartersError> {
    let tokens = required_quantity(params.tokens.as_ref(), "tokens")?;

    Ok(merge(
        &params.extra,
        vec![
            ("appId", Some(Value::from(app_key))),
            ("userId", present(params.user_id.as_ref()).map(Value::from)),
            ("tokens", Some(Value::from(tokens))),
        ],
    ))
}

/// Returns the request id (for the URL) and the body.
pub(super) fn approval_body<'a>(
    app_key: &str,
    params: &'a ApprovalParams,
) -> Result<(&'a str, Value), QuartersError> {
    let request_id =
        present(params.request_id.as_ref()).ok_or_else(|| QuartersError::required("requestId"))?;
    let user_id =
        present(params.user_id.as_ref()).ok_or_else(|| QuartersError::required("userId"))?;

    let body = merge(
        &params.extra,
        vec![
            ("clientId", Some(Value::from(app_key))),
            ("requestId", Some(Value::from(request_id))),
            ("userId", Some(Value::from(user_id))),
        ],
    );
    Ok((request_id, body))
}
