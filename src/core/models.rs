//! Shared plumbing for response bodies.
//!
//! The platform's responses are returned verbatim: every response type wraps the decoded JSON
//! object and adds typed accessors for the fields callers usually need.

use serde_json::{Map, Value};

macro_rules! json_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            raw: serde_json::Map<String, serde_json::Value>,
        }

        impl $name {
            /// Looks up a raw field of the response body.
            #[must_use]
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.raw.get(key)
            }

            /// The whole response body.
            #[must_use]
            pub const fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
                &self.raw
            }

            /// Consumes the wrapper and returns the response body.
            #[must_use]
            pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
                self.raw
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(v: $name) -> Self {
                serde_json::Value::Object(v.raw)
            }
        }
    };
}

pub(crate) use json_object;

/// A string field, or a numeric one rendered as a string (ids come back as either).
pub(crate) fn id_field(raw: &Map<String, Value>, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
