//! Response body normalization.
//!
//! # Responsibilities
//! - Strip the `{code, data, ...}` wrapper some backends put around payloads
//! - Pull a human-readable message out of error bodies
//!
//! # Design Decisions
//! - An object is only treated as an envelope when every key belongs to the
//!   envelope vocabulary, so a bare record that happens to have a `data`
//!   column is returned untouched
//! - Empty bodies become `null`; non-JSON bodies become a JSON string

use serde_json::{Map, Value};

const ENVELOPE_KEYS: &[&str] = &["code", "data", "content", "msg", "message", "status", "success"];
const PAYLOAD_KEYS: &[&str] = &["data", "content"];

/// Turn a successful response body into the payload handed to callers.
pub fn unwrap_payload(body: &[u8]) -> Value {
    let value = match parse_body(body) {
        Some(value) => value,
        None => return Value::Null,
    };

    match value {
        Value::Object(map) if is_envelope(&map) => extract_payload(map),
        other => other,
    }
}

/// Parse an error body, if there is one.
pub fn error_body(body: &[u8]) -> Option<Value> {
    parse_body(body)
}

/// The backend's explanation for a failure, if it gave a usable one.
///
/// A string `detail` is taken as is. FastAPI validation failures carry a list
/// of `{loc, msg, type}` entries; their `msg` values are joined.
pub fn detail_message(body: Option<&Value>) -> Option<String> {
    match body?.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn parse_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(body).into_owned())),
    }
}

fn is_envelope(map: &Map<String, Value>) -> bool {
    PAYLOAD_KEYS.iter().any(|key| map.contains_key(*key))
        && map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str()))
}

fn extract_payload(mut map: Map<String, Value>) -> Value {
    PAYLOAD_KEYS
        .iter()
        .find_map(|key| map.remove(*key))
        .unwrap_or(Value::Null)
}
