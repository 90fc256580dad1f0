//! Flat string-map codec for stream transports
//!
//! The transport stores one level of `field -> string`. Records are
//! serialized through their derived `Serialize` impl; top-level primitives
//! become their plain text form, nested records, lists and maps become
//! compact JSON text under the field name.
//!
//! Decoding infers types back from the text: JSON containers first, then
//! booleans, integers and finite floats, otherwise the string itself. A
//! string field whose content happens to look like JSON or a number is
//! therefore read back as that value. The transport cannot tell them apart,
//! and the codec does not try to.
//!
//! Integer fields may arrive in exponent form (`1.704112496789e+12`) from
//! producers that format every number as a float. Integral values written
//! that way are read back as integers.
//!
//! Every optional field is skipped when absent, so a `null` in the
//! serialized tree can only come from a NaN or infinite float. Encoding
//! rejects it instead of writing a message no consumer can decode.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use tracing;

use super::message::StreamMessage;
use crate::error::StreamError;

/// Flatten `record` into a message bound for `stream_name`.
///
/// Does not validate the record; producers call `validate()` first.
pub fn encode<T: Serialize>(stream_name: &str, record: &T) -> Result<StreamMessage, StreamError> {
    if stream_name.is_empty() {
        return Err(StreamError::EmptyStreamName);
    }

    let data = flatten(record)?;
    tracing::debug!("Encoded {} fields for stream {}", data.len(), stream_name);

    Ok(StreamMessage::new(stream_name, data))
}

/// Rebuild a record of type `T` from a message's flat fields.
pub fn decode<T: DeserializeOwned>(message: &StreamMessage) -> Result<T, StreamError> {
    let tree: Map<String, Value> = message
        .data
        .iter()
        .map(|(name, raw)| (name.clone(), infer_value(raw)))
        .collect();

    serde_json::from_value(Value::Object(tree)).map_err(|e| {
        tracing::debug!("Failed to decode message {:?} from {}: {}", message.id, message.stream, e);
        StreamError::DecodeShape(format!("{} (stream {})", e, message.stream))
    })
}

fn flatten<T: Serialize>(record: &T) -> Result<BTreeMap<String, String>, StreamError> {
    let tree = serde_json::to_value(record).map_err(|e| StreamError::Encoding(e.to_string()))?;

    let fields = match tree {
        Value::Object(fields) => fields,
        other => {
            return Err(StreamError::Encoding(format!(
                "record must serialize to a map of fields, got {}",
                value_kind(&other)
            )))
        }
    };

    let mut flat = BTreeMap::new();
    for (name, value) in fields {
        let text = match value {
            Value::Null => return Err(non_finite(&name)),
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            nested @ (Value::Array(_) | Value::Object(_)) => {
                reject_non_finite(&name, &nested)?;
                serde_json::to_string(&nested)
                    .map_err(|e| StreamError::Encoding(format!("field {}: {}", name, e)))?
            }
        };
        flat.insert(name, text);
    }

    Ok(flat)
}

/// serde_json writes NaN and infinities as `null`
fn reject_non_finite(path: &str, value: &Value) -> Result<(), StreamError> {
    match value {
        Value::Null => Err(non_finite(path)),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| reject_non_finite(&format!("{}[{}]", path, i), item)),
        Value::Object(fields) => fields
            .iter()
            .try_for_each(|(name, item)| reject_non_finite(&format!("{}.{}", path, name), item)),
        _ => Ok(()),
    }
}

fn non_finite(path: &str) -> StreamError {
    StreamError::Encoding(format!("field {} is not a finite number", path))
}

fn infer_value(raw: &str) -> Value {
    if raw.starts_with('{') || raw.starts_with('[') {
        if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
            return parsed;
        }
    }

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if raw.contains(['e', 'E']) && is_integral_i64(f) {
            return Value::from(f as i64);
        }
        // from_f64 rejects inf/NaN, which keeps strings like "INF" as strings
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }

    Value::String(raw.to_string())
}

fn is_integral_i64(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
