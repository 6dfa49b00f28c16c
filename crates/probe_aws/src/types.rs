//! Conversions from AWS Smithy primitives to JSON.

use aws_smithy_types::date_time::Format;
use aws_smithy_types::{DateTime, Document, Number};
use serde_json::Value;

/// Converts an AWS Smithy `Document` to a `serde_json::Value`.
pub fn document_to_json(doc: &Document) -> Value {
    match doc {
        Document::Null => Value::Null,
        Document::Bool(b) => Value::Bool(*b),
        Document::Number(n) => match n {
            Number::PosInt(i) => serde_json::json!(*i),
            Number::NegInt(i) => serde_json::json!(*i),
            Number::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| {
                    tracing::warn!("cannot convert {f} to JSON (NaN/Infinity not supported), using null");
                    Value::Null
                }),
        },
        Document::String(s) => Value::String(s.clone()),
        Document::Array(arr) => Value::Array(arr.iter().map(document_to_json).collect()),
        Document::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), document_to_json(v)))
                .collect(),
        ),
    }
}

/// Formats a timestamp as RFC 3339, or `null` if it is out of range.
pub fn timestamp_to_json(timestamp: &DateTime) -> Value {
    timestamp
        .fmt(Format::DateTime)
        .map_or(Value::Null, Value::String)
}
