//! Presence and type-kind checks

use crate::value::to_number;
use serde_json::Value;

pub fn required(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn numeric(value: &Value) -> bool {
    to_number(value).is_some()
}

pub fn integer(value: &Value) -> bool {
    to_number(value).is_some_and(|n| n.fract() == 0.0)
}

pub fn boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::String(s) => matches!(s.as_str(), "true" | "false" | "0" | "1"),
        Value::Number(n) => matches!(n.as_f64(), Some(f) if f == 0.0 || f == 1.0),
        _ => false,
    }
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

pub fn is_object(value: &Value) -> bool {
    value.is_object()
}
