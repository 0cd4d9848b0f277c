//! Size checks shared by `min`, `max` and `between`
//!
//! The measured quantity depends on the value kind: character count for
//! strings, element count for arrays, the value itself for numbers. Any other
//! kind fails. Bounds are truncated toward zero when compared with a count.

use crate::value::ValueKind;
use serde_json::Value;

/// The quantity a size rule compares, and whether it is a count
fn measure(value: &Value) -> Option<(f64, bool)> {
    match ValueKind::of(value) {
        ValueKind::String => value.as_str().map(|s| (s.chars().count() as f64, true)),
        ValueKind::Array => value.as_array().map(|items| (items.len() as f64, true)),
        ValueKind::Number => value.as_f64().map(|f| (f, false)),
        _ => None,
    }
}

fn effective(bound: f64, is_count: bool) -> f64 {
    if is_count {
        bound.trunc()
    } else {
        bound
    }
}

pub fn min(value: &Value, bound: f64) -> bool {
    measure(value).is_some_and(|(size, count)| size >= effective(bound, count))
}

pub fn max(value: &Value, bound: f64) -> bool {
    measure(value).is_some_and(|(size, count)| size <= effective(bound, count))
}

pub fn between(value: &Value, low: f64, high: f64) -> bool {
    measure(value).is_some_and(|(size, count)| {
        size >= effective(low, count) && size <= effective(high, count)
    })
}
