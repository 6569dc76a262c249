//! Value classification
//!
//! Maps one decoded JSON value to a [`TypeRef`]. Total over the JSON value
//! space: every variant of `serde_json::Value` is matched and every input
//! produces a classification.

use super::types::TypeRef;
use crate::naming::title_case;
use crate::types::JsonValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// ISO 8601 date: 2019-06-07
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// ISO 8601 datetime prefix: 2019-06-07T10:30:00 / 2019-06-07 10:30:00
static DATETIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}").unwrap());

/// Classify a JSON value under the given field name.
///
/// - ISO 8601 date/datetime strings classify as `Date`
/// - other strings, numbers, and booleans classify as the matching primitive
/// - a non-empty array classifies as its first element wrapped in `Array<…>`;
///   an empty array carries no element to sample and falls back to
///   `Array<unknown>`
/// - an object classifies as `Partial<TitleCasedKey>` carrying the payload
///   for recursive extraction
/// - null classifies as `unknown`
pub fn classify(value: &JsonValue, key: &str) -> TypeRef {
    match value {
        JsonValue::Null => TypeRef::primitive("unknown"),
        JsonValue::Bool(_) => TypeRef::primitive("boolean"),
        JsonValue::Number(_) => TypeRef::primitive("number"),
        JsonValue::String(s) => {
            if is_temporal(s) {
                TypeRef::primitive("Date")
            } else {
                TypeRef::primitive("string")
            }
        }
        JsonValue::Array(items) => classify_array(items, key),
        JsonValue::Object(_) => TypeRef {
            name: title_case(key),
            nested: Some(value.clone()),
            pattern: Some("Partial<%s>".to_string()),
        },
    }
}

/// Classify an array by its first element.
///
/// The element's own pattern composes inside the array wrapper, so nested
/// arrays and arrays of records render `Array<Array<…>>` and
/// `Array<Partial<…>>` respectively. The array is assumed homogeneous;
/// elements past the first are not inspected.
fn classify_array(items: &[JsonValue], key: &str) -> TypeRef {
    match items.first() {
        Some(first) => {
            let element = classify(first, key);
            let pattern = format!("Array<{}>", element.extend());
            TypeRef {
                name: element.name,
                nested: element.nested,
                pattern: Some(pattern),
            }
        }
        None => TypeRef {
            name: "unknown".to_string(),
            nested: None,
            pattern: Some("Array<%s>".to_string()),
        },
    }
}

/// Whether a string holds an ISO 8601 date or datetime.
///
/// A cheap shape check gates the chrono parse so arbitrary strings skip
/// calendar validation.
fn is_temporal(s: &str) -> bool {
    if DATE_RE.is_match(s) {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok();
    }
    if DATETIME_RE.is_match(s) {
        return DateTime::parse_from_rfc3339(s).is_ok()
            || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
            || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok();
    }
    false
}
