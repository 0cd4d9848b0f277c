// File: src/checks/format.rs
// Purpose: Format checks (email, url, date, pattern, membership, confirmation)

use crate::rule::Pattern;
use crate::value::display_string;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Permissive local@domain.tld shape
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Validate email format
pub fn email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))
}

/// Validate that the value parses as an absolute URL
pub fn url(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| ::url::Url::parse(s.trim()).is_ok())
}

/// Validate that the value is a real calendar date or date-time
pub fn date(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    let s = s.trim();

    DateTime::parse_from_rfc3339(s).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
}

/// Check if string matches the rule's pattern
pub fn matches_pattern(value: &Value, pattern: &Pattern) -> bool {
    value.as_str().is_some_and(|s| pattern.is_match(s))
}

pub fn one_of(value: &Value, allowed: &[String]) -> bool {
    let rendered = display_string(value);
    allowed.iter().any(|a| *a == rendered)
}

pub fn not_one_of(value: &Value, forbidden: &[String]) -> bool {
    !one_of(value, forbidden)
}

/// Strict equality with the paired confirmation value (missing reads as null)
///
/// Numbers compare by value, so `1` confirms `1.0`.
pub fn confirmed(value: &Value, confirmation: &Value) -> bool {
    match (value, confirmation) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => value == confirmation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use serde_json::json;

    #[test]
    fn test_valid_emails() {
        assert!(email(&json!("user@example.com")));
        assert!(email(&json!("ali.rezaei+inv@shop.co.ir")));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!email(&json!("")));
        assert!(!email(&json!("user@")));
        assert!(!email(&json!("user@example")));
        assert!(!email(&json!("us er@example.com")));
        assert!(!email(&json!("a@b@c.com")));
        assert!(!email(&json!(42)));
    }

    #[test]
    fn test_url_validation() {
        assert!(url(&json!("https://example.com/path?q=1")));
        assert!(url(&json!("ftp://files.example.com")));
        assert!(!url(&json!("example.com")));
        assert!(!url(&json!("")));
        assert!(!url(&json!(null)));
    }

    #[test]
    fn test_date_validation() {
        assert!(date(&json!("2024-02-29")));
        assert!(date(&json!("2024/03/01")));
        assert!(date(&json!("2024-03-01 14:30")));
        assert!(date(&json!("2024-03-01T14:30:00")));
        assert!(date(&json!("2024-03-01T14:30:00+03:30")));

        assert!(!date(&json!("2023-02-29")));
        assert!(!date(&json!("2024-13-01")));
        assert!(!date(&json!("yesterday")));
        assert!(!date(&json!(20240301)));
    }

    #[test]
    fn test_pattern() {
        let Rule::Regex(pattern) = Rule::parse_lenient(r"regex:^INV-\d{4}$") else {
            panic!("expected regex rule");
        };
        assert!(matches_pattern(&json!("INV-0042"), &pattern));
        assert!(!matches_pattern(&json!("INV-42"), &pattern));
        assert!(!matches_pattern(&json!(42), &pattern));
    }

    #[test]
    fn test_membership() {
        let allowed = vec!["draft".to_string(), "1".to_string()];
        assert!(one_of(&json!("draft"), &allowed));
        assert!(one_of(&json!(1), &allowed));
        assert!(!one_of(&json!("paid"), &allowed));
        assert!(not_one_of(&json!("paid"), &allowed));
        assert!(!not_one_of(&json!(1.0), &allowed));
    }

    #[test]
    fn test_confirmed() {
        assert!(confirmed(&json!("x"), &json!("x")));
        assert!(!confirmed(&json!("x"), &json!("y")));
        assert!(!confirmed(&json!("x"), &json!(null)));
        assert!(confirmed(&json!(1), &json!(1.0)));
        assert!(!confirmed(&json!(1), &json!(1.5)));
        assert!(!confirmed(&json!(1), &json!("1")));
    }
}
