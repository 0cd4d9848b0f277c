// File: src/error_set.rs
// Purpose: Per-field error accumulation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to ordered error messages
///
/// Fields keep the order in which their first error was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet {
    fields: IndexMap<String, Vec<String>>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|messages| !messages.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    /// Get all errors for a specific field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(|messages| !messages.is_empty())
    }

    /// First error of the first field that has one
    pub fn first(&self) -> Option<&str> {
        self.fields
            .values()
            .find_map(|messages| messages.first())
            .map(String::as_str)
    }

    /// Get first error for a specific field
    pub fn first_for(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(f, m)| (f.as_str(), m.as_slice()))
    }

    /// Total number of messages across all fields
    pub fn count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Append another set, keeping this set's field order first
    pub fn merge(&mut self, other: ErrorSet) {
        for (field, mut messages) in other.fields {
            self.fields.entry(field).or_default().append(&mut messages);
        }
    }

    pub fn into_map(self) -> IndexMap<String, Vec<String>> {
        self.fields
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_set() {
        let errors = ErrorSet::new();
        assert!(!errors.has_errors());
        assert!(errors.is_empty());
        assert_eq!(errors.first(), None);
        assert_eq!(errors.first_for("email"), None);
    }

    #[test]
    fn test_accumulates_in_insertion_order() {
        let mut errors = ErrorSet::new();
        errors.add("name", "name required");
        errors.add("email", "email required");
        errors.add("name", "name too short");

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email"]);
        assert_eq!(
            errors.get("name"),
            Some(&["name required".to_string(), "name too short".to_string()][..])
        );
        assert_eq!(errors.first(), Some("name required"));
        assert_eq!(errors.first_for("email"), Some("email required"));
        assert_eq!(errors.count(), 3);
    }

    #[test]
    fn test_merge() {
        let mut a = ErrorSet::new();
        a.add("name", "one");
        let mut b = ErrorSet::new();
        b.add("email", "two");
        b.add("name", "three");

        a.merge(b);
        assert_eq!(a.fields().collect::<Vec<_>>(), vec!["name", "email"]);
        assert_eq!(a.get("name").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = ErrorSet::new();
        errors.add("phone", "bad phone");
        errors.add("amount", "bad amount");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"phone":["bad phone"],"amount":["bad amount"]}"#);
    }
}
