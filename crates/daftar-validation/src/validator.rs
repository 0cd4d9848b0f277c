// File: src/validator.rs
// Purpose: One validation run over a record

use crate::engine::Engine;
use crate::error_set::ErrorSet;
use crate::registry::RuleContext;
use crate::rule::Rule;
use crate::spec::RuleSpec;
use crate::value::{is_blank, lookup, Record, NULL};
use once_cell::sync::Lazy;
use serde_json::Value;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

/// Result of validating one record against one rule spec
///
/// Validation happens eagerly in the constructor: every field of the rule spec is
/// checked in declaration order, and every rule of a field runs even after an
/// earlier one failed, so the caller sees all problems at once.
///
/// ```
/// use daftar_validation::{RuleSpec, Validator};
/// use serde_json::json;
///
/// let record = json!({"email": ""});
/// let spec = RuleSpec::new().field("email", "required|email");
/// let validator = Validator::new(record.as_object().unwrap(), &spec);
///
/// assert!(validator.fails());
/// assert_eq!(validator.errors().get("email").map(|e| e.len()), Some(2));
/// ```
#[derive(Debug)]
pub struct Validator<'r> {
    record: &'r Record,
    errors: ErrorSet,
}

impl<'r> Validator<'r> {
    /// Validate with the default engine (no custom rules, default messages)
    pub fn new(record: &'r Record, spec: &RuleSpec) -> Self {
        Self::run(&DEFAULT_ENGINE, record, spec)
    }

    pub(crate) fn run(engine: &Engine, record: &'r Record, spec: &RuleSpec) -> Self {
        let mut errors = ErrorSet::new();

        for (field, rules) in spec.iter() {
            let value = lookup(record, field).unwrap_or(&NULL);

            if is_blank(value) && rules.iter().any(|r| matches!(r, Rule::Nullable)) {
                tracing::debug!("Skipping blank nullable field {}", field);
                continue;
            }

            let ctx = RuleContext { field, record };
            for rule in rules {
                if !engine.check(rule, value, &ctx) {
                    tracing::debug!("Field {} failed rule {}", field, rule);
                    errors.add(field, engine.messages().format(field, rule));
                }
            }
        }

        tracing::debug!(
            "Validated {} fields: {} errors",
            spec.len(),
            errors.count()
        );

        Self { record, errors }
    }

    pub fn passes(&self) -> bool {
        !self.fails()
    }

    pub fn fails(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// First error in spec order, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first()
    }

    pub fn first_error_for(&self, field: &str) -> Option<&str> {
        self.errors.first_for(field)
    }

    /// Read a field from the record under validation (dotted paths allowed)
    pub fn value(&self, field: &str) -> Option<&'r Value> {
        lookup(self.record, field)
    }

    pub fn into_errors(self) -> ErrorSet {
        self.errors
    }

    pub fn into_result(self) -> Result<(), ErrorSet> {
        if self.fails() {
            Err(self.errors)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn test_passes_when_every_rule_holds() {
        let data = record(json!({"name": "Sara", "qty": 3}));
        let spec = RuleSpec::new()
            .field("name", "required|string|min:2")
            .field("qty", "required|integer|min:1");

        let validator = Validator::new(&data, &spec);
        assert!(validator.passes());
        assert!(!validator.fails());
        assert_eq!(validator.first_error(), None);
        assert!(validator.into_result().is_ok());
    }

    #[test]
    fn test_missing_field_is_null() {
        let data = record(json!({}));
        let spec = RuleSpec::new().field("title", "required|string");

        let validator = Validator::new(&data, &spec);
        assert_eq!(
            validator.errors().get("title"),
            Some(
                &[
                    "The title field is required.".to_string(),
                    "The title field must be a string.".to_string()
                ][..]
            )
        );
    }

    #[test]
    fn test_nullable_skips_blank_values() {
        let data = record(json!({"website": "", "fax": null, "email": "bad"}));
        let spec = RuleSpec::new()
            .field("website", "nullable|url")
            .field("fax", "nullable|phone")
            .field("missing", "nullable|email")
            .field("email", "nullable|email");

        let validator = Validator::new(&data, &spec);
        assert_eq!(validator.errors().fields().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn test_value_lookup() {
        let data = record(json!({"address": {"city": "Shiraz"}}));
        let spec = RuleSpec::new();
        let validator = Validator::new(&data, &spec);

        assert_eq!(validator.value("address.city"), Some(&json!("Shiraz")));
        assert_eq!(validator.value("nope"), None);
    }

    #[test]
    fn test_nested_field_rules() {
        let data = record(json!({"address": {"postal_code": "12345"}}));
        let spec = RuleSpec::new().field("address.postal_code", "required|postalCode");

        let validator = Validator::new(&data, &spec);
        assert_eq!(
            validator.first_error_for("address.postal_code"),
            Some("The address.postal code field must be a valid postal code.")
        );
    }
}
