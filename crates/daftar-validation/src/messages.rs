// File: src/messages.rs
// Purpose: Error message templates and placeholder substitution

use crate::rule::Rule;
use std::collections::HashMap;

const FALLBACK: &str = "The :field field is invalid.";

fn default_template(rule: &str) -> &'static str {
    match rule {
        "required" => "The :field field is required.",
        "string" => "The :field field must be a string.",
        "numeric" => "The :field field must be a number.",
        "integer" => "The :field field must be an integer.",
        "min" => "The :field field must be at least :min.",
        "max" => "The :field field may not be greater than :max.",
        "between" => "The :field field must be between :min and :max.",
        "email" => "The :field field must be a valid email address.",
        "url" => "The :field field must be a valid URL.",
        "date" => "The :field field must be a valid date.",
        "boolean" => "The :field field must be true or false.",
        "array" => "The :field field must be an array.",
        "object" => "The :field field must be an object.",
        "confirmed" => "The :field confirmation does not match.",
        "regex" => "The :field field format is invalid.",
        "in" => "The selected :field is invalid.",
        "notIn" => "The selected :field is invalid.",
        "phone" => "The :field field must be a valid mobile number.",
        "nationalId" => "The :field field must be a valid national ID.",
        "postalCode" => "The :field field must be a valid postal code.",
        "sheba" => "The :field field must be a valid Sheba number.",
        _ => FALLBACK,
    }
}

/// Message catalog
///
/// Lookup order for a failing rule: `field.rule` override, `rule` override,
/// registered custom message, built-in default.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<String, String>,
    attributes: HashMap<String, String>,
    custom: HashMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the template for `rule` or `field.rule`
    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) -> &mut Self {
        self.overrides.insert(key.into(), template.into());
        self
    }

    /// Display name substituted for `:field`
    pub fn set_attribute(&mut self, field: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.attributes.insert(field.into(), label.into());
        self
    }

    pub(crate) fn set_custom(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.custom.insert(rule.into(), template.into());
    }

    pub fn extend_overrides(&mut self, overrides: impl IntoIterator<Item = (String, String)>) {
        self.overrides.extend(overrides);
    }

    pub fn extend_attributes(&mut self, attributes: impl IntoIterator<Item = (String, String)>) {
        self.attributes.extend(attributes);
    }

    /// Human-readable name of a field: configured label, else `snake_case` with spaces
    pub fn attribute(&self, field: &str) -> String {
        self.attributes
            .get(field)
            .cloned()
            .unwrap_or_else(|| field.replace('_', " "))
    }

    fn template(&self, field: &str, rule: &str) -> &str {
        self.overrides
            .get(&format!("{}.{}", field, rule))
            .or_else(|| self.overrides.get(rule))
            .or_else(|| self.custom.get(rule))
            .map(String::as_str)
            .unwrap_or_else(|| default_template(rule))
    }

    /// Render the message for `rule` failing on `field`
    pub fn format(&self, field: &str, rule: &Rule) -> String {
        let mut message = self
            .template(field, rule.name())
            .replace(":field", &self.attribute(field));

        match rule {
            Rule::Min(n) => message = message.replace(":min", &format_bound(*n)),
            Rule::Max(n) => message = message.replace(":max", &format_bound(*n)),
            Rule::Between(low, high) => {
                message = message
                    .replace(":min", &format_bound(*low))
                    .replace(":max", &format_bound(*high));
            }
            Rule::In(list) | Rule::NotIn(list) => {
                message = message.replace(":values", &list.join(", "));
            }
            Rule::Confirmed(other) => {
                let other = other
                    .clone()
                    .unwrap_or_else(|| format!("{}_confirmation", field));
                message = message.replace(":other", &self.attribute(&other));
            }
            Rule::Custom { params, .. } => {
                message = message
                    .replace(":values", &params.join(", "))
                    .replace(":param", params.first().map(String::as_str).unwrap_or(""));
            }
            _ => {}
        }
        message
    }
}

fn format_bound(n: f64) -> String {
    if n.is_nan() {
        "?".to_string()
    } else {
        n.to_string()
    }
}
