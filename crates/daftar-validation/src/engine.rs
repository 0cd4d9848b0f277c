// File: src/engine.rs
// Purpose: Rule compilation and dispatch (registry + messages + strictness)

use crate::checks;
use crate::config::ValidatorConfig;
use crate::error::RuleError;
use crate::messages::Messages;
use crate::registry::{CustomRule, RuleContext, RuleRegistry};
use crate::rule::{split_rules, Rule};
use crate::spec::{RuleSpec, RuleSpecSource};
use crate::validator::Validator;
use crate::value::{lookup, Record, NULL};
use serde_json::Value;

/// Shared validation setup
///
/// Cheap to share behind an `Arc`; every `validate` call builds its own
/// `Validator` and error set.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    registry: RuleRegistry,
    messages: Messages,
    strict: bool,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        let mut messages = Messages::new();
        messages.extend_overrides(config.messages.clone());
        messages.extend_attributes(config.attributes.clone());

        Self {
            registry: RuleRegistry::new(),
            messages,
            strict: config.strict,
        }
    }

    /// Reject malformed rules in `compile` instead of letting them fail validation
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Register an application rule with its message template
    pub fn register<R>(
        &mut self,
        name: &str,
        message: impl Into<String>,
        rule: R,
    ) -> Result<&mut Self, RuleError>
    where
        R: CustomRule + 'static,
    {
        self.registry.register(name, rule)?;
        self.messages.set_custom(name, message);
        tracing::debug!("Registered custom rule {}", name);
        Ok(self)
    }

    /// Compile a rule file
    pub fn compile(&self, source: &RuleSpecSource) -> Result<RuleSpec, RuleError> {
        let mut spec = RuleSpec::new();
        for (field, rules) in source {
            self.compile_field(&mut spec, field, rules.descriptors())?;
        }
        Ok(spec)
    }

    /// Compile `(field, "rule|rule:param")` pairs such as the built-in schemas
    pub fn compile_pairs(&self, pairs: &[(&str, &str)]) -> Result<RuleSpec, RuleError> {
        let mut spec = RuleSpec::new();
        for (field, rules) in pairs {
            self.compile_field(&mut spec, field, split_rules(rules))?;
        }
        Ok(spec)
    }

    fn compile_field<'d>(
        &self,
        spec: &mut RuleSpec,
        field: &str,
        descriptors: impl IntoIterator<Item = &'d str>,
    ) -> Result<(), RuleError> {
        for descriptor in descriptors {
            if !self.strict {
                spec.push(field, Rule::parse_lenient(descriptor));
                continue;
            }

            let rule = Rule::parse(descriptor)?;
            if let Rule::Custom { name, .. } = &rule {
                if !self.registry.contains(name) {
                    return Err(RuleError::UnknownRule {
                        field: field.to_string(),
                        rule: name.clone(),
                    });
                }
            }
            spec.push(field, rule);
        }
        Ok(())
    }

    pub fn validate<'r>(&self, record: &'r Record, spec: &RuleSpec) -> Validator<'r> {
        Validator::run(self, record, spec)
    }

    /// Evaluate one rule against a field value
    pub fn check(&self, rule: &Rule, value: &Value, ctx: &RuleContext<'_>) -> bool {
        match rule {
            Rule::Required => checks::required(value),
            Rule::Nullable => true,
            Rule::String => checks::is_string(value),
            Rule::Numeric => checks::numeric(value),
            Rule::Integer => checks::integer(value),
            Rule::Min(n) => checks::min(value, *n),
            Rule::Max(n) => checks::max(value, *n),
            Rule::Between(low, high) => checks::between(value, *low, *high),
            Rule::Email => checks::email(value),
            Rule::Url => checks::url(value),
            Rule::Date => checks::date(value),
            Rule::Boolean => checks::boolean(value),
            Rule::Array => checks::is_array(value),
            Rule::Object => checks::is_object(value),
            Rule::Confirmed(other) => {
                let other = other
                    .clone()
                    .unwrap_or_else(|| format!("{}_confirmation", ctx.field));
                let confirmation = lookup(ctx.record, &other).unwrap_or(&NULL);
                checks::confirmed(value, confirmation)
            }
            Rule::Regex(pattern) => checks::matches_pattern(value, pattern),
            Rule::In(list) => checks::one_of(value, list),
            Rule::NotIn(list) => checks::not_one_of(value, list),
            Rule::Phone => checks::phone(value),
            Rule::NationalId => checks::national_id(value),
            Rule::PostalCode => checks::postal_code(value),
            Rule::Sheba => checks::sheba(value),
            Rule::Custom { name, params } => match self.registry.get(name) {
                Some(custom) => custom.check(value, params, ctx),
                None => {
                    tracing::warn!("Unknown rule `{}` on field {}; treating as failed", name, ctx.field);
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::RuleSource;
    use serde_json::json;

    fn even(value: &Value, _params: &[String], _ctx: &RuleContext<'_>) -> bool {
        value.as_i64().is_some_and(|n| n % 2 == 0)
    }

    #[test]
    fn test_strict_compile_rejects_unknown_rule() {
        let engine = Engine::new().strict(true);
        let err = engine.compile_pairs(&[("qty", "required|even")]).unwrap_err();
        assert_eq!(
            err,
            RuleError::UnknownRule {
                field: "qty".to_string(),
                rule: "even".to_string()
            }
        );
    }

    #[test]
    fn test_strict_compile_accepts_registered_rule() {
        let mut engine = Engine::new().strict(true);
        engine.register("even", "The :field must be even.", even).unwrap();

        let spec = engine.compile_pairs(&[("qty", "required|even")]).unwrap();
        assert_eq!(spec.rules_for("qty").map(<[Rule]>::len), Some(2));
    }

    #[test]
    fn test_strict_compile_rejects_bad_bound() {
        let engine = Engine::new().strict(true);
        let err = engine.compile_pairs(&[("name", "min:ten")]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidNumber { .. }));
    }

    #[test]
    fn test_lenient_compile_never_fails() {
        let engine = Engine::new();
        let mut source = RuleSpecSource::new();
        source.insert("name".to_string(), RuleSource::from("min:ten|mystery|regex:(("));
        let spec = engine.compile(&source).unwrap();
        assert_eq!(spec.rules_for("name").map(<[Rule]>::len), Some(3));
    }

    #[test]
    fn test_from_config() {
        let mut config = ValidatorConfig {
            strict: true,
            ..Default::default()
        };
        config
            .messages
            .insert("required".to_string(), ":field is required".to_string());
        config
            .attributes
            .insert("sheba".to_string(), "Sheba number".to_string());

        let engine = Engine::from_config(&config);
        assert!(engine.is_strict());
        assert_eq!(engine.messages().format("sheba", &Rule::Required), "Sheba number is required");
    }

    #[test]
    fn test_check_confirmed_with_custom_field() {
        let engine = Engine::new();
        let record = json!({"pin": "1234", "pin_again": "1234"});
        let record = record.as_object().unwrap();
        let ctx = RuleContext {
            field: "pin",
            record,
        };
        let rule = Rule::parse("confirmed:pin_again").unwrap();
        assert!(engine.check(&rule, &json!("1234"), &ctx));
        assert!(!engine.check(&Rule::Confirmed(None), &json!("1234"), &ctx));
    }
}
