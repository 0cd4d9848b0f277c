// File: src/registry.rs
// Purpose: Registration of application-specific rules next to the built-in catalog

use crate::error::RuleError;
use crate::rule::is_builtin;
use crate::value::{lookup, Record};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a rule can see besides its own value
pub struct RuleContext<'a> {
    pub field: &'a str,
    pub record: &'a Record,
}

impl<'a> RuleContext<'a> {
    /// Value of a sibling field (dotted paths allowed)
    pub fn value(&self, field: &str) -> Option<&'a Value> {
        lookup(self.record, field)
    }
}

/// Trait for rules registered by the application
///
/// Implemented for any `Fn(&Value, &[String], &RuleContext) -> bool`.
pub trait CustomRule: Send + Sync {
    fn check(&self, value: &Value, params: &[String], ctx: &RuleContext<'_>) -> bool;
}

impl<F> CustomRule for F
where
    F: Fn(&Value, &[String], &RuleContext<'_>) -> bool + Send + Sync,
{
    fn check(&self, value: &Value, params: &[String], ctx: &RuleContext<'_>) -> bool {
        self(value, params, ctx)
    }
}

#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn CustomRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R>(&mut self, name: impl Into<String>, rule: R) -> Result<(), RuleError>
    where
        R: CustomRule + 'static,
    {
        let name = name.into();
        if is_builtin(&name) {
            return Err(RuleError::ReservedName(name));
        }
        self.rules.insert(name, Arc::new(rule));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CustomRule>> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}
