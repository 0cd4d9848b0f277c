// File: src/spec.rs
// Purpose: Field -> ordered rule list, and its raw (unparsed) source form

use crate::rule::{split_rules, Rule};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compiled rules per field, in declaration order
#[derive(Debug, Clone, Default)]
pub struct RuleSpec {
    fields: IndexMap<String, Vec<Rule>>,
}

impl RuleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field from a pipe-joined rule string, parsing leniently
    ///
    /// ```
    /// use daftar_validation::RuleSpec;
    ///
    /// let spec = RuleSpec::new()
    ///     .field("email", "required|email")
    ///     .field("age", "integer|between:18,120");
    /// assert_eq!(spec.len(), 2);
    /// ```
    pub fn field(mut self, name: &str, rules: &str) -> Self {
        for descriptor in split_rules(rules) {
            self.push(name, Rule::parse_lenient(descriptor));
        }
        self
    }

    /// Append a rule; declaring a field again extends its list
    pub fn push(&mut self, field: &str, rule: Rule) {
        self.fields.entry(field.to_string()).or_default().push(rule);
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |spec, (field, rules)| spec.field(field, rules))
    }

    pub fn rules_for(&self, field: &str) -> Option<&[Rule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields.iter().map(|(f, r)| (f.as_str(), r.as_slice()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Rules for one field as written in a rule file: `"required|max:255"` or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSource {
    Piped(String),
    List(Vec<String>),
}

impl RuleSource {
    /// Individual descriptors; list entries are taken whole so a regex may contain `|`
    pub fn descriptors(&self) -> Vec<&str> {
        match self {
            RuleSource::Piped(s) => split_rules(s).collect(),
            RuleSource::List(items) => items
                .iter()
                .map(|d| d.trim())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }
}

impl From<&str> for RuleSource {
    fn from(s: &str) -> Self {
        RuleSource::Piped(s.to_string())
    }
}

/// A whole rule file: field name to its rule source, in file order
pub type RuleSpecSource = IndexMap<String, RuleSource>;
