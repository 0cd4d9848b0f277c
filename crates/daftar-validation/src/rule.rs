// File: src/rule.rs
// Purpose: Typed rule catalog and descriptor parsing ("between:1,10")

use crate::error::RuleError;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// One validation rule with its parameters already parsed
///
/// Numeric bounds that failed to parse are stored as NaN so every comparison
/// against them fails.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    Nullable,
    String,
    Numeric,
    Integer,
    Min(f64),
    Max(f64),
    Between(f64, f64),
    Email,
    Url,
    Date,
    Boolean,
    Array,
    Object,
    Confirmed(Option<String>),
    Regex(Pattern),
    In(Vec<String>),
    NotIn(Vec<String>),
    Phone,
    NationalId,
    PostalCode,
    Sheba,
    /// A rule resolved through the registry at validation time
    Custom { name: String, params: Vec<String> },
}

/// Names of every built-in rule, in catalog order
pub const BUILTIN_RULES: &[&str] = &[
    "required",
    "nullable",
    "string",
    "numeric",
    "integer",
    "min",
    "max",
    "between",
    "email",
    "url",
    "date",
    "boolean",
    "array",
    "object",
    "confirmed",
    "regex",
    "in",
    "notIn",
    "phone",
    "nationalId",
    "postalCode",
    "sheba",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_RULES.contains(&name)
}

impl Rule {
    /// Parse a descriptor, rejecting malformed parameters
    pub fn parse(descriptor: &str) -> Result<Self, RuleError> {
        parse_descriptor(descriptor, true)
    }

    /// Parse a descriptor, turning malformed parameters into always-failing rules
    pub fn parse_lenient(descriptor: &str) -> Self {
        match parse_descriptor(descriptor, false) {
            Ok(rule) => rule,
            // Lenient parsing only errors on an empty name
            Err(_) => Rule::Custom {
                name: String::new(),
                params: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::Nullable => "nullable",
            Rule::String => "string",
            Rule::Numeric => "numeric",
            Rule::Integer => "integer",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Between(..) => "between",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::Date => "date",
            Rule::Boolean => "boolean",
            Rule::Array => "array",
            Rule::Object => "object",
            Rule::Confirmed(_) => "confirmed",
            Rule::Regex(_) => "regex",
            Rule::In(_) => "in",
            Rule::NotIn(_) => "notIn",
            Rule::Phone => "phone",
            Rule::NationalId => "nationalId",
            Rule::PostalCode => "postalCode",
            Rule::Sheba => "sheba",
            Rule::Custom { name, .. } => name,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Min(n) | Rule::Max(n) => write!(f, "{}:{}", self.name(), n),
            Rule::Between(a, b) => write!(f, "between:{},{}", a, b),
            Rule::Confirmed(Some(other)) => write!(f, "confirmed:{}", other),
            Rule::Regex(pattern) => write!(f, "regex:{}", pattern.source),
            Rule::In(list) | Rule::NotIn(list) => write!(f, "{}:{}", self.name(), list.join(",")),
            Rule::Custom { name, params } if !params.is_empty() => {
                write!(f, "{}:{}", name, params.join(","))
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// A user-supplied regular expression; `compiled` is `None` when the source is invalid
#[derive(Debug, Clone)]
pub struct Pattern {
    pub source: String,
    compiled: Option<Regex>,
}

impl Pattern {
    pub fn is_match(&self, haystack: &str) -> bool {
        self.compiled
            .as_ref()
            .map(|re| re.is_match(haystack))
            .unwrap_or(false)
    }

    fn compile(source: &str) -> Result<Self, RuleError> {
        let (body, flags) = split_delimited(source);
        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                // g/u/y only affect iteration or are implied by the regex crate
                _ => &mut builder,
            };
        }
        match builder.build() {
            Ok(re) => Ok(Self {
                source: source.to_string(),
                compiled: Some(re),
            }),
            Err(e) => Err(RuleError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

const PATTERN_FLAGS: &str = "imsxguy";

/// Accept both `^\d+$` and `/^\d+$/i`
///
/// Only a known flag set after the closing slash makes the source delimited,
/// so `/usr/bin` stays a literal pattern.
fn split_delimited(source: &str) -> (&str, &str) {
    if let Some(rest) = source.strip_prefix('/') {
        if let Some(end) = rest.rfind('/') {
            let flags = &rest[end + 1..];
            if flags.chars().all(|c| PATTERN_FLAGS.contains(c)) {
                return (&rest[..end], flags);
            }
        }
    }
    (source, "")
}

fn parse_descriptor(descriptor: &str, strict: bool) -> Result<Rule, RuleError> {
    let descriptor = descriptor.trim();
    let (name, raw_params) = match descriptor.split_once(':') {
        Some((name, rest)) => (name.trim(), Some(rest)),
        None => (descriptor, None),
    };
    if name.is_empty() {
        return Err(RuleError::EmptyDescriptor(descriptor.to_string()));
    }

    // A regex keeps its commas
    let params: Vec<String> = match (name, raw_params) {
        ("regex", Some(rest)) => vec![rest.to_string()],
        (_, Some(rest)) => rest.split(',').map(|p| p.trim().to_string()).collect(),
        (_, None) => Vec::new(),
    };

    let rule = match name {
        "required" => Rule::Required,
        "nullable" => Rule::Nullable,
        "string" => Rule::String,
        "numeric" => Rule::Numeric,
        "integer" => Rule::Integer,
        "min" => Rule::Min(bound(name, &params, 0, strict)?),
        "max" => Rule::Max(bound(name, &params, 0, strict)?),
        "between" => Rule::Between(
            bound(name, &params, 0, strict)?,
            bound(name, &params, 1, strict)?,
        ),
        "email" => Rule::Email,
        "url" => Rule::Url,
        "date" => Rule::Date,
        "boolean" => Rule::Boolean,
        "array" => Rule::Array,
        "object" => Rule::Object,
        "confirmed" => Rule::Confirmed(params.first().filter(|p| !p.is_empty()).cloned()),
        "regex" => {
            let source = params.first().cloned().unwrap_or_default();
            if strict && source.is_empty() {
                return Err(RuleError::MissingParameter {
                    rule: name.to_string(),
                    expected: 1,
                    got: 0,
                });
            }
            match Pattern::compile(&source) {
                Ok(pattern) => Rule::Regex(pattern),
                Err(e) if strict => return Err(e),
                Err(e) => {
                    tracing::warn!("{}; the rule will always fail", e);
                    Rule::Regex(Pattern {
                        source,
                        compiled: None,
                    })
                }
            }
        }
        "in" | "notIn" => {
            if strict && params.is_empty() {
                return Err(RuleError::MissingParameter {
                    rule: name.to_string(),
                    expected: 1,
                    got: 0,
                });
            }
            if name == "in" {
                Rule::In(params)
            } else {
                Rule::NotIn(params)
            }
        }
        "phone" => Rule::Phone,
        "nationalId" => Rule::NationalId,
        "postalCode" => Rule::PostalCode,
        "sheba" => Rule::Sheba,
        other => Rule::Custom {
            name: other.to_string(),
            params,
        },
    };
    Ok(rule)
}

fn bound(rule: &str, params: &[String], index: usize, strict: bool) -> Result<f64, RuleError> {
    let Some(raw) = params.get(index) else {
        if strict {
            return Err(RuleError::MissingParameter {
                rule: rule.to_string(),
                expected: index + 1,
                got: params.len(),
            });
        }
        tracing::warn!("rule `{}` is missing parameter {}; the rule will always fail", rule, index + 1);
        return Ok(f64::NAN);
    };

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ if strict => Err(RuleError::InvalidNumber {
            rule: rule.to_string(),
            param: raw.clone(),
        }),
        _ => {
            tracing::warn!("rule `{}` has non-numeric parameter `{}`; the rule will always fail", rule, raw);
            Ok(f64::NAN)
        }
    }
}

/// Split a pipe-joined rule string ("required|string|max:255") into descriptors
pub fn split_rules(source: &str) -> impl Iterator<Item = &str> {
    source.split('|').map(str::trim).filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rules() {
        assert!(matches!(Rule::parse("required"), Ok(Rule::Required)));
        assert!(matches!(Rule::parse(" email "), Ok(Rule::Email)));
        assert!(matches!(Rule::parse("nationalId"), Ok(Rule::NationalId)));
    }

    #[test]
    fn test_parse_bounds() {
        match Rule::parse("between:1, 10") {
            Ok(Rule::Between(a, b)) => {
                assert_eq!(a, 1.0);
                assert_eq!(b, 10.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(Rule::parse("min:2.5"), Ok(Rule::Min(n)) if n == 2.5));
    }

    #[test]
    fn test_strict_rejects_malformed_bounds() {
        assert_eq!(
            Rule::parse("min:abc").unwrap_err(),
            RuleError::InvalidNumber {
                rule: "min".to_string(),
                param: "abc".to_string()
            }
        );
        assert_eq!(
            Rule::parse("between:1").unwrap_err(),
            RuleError::MissingParameter {
                rule: "between".to_string(),
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_lenient_keeps_malformed_bounds_as_nan() {
        assert!(matches!(Rule::parse_lenient("min:abc"), Rule::Min(n) if n.is_nan()));
        assert!(matches!(Rule::parse_lenient("max"), Rule::Max(n) if n.is_nan()));
    }

    #[test]
    fn test_regex_keeps_commas_and_flags() {
        let Ok(Rule::Regex(pattern)) = Rule::parse("regex:/^[a-z]{2,4}$/i") else {
            panic!("expected regex rule");
        };
        assert_eq!(pattern.source, "/^[a-z]{2,4}$/i");
        assert!(pattern.is_match("AbC"));
        assert!(!pattern.is_match("abcde"));
    }

    #[test]
    fn test_unknown_trailing_letters_are_not_flags() {
        let Ok(Rule::Regex(pattern)) = Rule::parse("regex:/usr/bin") else {
            panic!("expected regex rule");
        };
        assert!(pattern.is_match("/usr/bin"));
        assert!(!pattern.is_match("USR"));
        assert!(!pattern.is_match("usr"));

        let Ok(Rule::Regex(pattern)) = Rule::parse("regex:/^inv$/gi") else {
            panic!("expected regex rule");
        };
        assert!(pattern.is_match("INV"));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches!(Rule::parse("regex:(unclosed"), Err(RuleError::InvalidPattern { .. })));
        let Rule::Regex(pattern) = Rule::parse_lenient("regex:(unclosed") else {
            panic!("expected regex rule");
        };
        assert!(!pattern.is_match("(unclosed"));
    }

    #[test]
    fn test_empty_rule_name() {
        let err = Rule::parse(":5").unwrap_err();
        assert_eq!(err, RuleError::EmptyDescriptor(":5".to_string()));
        assert_eq!(err.to_string(), "empty rule name in descriptor `:5`");
    }

    #[test]
    fn test_unknown_rule_becomes_custom() {
        match Rule::parse("iban_country:IR,DE") {
            Ok(Rule::Custom { name, params }) => {
                assert_eq!(name, "iban_country");
                assert_eq!(params, vec!["IR", "DE"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_descriptor() {
        assert_eq!(Rule::parse("in:draft,sent").unwrap().to_string(), "in:draft,sent");
        assert_eq!(Rule::parse("max:255").unwrap().to_string(), "max:255");
        assert_eq!(Rule::parse("confirmed").unwrap().to_string(), "confirmed");
    }

    #[test]
    fn test_split_rules() {
        let parts: Vec<&str> = split_rules("required| string ||max:255").collect();
        assert_eq!(parts, vec!["required", "string", "max:255"]);
    }

    #[test]
    fn test_builtin_names_parse_to_builtin_rules() {
        for name in BUILTIN_RULES {
            let rule = Rule::parse_lenient(name);
            assert!(!matches!(rule, Rule::Custom { .. }), "{} parsed as custom", name);
            assert_eq!(rule.name(), *name);
        }
    }
}
