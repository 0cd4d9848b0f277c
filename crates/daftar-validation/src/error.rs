//! Configuration errors raised when compiling rules in strict mode

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("unknown rule `{rule}` on field `{field}`")]
    UnknownRule { field: String, rule: String },

    #[error("rule `{rule}` expects {expected} parameter(s), got {got}")]
    MissingParameter {
        rule: String,
        expected: usize,
        got: usize,
    },

    #[error("rule `{rule}` has a non-numeric parameter `{param}`")]
    InvalidNumber { rule: String, param: String },

    #[error("rule `regex` has an invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("rule name `{0}` is built in and cannot be registered")]
    ReservedName(String),

    #[error("empty rule name in descriptor `{0}`")]
    EmptyDescriptor(String),
}
