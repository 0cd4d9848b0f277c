// File: src/response.rs
// Purpose: JSON body returned to the client when validation fails

use crate::error_set::ErrorSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FAILURE_MESSAGE: &str = "The given data was invalid.";

/// `{"success": false, "message": "...", "errors": {"field": ["..."]}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub success: bool,
    pub message: String,
    pub errors: ErrorSet,
}

impl ValidationFailure {
    pub fn new(errors: ErrorSet) -> Self {
        Self::with_message(DEFAULT_FAILURE_MESSAGE, errors)
    }

    pub fn with_message(message: impl Into<String>, errors: ErrorSet) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }

    /// Use the first field error as the headline message
    pub fn from_first_error(errors: ErrorSet) -> Self {
        let message = errors
            .first()
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string();
        Self::with_message(message, errors)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<ErrorSet> for ValidationFailure {
    fn from(errors: ErrorSet) -> Self {
        Self::new(errors)
    }
}
