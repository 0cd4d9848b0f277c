// File: src/config.rs
// Purpose: Validator configuration parsing from validation.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidatorConfig {
    /// Reject malformed rules when compiling instead of failing validation (default: false)
    #[serde(default)]
    pub strict: bool,

    /// Message templates keyed by `rule` or `field.rule`
    #[serde(default)]
    pub messages: HashMap<String, String>,

    /// Display names substituted for `:field`
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl ValidatorConfig {
    /// Load configuration from a TOML file; a missing or blank file means defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No validation config at {:?}; using defaults", path);
            return Ok(Self::default());
        }

        let config = Self::read(path)
            .with_context(|| format!("Invalid validation config {:?}", path))?;
        tracing::debug!(
            "Loaded validation config {:?}: strict={}, {} message(s), {} attribute(s)",
            path,
            config.strict,
            config.messages.len(),
            config.attributes.len()
        );
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("could not read file")?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(&content).context("could not parse TOML")
    }

    /// Load configuration from default path (./validation.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("validation.toml")
    }
}
