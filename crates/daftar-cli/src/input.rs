// Loading records and rule files from disk

use anyhow::{bail, Context, Result};
use daftar_validation::{Record, RuleSpecSource};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read records from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

/// A JSON object, or an array of objects
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = read_source(path)?;
    let value: Value =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {:?}", path))?;
    parse_records(value)
}

pub fn parse_records(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                _ => bail!("Record #{} is not a JSON object", i),
            })
            .collect(),
        _ => bail!("Expected a JSON object or an array of objects"),
    }
}

/// Rule file in TOML or JSON, chosen by extension
pub fn load_rules(path: &Path) -> Result<RuleSpecSource> {
    let content = read_source(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let source = if is_json {
        serde_json::from_str(&content).with_context(|| format!("Failed to parse rule file: {:?}", path))?
    } else {
        toml::from_str(&content).with_context(|| format!("Failed to parse rule file: {:?}", path))?
    };
    Ok(source)
}
