use crate::input::{load_records, load_rules};
use anyhow::{Context, Result};
use colored::Colorize;
use daftar_validation::{schema, Engine, ErrorSet, RuleSpec, ValidationFailure, ValidatorConfig};
use std::path::PathBuf;

pub struct CheckArgs {
    pub input: PathBuf,
    pub schema: Option<String>,
    pub rules: Option<PathBuf>,
    pub config: PathBuf,
    pub strict: bool,
    pub json: bool,
}

/// Returns whether every record passed
pub fn execute(args: &CheckArgs) -> Result<bool> {
    let config = ValidatorConfig::load(&args.config)?;
    let engine = Engine::from_config(&config).strict(config.strict || args.strict);

    let spec = build_spec(&engine, args)?;
    let records = load_records(&args.input)?;
    tracing::info!("Validating {} record(s) against {} field(s)", records.len(), spec.len());

    let results: Vec<ErrorSet> = records
        .iter()
        .map(|record| engine.validate(record, &spec).into_errors())
        .collect();
    let all_passed = results.iter().all(ErrorSet::is_empty);

    if args.json {
        print_json(&results)?;
    } else {
        print_text(&results);
    }

    Ok(all_passed)
}

fn build_spec(engine: &Engine, args: &CheckArgs) -> Result<RuleSpec> {
    if let Some(name) = &args.schema {
        let pairs = schema::lookup(name).with_context(|| {
            format!(
                "Unknown schema `{}` (available: {})",
                name,
                schema::names().collect::<Vec<_>>().join(", ")
            )
        })?;
        return engine
            .compile_pairs(pairs)
            .with_context(|| format!("Invalid rules in schema `{}`", name));
    }

    let path = args
        .rules
        .as_ref()
        .context("Either --schema or --rules is required")?;
    let source = load_rules(path)?;
    engine
        .compile(&source)
        .with_context(|| format!("Invalid rules in {:?}", path))
}

fn print_json(results: &[ErrorSet]) -> Result<()> {
    let bodies: Vec<serde_json::Value> = results
        .iter()
        .map(|errors| {
            if errors.is_empty() {
                serde_json::json!({ "success": true })
            } else {
                ValidationFailure::from_first_error(errors.clone()).to_json()
            }
        })
        .collect();

    let output = if bodies.len() == 1 {
        serde_json::to_string_pretty(&bodies[0])?
    } else {
        serde_json::to_string_pretty(&bodies)?
    };
    println!("{}", output);
    Ok(())
}

fn print_text(results: &[ErrorSet]) {
    let multiple = results.len() > 1;

    for (index, errors) in results.iter().enumerate() {
        let label = if multiple {
            format!("Record #{}", index)
        } else {
            "Record".to_string()
        };

        if errors.is_empty() {
            println!("{} {}", "✓".green().bold(), label);
            continue;
        }

        println!("{} {} ({} errors)", "✗".red().bold(), label, errors.count());
        for (field, messages) in errors.iter() {
            println!("  {}", field.cyan());
            for message in messages {
                println!("    - {}", message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn args(input: PathBuf) -> CheckArgs {
        CheckArgs {
            input,
            schema: Some("expense".to_string()),
            rules: None,
            config: PathBuf::from("does-not-exist.toml"),
            strict: false,
            json: true,
        }
    }

    #[test]
    fn test_check_passing_record() {
        let input = write_temp(
            ".json",
            r#"{"title": "Rent", "amount": 12000000, "expense_date": "2024-04-01", "category": "office"}"#,
        );
        assert!(execute(&args(input.path().to_path_buf())).unwrap());
    }

    #[test]
    fn test_check_failing_records() {
        let input = write_temp(".json", r#"[{"title": "Rent"}, {"title": ""}]"#);
        assert!(!execute(&args(input.path().to_path_buf())).unwrap());
    }

    #[test]
    fn test_unknown_schema_is_an_error() {
        let input = write_temp(".json", "{}");
        let mut check = args(input.path().to_path_buf());
        check.schema = Some("report".to_string());

        let err = execute(&check).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown schema `report`"));
    }

    #[test]
    fn test_strict_rule_file_is_rejected() {
        let input = write_temp(".json", "{}");
        let rules = write_temp(".toml", "code = \"required|unique:products\"\n");
        let mut check = args(input.path().to_path_buf());
        check.schema = None;
        check.rules = Some(rules.path().to_path_buf());
        check.strict = true;

        assert!(execute(&check).is_err());
    }
}
