mod commands;
mod input;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daftar-validate")]
#[command(version, about = "Validate Daftar records against accounting schemas or rule files", long_about = None)]
struct Cli {
    /// Validator config (strictness, messages, field names)
    #[arg(short, long, global = true, default_value = "validation.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record (or an array of records)
    Check {
        /// JSON file to validate, `-` for stdin
        input: PathBuf,

        /// Built-in schema name (see `schemas`)
        #[arg(short, long, conflicts_with = "rules", required_unless_present = "rules")]
        schema: Option<String>,

        /// Rule file (.toml or .json) mapping fields to rules
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Reject malformed rules instead of failing validation
        #[arg(long)]
        strict: bool,

        /// Print the JSON failure body instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the built-in rule catalog
    Rules,

    /// List built-in schemas, or print one
    Schemas {
        /// Schema to print
        name: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            input,
            schema,
            rules,
            strict,
            json,
        } => commands::check::execute(&commands::check::CheckArgs {
            input,
            schema,
            rules,
            config: cli.config,
            strict,
            json,
        }),
        Commands::Rules => commands::rules::execute().map(|_| true),
        Commands::Schemas { name } => commands::schemas::execute(name.as_deref()).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
