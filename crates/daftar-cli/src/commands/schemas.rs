use anyhow::{Context, Result};
use colored::Colorize;
use daftar_validation::schema;

pub fn execute(name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        println!("{}", "Built-in schemas".green().bold());
        println!();
        for name in schema::names() {
            let fields = schema::lookup(name).map(|s| s.len()).unwrap_or(0);
            println!("  {:<14} {} fields", name.cyan(), fields);
        }
        return Ok(());
    };

    let pairs = schema::lookup(name).with_context(|| format!("Unknown schema `{}`", name))?;
    println!("{}", name.green().bold());
    println!();
    for (field, rules) in pairs {
        println!("  {:<14} {}", field.cyan(), rules);
    }
    Ok(())
}
