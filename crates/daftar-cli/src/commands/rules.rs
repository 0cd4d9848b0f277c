use anyhow::Result;
use colored::Colorize;
use daftar_validation::BUILTIN_RULES;

fn describe(rule: &str) -> &'static str {
    match rule {
        "required" => "present and not blank",
        "nullable" => "skip the other rules when blank",
        "string" => "a string",
        "numeric" => "a finite number or numeric string",
        "integer" => "a whole number",
        "min" => "min:n - length, count or value at least n",
        "max" => "max:n - length, count or value at most n",
        "between" => "between:a,b - length, count or value within [a, b]",
        "email" => "an email address",
        "url" => "an absolute URL",
        "date" => "a calendar date or date-time",
        "boolean" => "true/false, \"true\"/\"false\", 0/1",
        "array" => "a JSON array",
        "object" => "a JSON object",
        "confirmed" => "equals <field>_confirmation (or confirmed:other)",
        "regex" => "regex:pattern - matches the pattern",
        "in" => "in:a,b,... - one of the listed values",
        "notIn" => "notIn:a,b,... - none of the listed values",
        "phone" => "Iranian mobile number",
        "nationalId" => "Iranian national ID with valid checksum",
        "postalCode" => "10-digit postal code",
        "sheba" => "Iranian IBAN (Sheba) with valid checksum",
        _ => "",
    }
}

pub fn execute() -> Result<()> {
    println!("{}", "Built-in rules".green().bold());
    println!();
    for rule in BUILTIN_RULES {
        println!("  {:<12} {}", rule.cyan(), describe(rule));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_is_described() {
        for rule in BUILTIN_RULES {
            assert!(!describe(rule).is_empty(), "{} has no description", rule);
        }
    }
}
