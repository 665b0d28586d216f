use console::style;
use serde_json::Value;

use crate::skill::SkillRecord;

const RULE_WIDTH: usize = 50;

pub fn heading(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn info(text: &str) {
    println!("{}", text);
}

pub fn success(text: &str) {
    println!("{}", style(text).green());
}

pub fn warn(text: &str) {
    eprintln!("{}", style(text).yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", style(text).red());
}

/// Status line for a completed operation.
pub fn done(text: &str) {
    success(&format!("✅ {}", text));
}

/// Status line for an operation that was refused or could not finish.
/// Goes to stdout with the other status lines; `error` is for hard failures.
pub fn failed(text: &str) {
    println!("{}", style(format!("❌ {}", text)).red());
}

pub fn list_item(text: &str) {
    println!("  {} {}", style("-").dim(), text);
}

pub fn rule() {
    println!("{}", style("-".repeat(RULE_WIDTH)).dim());
}

/// Formats one numbered row of the skills listing. `index` is 1-based.
pub fn skill_row(index: usize, skill: &SkillRecord) -> String {
    let field = |key: &str| skill.fields().get(key).map(value_text);
    format!(
        "{:2}. {:<20} {:>3}% [{:<6}] ({})",
        index,
        field("name").unwrap_or_default(),
        skill.percentage().map(value_text).unwrap_or_default(),
        field("colorClass").unwrap_or_default(),
        field("category").unwrap_or_else(|| "Uncategorized".to_string()),
    )
}

/// Renders a JSON value the way a person typed it: strings without quotes.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
