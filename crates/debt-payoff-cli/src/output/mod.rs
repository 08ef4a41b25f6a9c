pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `{snowball, avalanche}` pair, whether bare or inside the
/// computation envelope.
pub fn comparison_of(value: &Value) -> Option<&Value> {
    let candidate = value.get("result").unwrap_or(value);
    if candidate.get("snowball").is_some() && candidate.get("avalanche").is_some() {
        Some(candidate)
    } else {
        None
    }
}

/// A single run summary, whether bare or inside the computation envelope.
pub fn single_run_of(value: &Value) -> Option<&Value> {
    let candidate = value.get("result").unwrap_or(value);
    if candidate.get("monthsToDebtFree").is_some() {
        Some(candidate)
    } else {
        None
    }
}

/// Render a leaf JSON value without quotes around strings.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
