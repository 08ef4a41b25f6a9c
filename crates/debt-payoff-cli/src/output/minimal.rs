use serde_json::Value;

use super::{comparison_of, format_value, single_run_of};

/// Print just the payoff answer: one line per strategy run.
pub fn print_minimal(value: &Value) {
    if let Some(comparison) = comparison_of(value) {
        for key in ["snowball", "avalanche"] {
            if let Some(run) = comparison.get(key) {
                println!("{}: {}", key, summarize(run));
            }
        }
    } else if let Some(run) = single_run_of(value) {
        println!("{}", summarize(run));
    } else {
        println!("{}", format_value(value));
    }
}

fn summarize(run: &Value) -> String {
    let months = run
        .get("monthsToDebtFree")
        .map(format_value)
        .unwrap_or_default();
    let interest = run
        .get("totalInterest")
        .map(format_value)
        .unwrap_or_default();
    format!("debt free in {} months, {} total interest", months, interest)
}
