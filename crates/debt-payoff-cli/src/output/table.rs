use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{comparison_of, format_value, single_run_of};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(comparison) = comparison_of(value) {
        print_comparison_table(comparison);
    } else if let Some(run) = single_run_of(value) {
        print_run_table(run);
    } else {
        print_flat_object(value);
    }
    print_envelope_footer(value);
}

/// One row per strategy, side by side.
fn print_comparison_table(comparison: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Strategy", "Months to debt free", "Total interest", "Total paid"]);
    for key in ["snowball", "avalanche"] {
        if let Some(run) = comparison.get(key) {
            builder.push_record([
                key,
                &field(run, "monthsToDebtFree"),
                &field(run, "totalInterest"),
                &field(run, "totalPaid"),
            ]);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_run_table(run: &Value) {
    if let Value::Object(map) = run {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

/// Warnings and methodology from the computation envelope, if present.
fn print_envelope_footer(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field(run: &Value, key: &str) -> String {
    run.get(key).map(format_value).unwrap_or_default()
}
