use serde_json::Value;
use std::io;

use super::{comparison_of, format_value, single_run_of};

const RUN_HEADERS: [&str; 4] = ["strategy", "months_to_debt_free", "total_interest", "total_paid"];
const RUN_FIELDS: [&str; 3] = ["monthsToDebtFree", "totalInterest", "totalPaid"];

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(comparison) = comparison_of(value) {
        let _ = wtr.write_record(RUN_HEADERS);
        for key in ["snowball", "avalanche"] {
            if let Some(run) = comparison.get(key) {
                write_run(&mut wtr, key, run);
            }
        }
    } else if let Some(run) = single_run_of(value) {
        let _ = wtr.write_record(RUN_HEADERS);
        let strategy = run
            .get("strategy")
            .map(format_value)
            .unwrap_or_default();
        write_run(&mut wtr, &strategy, run);
    } else if let Value::Object(map) = value {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &format_value(val)]);
        }
    }

    let _ = wtr.flush();
}

fn write_run(wtr: &mut csv::Writer<io::StdoutLock<'_>>, strategy: &str, run: &Value) {
    let mut row = vec![strategy.to_string()];
    row.extend(
        RUN_FIELDS
            .iter()
            .map(|f| run.get(*f).map(format_value).unwrap_or_default()),
    );
    let _ = wtr.write_record(&row);
}
