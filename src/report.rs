//! Reporting: run summary, output sample, and distribution breakdowns.
//!
//! We keep formatting code in one place so:
//! - the transformation code stays clean and testable
//! - output changes are localized
//!
//! Nothing here touches the persisted file; it is a console side channel.

use std::collections::HashMap;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::OutputRow;

/// How many output rows the summary previews.
const SAMPLE_LEN: usize = 5;
/// How many currencies the breakdown lists.
const CURRENCY_TOP_N: usize = 10;

/// Format the run summary: counts, retention ratio, destination, sample.
pub fn format_run_summary(run: &RunOutput, output: &Path) -> String {
    let mut out = String::new();

    out.push_str("=== Economic calendar conversion ===\n");
    out.push_str(&format!("Rows read: {}\n", run.rows_read));
    out.push_str(&format!(
        "MEDIUM/HIGH events: {} ({:.1}%)\n",
        run.rows_retained(),
        run.retention_pct()
    ));
    out.push_str(&format!("Output: {}\n", output.display()));

    if !run.rows.is_empty() {
        out.push('\n');
        out.push_str(&format_sample(&run.rows));
    }

    out
}

/// Preview of the first few output rows, one per line.
pub fn format_sample(rows: &[OutputRow]) -> String {
    let shown = rows.len().min(SAMPLE_LEN);
    let mut out = String::new();
    out.push_str(&format!("Sample (first {shown}):\n"));
    for row in rows.iter().take(SAMPLE_LEN) {
        out.push_str(&format!(
            "  {} {} {:<3} {:<6} {}\n",
            row.date, row.time, row.currency, row.impact, row.event
        ));
    }
    out
}

/// Per-currency (top 10) and per-impact distribution of the retained rows.
pub fn format_breakdowns(rows: &[OutputRow]) -> String {
    let mut out = String::new();

    out.push_str("By currency:\n");
    for (currency, count) in count_by(rows, |r| r.currency.as_str()).into_iter().take(CURRENCY_TOP_N) {
        out.push_str(&format!("  {currency}: {count} events\n"));
    }

    out.push_str("By impact:\n");
    for (impact, count) in count_by(rows, |r| r.impact.as_str()) {
        out.push_str(&format!("  {impact}: {count} events\n"));
    }

    out
}

/// Count rows per key, ordered by descending count, ties alphabetical so the
/// report is deterministic.
fn count_by<'a>(rows: &'a [OutputRow], key: impl Fn(&'a OutputRow) -> &'a str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(key(row)).or_default() += 1;
    }
    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
