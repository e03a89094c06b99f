mod plain;
mod tables;

use betti_summary::config::OutputFormat;
use betti_summary::summary::{IndexedTotals, ProbabilitySummary};
use betti_summary::BtResult;

pub fn render_summary(
    summary: &ProbabilitySummary,
    format: OutputFormat,
    precision: usize,
) -> BtResult<String> {
    match format {
        OutputFormat::Tsv => plain::summary_tsv(summary, precision),
        OutputFormat::Table => Ok(tables::summary(summary, precision)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

pub fn render_totals(totals: &IndexedTotals, format: OutputFormat) -> BtResult<String> {
    match format {
        OutputFormat::Tsv => Ok(plain::totals_lines(totals)),
        OutputFormat::Table => Ok(tables::totals(totals)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(totals)?),
    }
}

/// Writes a rendered report to stdout, ending with exactly one newline.
pub fn emit(out: &str) {
    if out.ends_with('\n') {
        print!("{}", out);
    } else {
        println!("{}", out);
    }
}
