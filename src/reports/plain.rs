use betti_summary::summary::{format_average, IndexedTotals, ProbabilitySummary};
use betti_summary::{BettiError, BtResult};

/// Header line, then one tab-separated row per probability bucket.
pub fn summary_tsv(summary: &ProbabilitySummary, precision: usize) -> BtResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(Vec::new());

    wtr.write_record(summary.header())?;
    for row in &summary.rows {
        let mut record = vec![row.probability.clone()];
        record.extend(row.averages.iter().map(|&v| format_average(v, precision)));
        wtr.write_record(&record)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| BettiError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Every file's vector on its own line, then the running totals.
pub fn totals_lines(totals: &IndexedTotals) -> String {
    let mut out = String::new();
    for fv in &totals.files {
        out.push_str(&fv.counts.to_string());
        out.push('\n');
    }
    out.push_str(&format!("{:?}\n", totals.aggregate.totals));
    out
}
