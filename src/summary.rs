use crate::aggregate::{accumulate, aggregate, average, read_vector, Aggregate};
use crate::config::AnalysisConfig;
use crate::error::{BettiError, BtResult};
use crate::source::ResultSource;
use crate::vector::{dimension_label, BettiVector};
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;
use tracing::{debug, info};

/// The header always names at least these many dimensions.
pub const MIN_HEADER_DIMS: usize = 4;
pub const PROBABILITY_LABEL: &str = "Perc. Prob.";

#[derive(Debug, Clone, Serialize)]
pub struct BucketRow {
    pub probability: String,
    pub files: usize,
    pub averages: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbabilitySummary {
    pub size: String,
    pub rows: Vec<BucketRow>,
}

impl ProbabilitySummary {
    /// Number of dimension columns needed to show every row.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.averages.len())
            .max()
            .unwrap_or(0)
            .max(MIN_HEADER_DIMS)
    }

    pub fn header(&self) -> Vec<String> {
        let mut header = vec![PROBABILITY_LABEL.to_string()];
        header.extend((0..self.width()).map(dimension_label));
        header
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileVector {
    pub path: PathBuf,
    pub counts: BettiVector,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexedTotals {
    pub size: String,
    pub files: Vec<FileVector>,
    pub aggregate: Aggregate,
}

/// Fixed-point rendering shared by the TSV and table reports.
pub fn format_average(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Numeric order for probability names; names that are not numbers go last.
fn probability_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Reads `<root>/<size>/<i><suffix>` for `i in 0..count` and sums them.
pub fn totals_by_index<S: ResultSource + ?Sized>(
    source: &S,
    config: &AnalysisConfig,
    size: &str,
    count: usize,
) -> BtResult<IndexedTotals> {
    info!("Summing {} indexed results for size {}", count, size);

    let mut files = Vec::with_capacity(count);
    let mut agg = Aggregate::new();

    for i in 0..count {
        let path = config.indexed_file(size, i);
        let counts = read_vector(source, &path)?;
        accumulate(&mut agg, &counts, &path, config.strict_dims)?;
        files.push(FileVector { path, counts });
    }

    Ok(IndexedTotals {
        size: size.to_string(),
        files,
        aggregate: agg,
    })
}

/// Averages every probability bucket under `<root>/<size>`, one row per bucket.
pub fn summarize_by_probability<S: ResultSource + ?Sized>(
    source: &S,
    config: &AnalysisConfig,
    size: &str,
) -> BtResult<ProbabilitySummary> {
    let dir = config.size_dir(size);
    let mut buckets = source.list_buckets(&dir)?;
    buckets.sort_by(|a, b| probability_order(&a.0, &b.0));

    info!(
        "Found {} probability buckets in {}",
        buckets.len(),
        dir.display()
    );

    let mut rows = Vec::with_capacity(buckets.len());
    for (probability, path) in buckets {
        let files = source.list_result_files(&path, &config.suffix)?;
        let agg = aggregate(source, &files, config.strict_dims)?;
        let averages = average(&agg, files.len()).ok_or_else(|| BettiError::EmptyBucket {
            bucket: probability.clone(),
        })?;

        debug!("p={} files={} avg={:?}", probability, files.len(), averages);

        rows.push(BucketRow {
            probability,
            files: files.len(),
            averages,
        });
    }

    Ok(ProbabilitySummary {
        size: size.to_string(),
        rows,
    })
}
