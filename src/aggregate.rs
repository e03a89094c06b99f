use crate::error::{BettiError, BtResult};
use crate::source::ResultSource;
use crate::vector::BettiVector;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Running per-dimension sums across a batch of Betti vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub totals: Vec<u64>,
    pub files: usize,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one vector. Dimensions not seen before start from zero.
    /// On overflow nothing is changed and the offending dimension is returned.
    pub fn add(&mut self, vector: &BettiVector) -> Result<(), usize> {
        let mut sums = Vec::with_capacity(vector.len());
        for (k, &count) in vector.as_slice().iter().enumerate() {
            let total = self.totals.get(k).copied().unwrap_or(0);
            sums.push(total.checked_add(count).ok_or(k)?);
        }

        if sums.len() > self.totals.len() {
            self.totals.resize(sums.len(), 0);
        }
        self.totals[..sums.len()].copy_from_slice(&sums);
        self.files += 1;
        Ok(())
    }

    /// Sums `vectors` in order, failing with the overflowing dimension.
    pub fn try_from_vectors<'a, I>(vectors: I) -> Result<Self, usize>
    where
        I: IntoIterator<Item = &'a BettiVector>,
    {
        let mut agg = Aggregate::new();
        for v in vectors {
            agg.add(v)?;
        }
        Ok(agg)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Per-dimension mean over `count` files. `None` when `count` is zero.
    pub fn average(&self, count: usize) -> Option<Vec<f64>> {
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(self.totals.iter().map(|&t| t as f64 / n).collect())
    }

    /// Mean over the files that were actually added.
    pub fn mean(&self) -> Option<Vec<f64>> {
        self.average(self.files)
    }
}

/// Reads and parses a single result file through `source`.
pub fn read_vector<S: ResultSource + ?Sized>(source: &S, path: &Path) -> BtResult<BettiVector> {
    let text = source.read_to_string(path)?;
    BettiVector::parse(&text, path)
}

/// Folds `vector` into `agg`, checking its width against what has been seen so far.
pub(crate) fn accumulate(
    agg: &mut Aggregate,
    vector: &BettiVector,
    path: &Path,
    strict_dims: bool,
) -> BtResult<()> {
    if agg.files > 0 && vector.len() != agg.len() {
        if strict_dims {
            return Err(BettiError::DimensionMismatch {
                path: path.to_path_buf(),
                expected: agg.len(),
                found: vector.len(),
            });
        }
        warn!(
            "'{}' has {} dimensions, running aggregate has {}",
            path.display(),
            vector.len(),
            agg.len()
        );
    }
    agg.add(vector).map_err(|dimension| BettiError::Overflow {
        path: path.to_path_buf(),
        dimension,
    })
}

/// Sums the Betti vectors of `files`, in order.
pub fn aggregate<S: ResultSource + ?Sized>(
    source: &S,
    files: &[PathBuf],
    strict_dims: bool,
) -> BtResult<Aggregate> {
    let mut agg = Aggregate::new();
    for path in files {
        let vector = read_vector(source, path)?;
        debug!("{} -> {}", path.display(), vector);
        accumulate(&mut agg, &vector, path, strict_dims)?;
    }
    Ok(agg)
}

/// Free-function form of [`Aggregate::average`].
pub fn average(aggregate: &Aggregate, count: usize) -> Option<Vec<f64>> {
    aggregate.average(count)
}
