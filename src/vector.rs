use crate::error::{BettiError, BtResult};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// One count per homology dimension, in file order:
/// connected components, B0, B1, B2, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BettiVector(pub Vec<u64>);

impl BettiVector {
    /// Parses the single line of a result file. `path` is only used for error reporting.
    pub fn parse(text: &str, path: &Path) -> BtResult<Self> {
        let line = text.trim_end_matches(&['\n', '\r'][..]);

        let mut counts = Vec::new();
        for (position, token) in line.split_whitespace().enumerate() {
            let value: u64 = token.parse().map_err(|_| BettiError::Parse {
                path: path.to_path_buf(),
                position,
                token: token.to_string(),
            })?;
            counts.push(value);
        }

        if counts.is_empty() {
            return Err(BettiError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        Ok(Self(counts))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl From<Vec<u64>> for BettiVector {
    fn from(counts: Vec<u64>) -> Self {
        Self(counts)
    }
}

impl fmt::Display for BettiVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Column label for dimension `k`: the first slot holds connected components,
/// the rest are B0, B1, ...
pub fn dimension_label(k: usize) -> String {
    match k {
        0 => "Connected Comp.".to_string(),
        _ => format!("B{}", k - 1),
    }
}
