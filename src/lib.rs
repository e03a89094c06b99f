pub mod aggregate;
pub mod config;
pub mod error;
pub mod source;
pub mod summary;
pub mod vector;

pub use aggregate::{aggregate, average, Aggregate};
pub use error::{BettiError, BtResult};
pub use source::{FsSource, MemorySource, ResultSource};
pub use summary::{summarize_by_probability, totals_by_index};
pub use vector::BettiVector;
