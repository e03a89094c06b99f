pub mod summary;
pub mod totals;
