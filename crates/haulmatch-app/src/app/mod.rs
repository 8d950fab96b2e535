//! Application use cases

mod comparison_service;

pub use comparison_service::{run_comparison, run_with_tables, Comparison, ComparisonOutcome};
