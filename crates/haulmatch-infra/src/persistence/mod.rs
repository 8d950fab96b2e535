//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_reference_repo;

pub use file_reference_repo::{FileReferenceRepository, ReferenceDataPaths};
