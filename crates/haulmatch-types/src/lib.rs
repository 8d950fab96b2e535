//! Core types shared across the haulmatch crates

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Which bucket catalog a selection searches
///
/// The two catalogs are disjoint; heavy-duty buckets are only considered
/// when the caller asks for them explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketCatalogKind {
    #[default]
    Standard,
    HeavyDuty,
}

impl BucketCatalogKind {
    pub fn label(&self) -> &'static str {
        match self {
            BucketCatalogKind::Standard => "Standard",
            BucketCatalogKind::HeavyDuty => "Heavy Duty",
        }
    }
}

impl std::fmt::Display for BucketCatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketCatalogKind::Standard => write!(f, "standard"),
            BucketCatalogKind::HeavyDuty => write!(f, "heavy-duty"),
        }
    }
}
