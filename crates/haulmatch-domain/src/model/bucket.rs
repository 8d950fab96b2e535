//! Bucket catalog types

use haulmatch_types::BucketCatalogKind;
use serde::{Deserialize, Serialize};

/// Catalog bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSpec {
    pub name: String,
    /// Heaped capacity in m³
    pub size_m3: f64,
    /// Empty bucket weight in kg
    pub weight_kg: f64,
    /// Duty class used to gate compatibility with the machine
    pub class: i32,
}

/// Immutable snapshot of one bucket catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketCatalog {
    kind: BucketCatalogKind,
    buckets: Vec<BucketSpec>,
}

impl BucketCatalog {
    pub fn new(kind: BucketCatalogKind, buckets: Vec<BucketSpec>) -> Self {
        Self { kind, buckets }
    }

    pub fn kind(&self) -> BucketCatalogKind {
        self.kind
    }

    /// Buckets in catalog order
    pub fn buckets(&self) -> &[BucketSpec] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The bucket the machine runs today
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentBucket {
    pub size_m3: f64,
    pub weight_kg: f64,
}

/// Largest compliant bucket and the load it was validated with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalBucketResult {
    pub bucket: BucketSpec,
    /// Quick hitch + material + bucket weight, in kg
    pub total_suspended_load_kg: f64,
}
