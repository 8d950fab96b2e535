//! Dump truck catalog types

use serde::{Deserialize, Serialize};

use super::distinct;

/// Dump truck specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpTruckSpec {
    pub brand: String,
    /// Body type (rigid, articulated, ...)
    pub truck_type: String,
    pub model: String,
    /// Rated payload in tonnes
    pub payload_tonnes: f64,
}

/// Immutable snapshot of the dump truck catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DumpTruckCatalog {
    trucks: Vec<DumpTruckSpec>,
}

impl DumpTruckCatalog {
    pub fn new(trucks: Vec<DumpTruckSpec>) -> Self {
        Self { trucks }
    }

    pub fn trucks(&self) -> &[DumpTruckSpec] {
        &self.trucks
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    pub fn brands(&self) -> Vec<&str> {
        distinct(self.trucks.iter().map(|t| t.brand.as_str()))
    }

    pub fn types(&self, brand: &str) -> Vec<&str> {
        distinct(
            self.trucks
                .iter()
                .filter(|t| t.brand == brand)
                .map(|t| t.truck_type.as_str()),
        )
    }

    pub fn models(&self, brand: &str, truck_type: &str) -> Vec<&str> {
        distinct(
            self.trucks
                .iter()
                .filter(|t| t.brand == brand && t.truck_type == truck_type)
                .map(|t| t.model.as_str()),
        )
    }

    /// Look up a truck by its full selection key
    pub fn find(&self, brand: &str, truck_type: &str, model: &str) -> Option<&DumpTruckSpec> {
        self.trucks
            .iter()
            .find(|t| t.brand == brand && t.truck_type == truck_type && t.model == model)
    }
}
