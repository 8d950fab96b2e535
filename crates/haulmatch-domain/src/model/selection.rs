//! Per-request selection input

use haulmatch_types::{BucketCatalogKind, Result};
use serde::{Deserialize, Serialize};

use super::{CurrentBucket, MachineConfiguration};
use crate::guard::{ensure_non_negative, ensure_positive};

/// Everything one bucket comparison needs besides the reference tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionInput {
    pub configuration: MachineConfiguration,
    /// Material density in kg/m³
    pub material_density: f64,
    /// Quick hitch weight in kg, zero when the machine has none
    pub quick_hitch_weight_kg: f64,
    pub current_bucket: CurrentBucket,
    /// Rated dump truck payload in tonnes
    pub truck_payload_tonnes: f64,
    pub swings_per_minute: f64,
    pub catalog: BucketCatalogKind,
}

impl SelectionInput {
    /// Reject inputs that would otherwise divide by zero or produce NaN
    pub fn validate(&self) -> Result<()> {
        ensure_positive("material density", self.material_density)?;
        ensure_non_negative("quick hitch weight", self.quick_hitch_weight_kg)?;
        ensure_positive("current bucket size", self.current_bucket.size_m3)?;
        ensure_non_negative("current bucket weight", self.current_bucket.weight_kg)?;
        ensure_positive("truck payload", self.truck_payload_tonnes)?;
        ensure_positive("swings per minute", self.swings_per_minute)?;
        Ok(())
    }

    /// Rated truck payload in kg
    pub fn rated_payload_kg(&self) -> f64 {
        self.truck_payload_tonnes * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulmatch_types::Error;

    fn input() -> SelectionInput {
        SelectionInput {
            configuration: MachineConfiguration {
                make: "X".to_string(),
                model: "Y".to_string(),
                boom_length_m: 6.0,
                arm_length_m: 3.0,
                counterweight_kg: 4000.0,
                shoe_width_mm: 600.0,
                reach_m: 10.0,
            },
            material_density: 1500.0,
            quick_hitch_weight_kg: 0.0,
            current_bucket: CurrentBucket {
                size_m3: 1.0,
                weight_kg: 1100.0,
            },
            truck_payload_tonnes: 30.0,
            swings_per_minute: 3.0,
            catalog: BucketCatalogKind::Standard,
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input().validate().is_ok());
        assert!((input().rated_payload_kg() - 30000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_density_rejected() {
        let mut i = input();
        i.material_density = 0.0;
        assert!(matches!(i.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_zero_swings_rejected() {
        let mut i = input();
        i.swings_per_minute = 0.0;
        assert!(matches!(i.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_negative_quick_hitch_rejected() {
        let mut i = input();
        i.quick_hitch_weight_kg = -10.0;
        assert!(i.validate().is_err());
    }

    #[test]
    fn test_zero_current_bucket_rejected() {
        let mut i = input();
        i.current_bucket.size_m3 = 0.0;
        assert!(i.validate().is_err());
    }
}
