//! Productivity comparison output values

use haulmatch_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// Outcome of aligning a truck payload with whole bucket passes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassMatch {
    /// Truck payload as rated, in kg
    pub rated_payload_kg: f64,
    /// Payload the pass count was matched against, in kg
    pub effective_payload_kg: f64,
    /// effective_payload_kg / per-pass load; may be fractional
    pub pass_count: f64,
}

impl PassMatch {
    /// True when the search moved the payload off its rated value
    pub fn is_adjusted(&self) -> bool {
        self.effective_payload_kg != self.rated_payload_kg
    }

    /// Effective payload as a percentage of rated payload
    pub fn fill_factor_percent(&self) -> f64 {
        100.0 * self.effective_payload_kg / self.rated_payload_kg
    }
}

/// Same metric for the current ("old") and selected ("new") bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    pub old: f64,
    pub new: f64,
}

impl MetricPair {
    pub fn new(old: f64, new: f64) -> Self {
        Self { old, new }
    }

    pub fn difference(&self) -> f64 {
        self.new - self.old
    }

    /// (new - old) / old * 100
    pub fn percent_change(&self) -> Result<f64> {
        if self.old == 0.0 {
            return Err(Error::DivisionByZero(
                "percentage change against a zero baseline".to_string(),
            ));
        }
        Ok((self.new - self.old) / self.old * 100.0)
    }
}

/// Fixed-swing-count daily projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProjection {
    pub swings: MetricPair,
    pub volume_m3: MetricPair,
    pub tonnage: MetricPair,
    pub trucks: MetricPair,
}

/// Paired old/new productivity metrics for one comparison request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityReport {
    /// kg/m³
    pub material_density: f64,
    /// Rated truck payload in kg
    pub rated_payload_kg: f64,

    pub capacity_m3: MetricPair,
    pub bucket_payload_kg: MetricPair,
    pub suspended_load_kg: MetricPair,

    /// Effective payload each bucket was matched against
    pub truck_payload_kg: MetricPair,
    pub fill_factor_percent: MetricPair,
    pub swings_to_fill: MetricPair,
    pub time_to_fill_min: MetricPair,
    pub trucks_per_hour: MetricPair,
    pub swings_per_hour: MetricPair,
    pub truck_tonnage_per_hour: MetricPair,
    pub delivered_tonnage_per_hour: MetricPair,

    /// Swing rate with no waiting on trucks
    pub theoretical_swings_per_hour: f64,
    pub theoretical_tonnage_per_hour: MetricPair,

    pub daily: DailyProjection,
    pub improved_cycle: DailyProjection,

    /// Improved-cycle new bucket against current bucket, theoretical t/h
    pub productivity_gain_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change() {
        let pair = MetricPair::new(1.0, 1.5);
        assert!((pair.difference() - 0.5).abs() < f64::EPSILON);
        assert!((pair.percent_change().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        let pair = MetricPair::new(0.0, 1.5);
        assert!(matches!(pair.percent_change(), Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn test_pass_match_fill_factor() {
        let m = PassMatch {
            rated_payload_kg: 30000.0,
            effective_payload_kg: 32610.0,
            pass_count: 7.95,
        };
        assert!(m.is_adjusted());
        assert!((m.fill_factor_percent() - 108.7).abs() < 1e-9);
    }
}
