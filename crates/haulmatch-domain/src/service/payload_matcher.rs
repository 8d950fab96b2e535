//! Truck payload / bucket pass alignment
//!
//! A truck is loaded in whole passes, so the raw `payload / pass_load`
//! rarely describes what happens on site. The search nudges the payload up
//! in small steps until the pass count sits just under a whole number.

use haulmatch_types::{Error, Result};
use tracing::debug;

use crate::guard::ensure_positive;
use crate::model::PassMatch;

/// Tolerance search over effective truck payloads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassSearch {
    /// Upper bound of the search as a multiple of rated payload
    pub max_fill_ratio: f64,
    /// Step as a fraction of rated payload
    pub step_ratio: f64,
    /// Accepted distance below the next whole pass
    pub tolerance: f64,
}

impl Default for PassSearch {
    fn default() -> Self {
        Self {
            max_fill_ratio: 1.10,
            step_ratio: 0.001,
            tolerance: 0.05,
        }
    }
}

impl PassSearch {
    /// Number of steps above rated payload the search may take
    pub fn max_steps(&self) -> u32 {
        ((self.max_fill_ratio - 1.0) / self.step_ratio).round() as u32
    }

    /// Find an effective payload in `[rated, rated * max_fill_ratio]` whose
    /// pass count is within `tolerance` of its ceiling
    ///
    /// Falls back to the rated payload and its unadjusted pass count when no
    /// step qualifies.
    pub fn run(&self, rated_payload: f64, per_pass_load: f64) -> Result<PassMatch> {
        ensure_positive("rated payload", rated_payload)?;
        ensure_positive("per-pass load", per_pass_load)?;
        if !(self.max_fill_ratio >= 1.0 && self.step_ratio > 0.0 && self.tolerance >= 0.0) {
            return Err(Error::invalid_input(format!("invalid pass search {:?}", self)));
        }

        let max_payload = rated_payload * self.max_fill_ratio;
        let step = rated_payload * self.step_ratio;

        // Candidates are rated + step * i, so the rated * max_fill_ratio
        // endpoint itself is tested rather than overshot by a running sum.
        for i in 0..=self.max_steps() {
            let effective = rated_payload + step * f64::from(i);
            if effective > max_payload {
                break;
            }
            let passes = effective / per_pass_load;
            if (passes - passes.ceil()).abs() <= self.tolerance {
                debug!(step = i, effective_kg = effective, passes, "pass count aligned");
                return Ok(PassMatch {
                    rated_payload_kg: rated_payload,
                    effective_payload_kg: effective,
                    pass_count: passes,
                });
            }
        }

        debug!(rated_kg = rated_payload, per_pass_load, "no aligned payload, using rated");
        Ok(PassMatch {
            rated_payload_kg: rated_payload,
            effective_payload_kg: rated_payload,
            pass_count: rated_payload / per_pass_load,
        })
    }
}

/// Align `rated_payload` with whole passes of `per_pass_load` using the
/// standard search (up to +10% in 0.1% steps, 0.05 pass tolerance)
pub fn match_payload(rated_payload: f64, per_pass_load: f64) -> Result<PassMatch> {
    PassSearch::default().run(rated_payload, per_pass_load)
}
