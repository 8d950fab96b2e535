//! Largest compatible bucket under the safe working load

use haulmatch_types::Result;
use tracing::debug;

use crate::guard::{ensure_non_negative, ensure_positive};
use crate::model::{BucketCatalog, BucketSpec, OptimalBucketResult, SelectionInput};

/// Buckets more than this many classes above the machine are incompatible
pub const CLASS_CEILING_OFFSET: i32 = 10;

/// Material carried by a full bucket, in kg
pub fn bucket_load(size_m3: f64, material_density: f64) -> f64 {
    size_m3 * material_density
}

/// Select the largest bucket whose fully loaded weight stays within `swl`
///
/// Scans the whole catalog. A candidate survives when its class is at most
/// `excavator_class + CLASS_CEILING_OFFSET` and quick hitch + material +
/// bucket weight does not exceed `swl`. Among survivors the largest size
/// wins; on equal size the earlier catalog entry is kept.
///
/// Returns `Ok(None)` when nothing survives.
pub fn select_optimal_bucket(
    input: &SelectionInput,
    catalog: &BucketCatalog,
    swl: f64,
    excavator_class: i32,
) -> Result<Option<OptimalBucketResult>> {
    ensure_positive("material density", input.material_density)?;
    ensure_non_negative("quick hitch weight", input.quick_hitch_weight_kg)?;
    ensure_positive("safe working load", swl)?;

    let class_ceiling = excavator_class.saturating_add(CLASS_CEILING_OFFSET);
    let mut best: Option<(&BucketSpec, f64)> = None;

    for candidate in catalog.buckets() {
        if candidate.class > class_ceiling {
            debug!(bucket = %candidate.name, class = candidate.class, class_ceiling, "rejected: class");
            continue;
        }

        let total = input.quick_hitch_weight_kg
            + bucket_load(candidate.size_m3, input.material_density)
            + candidate.weight_kg;
        if total > swl {
            debug!(bucket = %candidate.name, total_kg = total, swl_kg = swl, "rejected: over SWL");
            continue;
        }

        let current_best = best.map(|(b, _)| b.size_m3).unwrap_or(0.0);
        if candidate.size_m3 > current_best {
            best = Some((candidate, total));
        }
    }

    let result = best.map(|(bucket, total)| OptimalBucketResult {
        bucket: bucket.clone(),
        total_suspended_load_kg: total,
    });
    match &result {
        Some(r) => debug!(
            bucket = %r.bucket.name,
            size_m3 = r.bucket.size_m3,
            total_kg = r.total_suspended_load_kg,
            "selected bucket"
        ),
        None => debug!(catalog = %catalog.kind(), "no bucket within SWL and class limits"),
    }
    Ok(result)
}
