//! Haul-cycle productivity comparison

use haulmatch_types::{Error, Result};
use tracing::debug;

use super::bucket_selector::bucket_load;
use crate::model::{
    DailyProjection, MetricPair, OptimalBucketResult, PassMatch, ProductivityReport,
    SelectionInput,
};

/// Share of each hour the excavator actually spends loading trucks
pub const HAUL_EFFICIENCY: f64 = 0.75;

/// Swing count the daily projection is normalised to
pub const REFERENCE_SWINGS_PER_DAY: f64 = 1000.0;

/// Swing-count uplift for the improved cycle time scenario
pub const IMPROVED_CYCLE_FACTOR: f64 = 1.10;

/// Truck loading figures for one bucket
#[derive(Debug, Clone, Copy)]
struct CycleMetrics {
    time_to_fill_min: f64,
    trucks_per_hour: f64,
    swings_per_hour: f64,
    truck_tonnage_per_hour: f64,
    delivered_tonnage_per_hour: f64,
}

fn cycle_metrics(
    capacity_m3: f64,
    material_density: f64,
    pass: &PassMatch,
    swings_per_minute: f64,
) -> CycleMetrics {
    let time_to_fill_min = pass.pass_count / swings_per_minute;
    let trucks_per_hour = if time_to_fill_min > 0.0 && time_to_fill_min.is_finite() {
        (60.0 / time_to_fill_min) * HAUL_EFFICIENCY
    } else {
        0.0
    };
    let swings_per_hour = pass.pass_count * trucks_per_hour;

    CycleMetrics {
        time_to_fill_min,
        trucks_per_hour,
        swings_per_hour,
        truck_tonnage_per_hour: swings_per_hour * capacity_m3 * material_density / 1000.0,
        delivered_tonnage_per_hour: trucks_per_hour * pass.effective_payload_kg / 1000.0,
    }
}

/// Volume, tonnage and truck count for a fixed number of swings
fn daily_projection(
    capacity: MetricPair,
    material_density: f64,
    rated_payload_kg: f64,
    new_swing_factor: f64,
) -> DailyProjection {
    let volume_old = REFERENCE_SWINGS_PER_DAY * capacity.old;
    let volume_new = REFERENCE_SWINGS_PER_DAY * capacity.new;
    let tonnage_old = volume_old * material_density / 1000.0;
    let tonnage_new = volume_new * material_density / 1000.0;
    let trucks_old = tonnage_old / rated_payload_kg * 1000.0;
    let trucks_new = tonnage_new / rated_payload_kg * 1000.0;

    DailyProjection {
        swings: MetricPair::new(
            REFERENCE_SWINGS_PER_DAY,
            REFERENCE_SWINGS_PER_DAY * new_swing_factor,
        ),
        volume_m3: MetricPair::new(volume_old, new_swing_factor * volume_new),
        tonnage: MetricPair::new(tonnage_old, new_swing_factor * tonnage_new),
        trucks: MetricPair::new(trucks_old, new_swing_factor * trucks_new),
    }
}

/// Compare the current bucket against the selected one
///
/// `old_match` and `new_match` are the pass alignments for the current and
/// selected bucket against the same rated payload.
pub fn compute_productivity(
    input: &SelectionInput,
    optimal: &OptimalBucketResult,
    old_match: &PassMatch,
    new_match: &PassMatch,
) -> Result<ProductivityReport> {
    input.validate()?;
    if !(old_match.pass_count > 0.0 && new_match.pass_count > 0.0) {
        return Err(Error::invalid_input("pass count must be positive"));
    }

    let density = input.material_density;
    let rated_payload_kg = input.rated_payload_kg();
    let capacity = MetricPair::new(input.current_bucket.size_m3, optimal.bucket.size_m3);
    let bucket_payload = MetricPair::new(
        bucket_load(capacity.old, density),
        bucket_load(capacity.new, density),
    );
    let suspended_load = MetricPair::new(
        bucket_payload.old + input.current_bucket.weight_kg + input.quick_hitch_weight_kg,
        optimal.total_suspended_load_kg,
    );

    let old = cycle_metrics(capacity.old, density, old_match, input.swings_per_minute);
    let new = cycle_metrics(capacity.new, density, new_match, input.swings_per_minute);

    let theoretical_swings_per_hour = 60.0 * input.swings_per_minute;
    let theoretical_tonnage = MetricPair::new(
        theoretical_swings_per_hour * capacity.old * density / 1000.0,
        theoretical_swings_per_hour * capacity.new * density / 1000.0,
    );
    let productivity_gain_percent = MetricPair::new(
        theoretical_tonnage.old,
        IMPROVED_CYCLE_FACTOR * theoretical_tonnage.new,
    )
    .percent_change()?;

    debug!(
        trucks_per_hour_old = old.trucks_per_hour,
        trucks_per_hour_new = new.trucks_per_hour,
        productivity_gain_percent,
        "productivity computed"
    );

    Ok(ProductivityReport {
        material_density: density,
        rated_payload_kg,
        capacity_m3: capacity,
        bucket_payload_kg: bucket_payload,
        suspended_load_kg: suspended_load,
        truck_payload_kg: MetricPair::new(
            old_match.effective_payload_kg,
            new_match.effective_payload_kg,
        ),
        fill_factor_percent: MetricPair::new(
            old_match.fill_factor_percent(),
            new_match.fill_factor_percent(),
        ),
        swings_to_fill: MetricPair::new(old_match.pass_count, new_match.pass_count),
        time_to_fill_min: MetricPair::new(old.time_to_fill_min, new.time_to_fill_min),
        trucks_per_hour: MetricPair::new(old.trucks_per_hour, new.trucks_per_hour),
        swings_per_hour: MetricPair::new(old.swings_per_hour, new.swings_per_hour),
        truck_tonnage_per_hour: MetricPair::new(
            old.truck_tonnage_per_hour,
            new.truck_tonnage_per_hour,
        ),
        delivered_tonnage_per_hour: MetricPair::new(
            old.delivered_tonnage_per_hour,
            new.delivered_tonnage_per_hour,
        ),
        theoretical_swings_per_hour,
        theoretical_tonnage_per_hour: theoretical_tonnage,
        daily: daily_projection(capacity, density, rated_payload_kg, 1.0),
        improved_cycle: daily_projection(capacity, density, rated_payload_kg, IMPROVED_CYCLE_FACTOR),
        productivity_gain_percent,
    })
}
