//! Comparison Service - bucket selection and productivity use case
//!
//! One call runs the whole pipeline for a single request:
//! 1. Validate the selection input
//! 2. Resolve the safe working load for the exact machine configuration
//! 3. Resolve the machine class from its model
//! 4. Select the largest compatible bucket from the chosen catalog
//! 5. Align the truck payload with whole passes for both buckets
//! 6. Compute the paired productivity report
//!
//! Steps 2-4 can end the pipeline with a negative outcome; nothing partial
//! is returned.

use haulmatch_domain::model::{
    BucketCatalog, MachineConfiguration, OptimalBucketResult, PassMatch, ProductivityReport,
    SelectionInput, SwlRecord, SwlTable,
};
use haulmatch_domain::repository::ReferenceTables;
use haulmatch_domain::service::{
    bucket_load, compute_productivity, find_swl_record, match_payload, resolve_class,
    select_optimal_bucket,
};
use haulmatch_types::{BucketCatalogKind, Result};
use serde::Serialize;
use tracing::info;

/// Everything a completed comparison produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub input: SelectionInput,
    /// SWL row the selection was validated against
    pub swl: SwlRecord,
    pub excavator_class: i32,
    pub optimal: OptimalBucketResult,
    /// Pass alignment for the current bucket
    pub old_match: PassMatch,
    /// Pass alignment for the selected bucket
    pub new_match: PassMatch,
    pub report: ProductivityReport,
}

/// Result of one comparison request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// No SWL row matches the machine configuration
    ConfigurationNotFound { configuration: MachineConfiguration },

    /// The model has no class in the SWL table
    ///
    /// Unreachable while the configuration lookup and the class lookup read
    /// the same table; kept so a separate class source can report a miss.
    ClassNotFound { model: String },

    /// No catalog bucket satisfies both the class and SWL limits
    NoCompatibleBucket {
        swl_kg: f64,
        excavator_class: i32,
        catalog: BucketCatalogKind,
    },

    Completed(Box<Comparison>),
}

/// Run the comparison against one SWL table and one bucket catalog
pub fn run_comparison(
    input: &SelectionInput,
    swl_table: &SwlTable,
    catalog: &BucketCatalog,
) -> Result<ComparisonOutcome> {
    input.validate()?;

    let Some(swl) = find_swl_record(&input.configuration, swl_table)? else {
        info!("no SWL row for {}", input.configuration);
        return Ok(ComparisonOutcome::ConfigurationNotFound {
            configuration: input.configuration.clone(),
        });
    };

    let Some(excavator_class) = resolve_class(&input.configuration.model, swl_table)? else {
        info!(model = %input.configuration.model, "no class for model");
        return Ok(ComparisonOutcome::ClassNotFound {
            model: input.configuration.model.clone(),
        });
    };
    info!(swl_kg = swl.swl_kg, excavator_class, "machine resolved");

    let Some(optimal) = select_optimal_bucket(input, catalog, swl.swl_kg, excavator_class)? else {
        info!(catalog = %catalog.kind(), "no compatible bucket");
        return Ok(ComparisonOutcome::NoCompatibleBucket {
            swl_kg: swl.swl_kg,
            excavator_class,
            catalog: catalog.kind(),
        });
    };
    info!(
        bucket = %optimal.bucket.name,
        size_m3 = optimal.bucket.size_m3,
        "bucket selected"
    );

    let rated_payload_kg = input.rated_payload_kg();
    let old_match = match_payload(
        rated_payload_kg,
        bucket_load(input.current_bucket.size_m3, input.material_density),
    )?;
    let new_match = match_payload(
        rated_payload_kg,
        bucket_load(optimal.bucket.size_m3, input.material_density),
    )?;

    let report = compute_productivity(input, &optimal, &old_match, &new_match)?;
    info!(
        productivity_gain_percent = report.productivity_gain_percent,
        "comparison completed"
    );

    Ok(ComparisonOutcome::Completed(Box::new(Comparison {
        input: input.clone(),
        swl: swl.clone(),
        excavator_class,
        optimal,
        old_match,
        new_match,
        report,
    })))
}

/// Run the comparison with the catalog the input asks for
pub fn run_with_tables(input: &SelectionInput, tables: &ReferenceTables) -> Result<ComparisonOutcome> {
    run_comparison(input, &tables.swl, tables.catalog(input.catalog))
}
