//! Repository adapters for the persistence layer

use haulmatch_domain::repository::ReferenceTables;
use haulmatch_infra::persistence::FileReferenceRepository;
use haulmatch_types::Result;
use tracing::info;

use crate::config::Config;

/// Open the file-based reference data repository
pub fn open_reference_repo(config: &Config) -> Result<FileReferenceRepository> {
    Ok(FileReferenceRepository::new(config.reference_paths()?))
}

/// Load a fresh snapshot of every reference table
pub fn load_reference_tables(config: &Config) -> Result<ReferenceTables> {
    let repo = open_reference_repo(config)?;
    let tables = ReferenceTables::load_from(&repo)?;
    info!(
        swl_rows = tables.swl.len(),
        standard_buckets = tables.standard_buckets.len(),
        heavy_duty_buckets = tables.heavy_duty_buckets.len(),
        dump_trucks = tables.dump_trucks.len(),
        "reference data loaded"
    );
    Ok(tables)
}
