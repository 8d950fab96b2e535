//! Domain model types

pub mod bucket;
pub mod machine;
pub mod report;
pub mod selection;
pub mod truck;

pub use bucket::{BucketCatalog, BucketSpec, CurrentBucket, OptimalBucketResult};
pub use machine::{MachineConfiguration, SwlRecord, SwlTable};
pub use report::{DailyProjection, MetricPair, PassMatch, ProductivityReport};
pub use selection::SelectionInput;
pub use truck::{DumpTruckCatalog, DumpTruckSpec};

/// Distinct values in first-appearance order
pub(crate) fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
