//! Reference data access

use haulmatch_types::{BucketCatalogKind, Result};

use crate::model::{BucketCatalog, DumpTruckCatalog, SwlTable};

/// Source of the three reference datasets
pub trait ReferenceDataRepository {
    /// Load the machine SWL table
    fn swl_table(&self) -> Result<SwlTable>;

    /// Load one bucket catalog
    fn bucket_catalog(&self, kind: BucketCatalogKind) -> Result<BucketCatalog>;

    /// Load the dump truck catalog
    fn dump_trucks(&self) -> Result<DumpTruckCatalog>;
}

/// Immutable snapshot of every reference table, handed to one comparison
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub swl: SwlTable,
    pub standard_buckets: BucketCatalog,
    pub heavy_duty_buckets: BucketCatalog,
    pub dump_trucks: DumpTruckCatalog,
}

impl ReferenceTables {
    /// Load every table from a repository
    pub fn load_from<R: ReferenceDataRepository + ?Sized>(repo: &R) -> Result<Self> {
        Ok(Self {
            swl: repo.swl_table()?,
            standard_buckets: repo.bucket_catalog(BucketCatalogKind::Standard)?,
            heavy_duty_buckets: repo.bucket_catalog(BucketCatalogKind::HeavyDuty)?,
            dump_trucks: repo.dump_trucks()?,
        })
    }

    pub fn catalog(&self, kind: BucketCatalogKind) -> &BucketCatalog {
        match kind {
            BucketCatalogKind::Standard => &self.standard_buckets,
            BucketCatalogKind::HeavyDuty => &self.heavy_duty_buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BucketSpec;

    struct InMemory;

    impl ReferenceDataRepository for InMemory {
        fn swl_table(&self) -> Result<SwlTable> {
            Ok(SwlTable::default())
        }

        fn bucket_catalog(&self, kind: BucketCatalogKind) -> Result<BucketCatalog> {
            let name = match kind {
                BucketCatalogKind::Standard => "GP",
                BucketCatalogKind::HeavyDuty => "HD",
            };
            Ok(BucketCatalog::new(
                kind,
                vec![BucketSpec {
                    name: name.to_string(),
                    size_m3: 1.0,
                    weight_kg: 900.0,
                    class: 20,
                }],
            ))
        }

        fn dump_trucks(&self) -> Result<DumpTruckCatalog> {
            Ok(DumpTruckCatalog::default())
        }
    }

    #[test]
    fn test_catalog_by_kind() {
        let tables = ReferenceTables::load_from(&InMemory).unwrap();
        assert_eq!(tables.catalog(BucketCatalogKind::Standard).buckets()[0].name, "GP");
        assert_eq!(tables.catalog(BucketCatalogKind::HeavyDuty).buckets()[0].name, "HD");
        assert_eq!(tables.catalog(BucketCatalogKind::HeavyDuty).kind(), BucketCatalogKind::HeavyDuty);
    }
}
