//! File-based implementation of ReferenceDataRepository

use std::path::{Path, PathBuf};

use haulmatch_domain::model::{BucketCatalog, DumpTruckCatalog, SwlTable};
use haulmatch_domain::repository::ReferenceDataRepository;
use haulmatch_types::{BucketCatalogKind, Error};

use crate::reference_csv::{load_bucket_catalog, load_dump_trucks, load_swl_table, CsvLoaderError};

/// Locations of the four reference CSV files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataPaths {
    pub swl: PathBuf,
    pub standard_buckets: PathBuf,
    pub heavy_duty_buckets: PathBuf,
    pub dump_trucks: PathBuf,
}

impl ReferenceDataPaths {
    /// Default file names inside one data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            swl: dir.join("excavator_swl.csv"),
            standard_buckets: dir.join("bucket_data.csv"),
            heavy_duty_buckets: dir.join("bhc_bucket_data.csv"),
            dump_trucks: dir.join("dump_trucks.csv"),
        }
    }

    pub fn bucket_catalog(&self, kind: BucketCatalogKind) -> &Path {
        match kind {
            BucketCatalogKind::Standard => &self.standard_buckets,
            BucketCatalogKind::HeavyDuty => &self.heavy_duty_buckets,
        }
    }
}

/// Reference data read from CSV files on every call
pub struct FileReferenceRepository {
    paths: ReferenceDataPaths,
}

impl FileReferenceRepository {
    pub fn new(paths: ReferenceDataPaths) -> Self {
        Self { paths }
    }
}

fn load_error(path: &Path, err: CsvLoaderError) -> Error {
    Error::DataLoad {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

impl ReferenceDataRepository for FileReferenceRepository {
    fn swl_table(&self) -> Result<SwlTable, Error> {
        load_swl_table(&self.paths.swl).map_err(|e| load_error(&self.paths.swl, e))
    }

    fn bucket_catalog(&self, kind: BucketCatalogKind) -> Result<BucketCatalog, Error> {
        let path = self.paths.bucket_catalog(kind);
        load_bucket_catalog(path, kind).map_err(|e| load_error(path, e))
    }

    fn dump_trucks(&self) -> Result<DumpTruckCatalog, Error> {
        load_dump_trucks(&self.paths.dump_trucks).map_err(|e| load_error(&self.paths.dump_trucks, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulmatch_domain::repository::ReferenceTables;

    fn write_fixtures(dir: &Path) {
        std::fs::write(
            dir.join("excavator_swl.csv"),
            "make,model,boom_length,arm_length,CWT,shoe_width,reach,swl,class\nX,Y,6,3,4000,600,10,12000,20\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("bucket_data.csv"),
            "bucket_name,bucket_size,bucket_weight,class\nGP 1.5,1.5,1600,25\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("bhc_bucket_data.csv"),
            "bucket_name,bucket_size,bucket_weight,class\nHD 1.3,1.3,1900,28\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("dump_trucks.csv"),
            "brand,type,model,payload\nCat,Articulated,730,28\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_all_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let repo = FileReferenceRepository::new(ReferenceDataPaths::in_dir(dir.path()));
        let tables = ReferenceTables::load_from(&repo).unwrap();
        assert_eq!(tables.swl.len(), 1);
        assert_eq!(tables.catalog(BucketCatalogKind::Standard).buckets()[0].name, "GP 1.5");
        assert_eq!(tables.catalog(BucketCatalogKind::HeavyDuty).buckets()[0].name, "HD 1.3");
        assert_eq!(tables.dump_trucks.len(), 1);
    }

    #[test]
    fn test_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileReferenceRepository::new(ReferenceDataPaths::in_dir(dir.path()));
        match repo.swl_table() {
            Err(Error::DataLoad { path, .. }) => assert!(path.ends_with("excavator_swl.csv")),
            other => panic!("expected DataLoad error, got {:?}", other),
        }
    }
}
