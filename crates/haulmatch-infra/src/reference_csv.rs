//! CSV loaders for the reference datasets
//!
//! Expected headers (case-insensitive, extra columns ignored):
//! - SWL table: make,model,boom_length,arm_length,CWT,shoe_width,reach,swl,class
//! - Bucket catalogs: bucket_name,bucket_size,bucket_weight,class
//! - Dump trucks: brand,type,model,payload
//!
//! Files are read as UTF-8 (with or without BOM). Anything else is decoded as
//! Windows-1252, which is what spreadsheet exports usually produce.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use haulmatch_domain::model::{
    BucketCatalog, BucketSpec, DumpTruckCatalog, DumpTruckSpec, MachineConfiguration, SwlRecord,
    SwlTable,
};
use haulmatch_types::BucketCatalogKind;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Empty value in row {row}, column {column}")]
    EmptyField { row: usize, column: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Value in row {row}, column {column} must be positive: {value}")]
    NonPositive {
        row: usize,
        column: String,
        value: f64,
    },

    #[error("Class in row {row} is not a whole number: {value}")]
    InvalidClass { row: usize, value: String },
}

const SWL_COLUMNS: [&str; 9] = [
    "make",
    "model",
    "boom_length",
    "arm_length",
    "cwt",
    "shoe_width",
    "reach",
    "swl",
    "class",
];

const BUCKET_COLUMNS: [&str; 4] = ["bucket_name", "bucket_size", "bucket_weight", "class"];

const DUMP_TRUCK_COLUMNS: [&str; 4] = ["brand", "type", "model", "payload"];

/// Load the machine SWL table
pub fn load_swl_table<P: AsRef<Path>>(path: P) -> Result<SwlTable, CsvLoaderError> {
    parse_swl_table(&read_file(path)?)
}

/// Load a bucket catalog
pub fn load_bucket_catalog<P: AsRef<Path>>(
    path: P,
    kind: BucketCatalogKind,
) -> Result<BucketCatalog, CsvLoaderError> {
    parse_bucket_catalog(&read_file(path)?, kind)
}

/// Load the dump truck catalog
pub fn load_dump_trucks<P: AsRef<Path>>(path: P) -> Result<DumpTruckCatalog, CsvLoaderError> {
    parse_dump_trucks(&read_file(path)?)
}

pub fn parse_swl_table(content: &str) -> Result<SwlTable, CsvLoaderError> {
    let mut reader = csv_reader(content);
    let headers = reader.headers()?.clone();
    let cols = column_indices(&headers, &SWL_COLUMNS)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2; // header is row 1

        let configuration = MachineConfiguration {
            make: text(&record, cols[0], row, "make")?,
            model: text(&record, cols[1], row, "model")?,
            boom_length_m: number(&record, cols[2], row, "boom_length")?,
            arm_length_m: number(&record, cols[3], row, "arm_length")?,
            counterweight_kg: number(&record, cols[4], row, "CWT")?,
            shoe_width_mm: number(&record, cols[5], row, "shoe_width")?,
            reach_m: number(&record, cols[6], row, "reach")?,
        };
        records.push(SwlRecord {
            configuration,
            swl_kg: positive(&record, cols[7], row, "swl")?,
            class: class(&record, cols[8], row)?,
        });
    }

    let table = SwlTable::new(records);
    for duplicate in table.duplicate_configurations() {
        warn!("SWL table lists the same configuration more than once: {}", duplicate);
    }
    debug!(rows = table.len(), "loaded SWL table");
    Ok(table)
}

pub fn parse_bucket_catalog(
    content: &str,
    kind: BucketCatalogKind,
) -> Result<BucketCatalog, CsvLoaderError> {
    let mut reader = csv_reader(content);
    let headers = reader.headers()?.clone();
    let cols = column_indices(&headers, &BUCKET_COLUMNS)?;

    let mut buckets = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;

        buckets.push(BucketSpec {
            name: text(&record, cols[0], row, "bucket_name")?,
            size_m3: positive(&record, cols[1], row, "bucket_size")?,
            weight_kg: positive(&record, cols[2], row, "bucket_weight")?,
            class: class(&record, cols[3], row)?,
        });
    }

    debug!(rows = buckets.len(), catalog = %kind, "loaded bucket catalog");
    Ok(BucketCatalog::new(kind, buckets))
}

pub fn parse_dump_trucks(content: &str) -> Result<DumpTruckCatalog, CsvLoaderError> {
    let mut reader = csv_reader(content);
    let headers = reader.headers()?.clone();
    let cols = column_indices(&headers, &DUMP_TRUCK_COLUMNS)?;

    let mut trucks = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;

        trucks.push(DumpTruckSpec {
            brand: text(&record, cols[0], row, "brand")?,
            truck_type: text(&record, cols[1], row, "type")?,
            model: text(&record, cols[2], row, "model")?,
            payload_tonnes: positive(&record, cols[3], row, "payload")?,
        });
    }

    debug!(rows = trucks.len(), "loaded dump truck catalog");
    Ok(DumpTruckCatalog::new(trucks))
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<String, CsvLoaderError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(decode_bytes(&bytes))
}

/// Decode file bytes as UTF-8, falling back to Windows-1252
pub fn decode_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!("CSV input is not valid UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

fn csv_reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes())
}

fn column_indices(
    headers: &csv::StringRecord,
    required: &[&str],
) -> Result<Vec<usize>, CsvLoaderError> {
    required
        .iter()
        .map(|col| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(col))
                .ok_or_else(|| CsvLoaderError::MissingColumn(col.to_string()))
        })
        .collect()
}

fn text(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<String, CsvLoaderError> {
    match record.get(idx) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(CsvLoaderError::EmptyField {
            row,
            column: column.to_string(),
        }),
    }
}

fn number(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<f64, CsvLoaderError> {
    let raw = text(record, idx, row, column)?;
    let cleaned = raw.replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CsvLoaderError::InvalidNumber {
            row,
            column: column.to_string(),
            value: raw,
        }),
    }
}

fn positive(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<f64, CsvLoaderError> {
    let value = number(record, idx, row, column)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CsvLoaderError::NonPositive {
            row,
            column: column.to_string(),
            value,
        })
    }
}

/// Classes are whole numbers but often exported as "20.0"
fn class(record: &csv::StringRecord, idx: usize, row: usize) -> Result<i32, CsvLoaderError> {
    let value = number(record, idx, row, "class")?;
    if value.fract() != 0.0 || value.abs() > f64::from(i32::MAX) {
        return Err(CsvLoaderError::InvalidClass {
            row,
            value: value.to_string(),
        });
    }
    Ok(value as i32)
}
