//! CSV input parsing.
//!
//! The first record is the header and is passed through unchanged; every
//! following record is a data row. Bytes that are not valid UTF-8 are replaced
//! with U+FFFD rather than failing the run, and rows may have differing field
//! counts.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::Row;

/// Parsed input: the header (absent for an empty file) and the data rows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CsvInput {
    pub header: Option<Row>,
    pub rows: Vec<Row>,
}

/// Reads and parses the input CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_rows(path: &Path) -> Result<CsvInput> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    read_rows_from(file).with_context(|| format!("Failed to read input file {}", path.display()))
}

/// Parses CSV records from any reader.
///
/// # Errors
///
/// Returns an error on an I/O failure while reading.
pub fn read_rows_from<R: Read>(reader: R) -> Result<CsvInput> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut input = CsvInput::default();
    for record in reader.byte_records() {
        let record = record.context("Failed to parse CSV record")?;
        let row: Row = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        if input.header.is_none() {
            input.header = Some(row);
        } else {
            input.rows.push(row);
        }
    }
    Ok(input)
}
