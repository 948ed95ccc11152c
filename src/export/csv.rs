//! Filtered CSV output.
//!
//! Fields are quoted only when needed and records end in CRLF. Rows keep their
//! input field counts, so the writer is flexible.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::domain::Row;

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF);
    builder
}

/// Creates the filtered CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn create_csv_writer(path: &Path) -> Result<Writer<File>> {
    builder()
        .from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))
}

/// Writes the header (if any) followed by the kept rows, then flushes.
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns an error if a record cannot be written or the flush fails.
pub fn write_filtered_rows<W: Write>(
    writer: &mut Writer<W>,
    header: Option<&Row>,
    rows: &[Row],
) -> Result<usize> {
    if let Some(header) = header {
        writer
            .write_record(header)
            .context("Failed to write CSV header")?;
    }
    for row in rows {
        writer.write_record(row).context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(rows.len())
}
