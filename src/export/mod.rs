//! Output writers.
//!
//! - `csv`: the filtered table (header followed by the kept rows)
//! - `lists`: deny- and ignore-list text files, one domain per line
//!
//! Every output file is created before processing starts, so an unwritable
//! path aborts the run before any DNS work is done.

pub mod csv;
pub mod lists;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use self::csv::{create_csv_writer, write_filtered_rows};
pub use lists::write_domain_list;

/// The three output files of a run, opened up front.
pub struct OutputFiles {
    pub filtered: ::csv::Writer<File>,
    pub deny_list: BufWriter<File>,
    pub ignore_list: BufWriter<File>,
    pub paths: OutputPaths,
}

/// Where the outputs of a run were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub filtered: PathBuf,
    pub deny_list: PathBuf,
    pub ignore_list: PathBuf,
}

impl OutputFiles {
    /// Creates (truncating) all three output files.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first path that cannot be created.
    pub fn create(filtered: &Path, deny_list: &Path, ignore_list: &Path) -> Result<Self> {
        Ok(Self {
            filtered: create_csv_writer(filtered)?,
            deny_list: create_list_file(deny_list)?,
            ignore_list: create_list_file(ignore_list)?,
            paths: OutputPaths {
                filtered: filtered.to_path_buf(),
                deny_list: deny_list.to_path_buf(),
                ignore_list: ignore_list.to_path_buf(),
            },
        })
    }
}

fn create_list_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create list file {}", path.display()))?;
    Ok(BufWriter::new(file))
}
