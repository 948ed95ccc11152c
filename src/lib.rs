//! mx_filter library: MX-based email list filtering
//!
//! Reads an email list CSV, looks up the MX records of each row's email domain,
//! and drops rows whose mail is handled by a blocked provider. Classified
//! domains are cached for the run so repeated domains never trigger another
//! lookup, and rows are processed in bounded-concurrency batches.
//!
//! # Example
//!
//! ```no_run
//! use mx_filter::{Config, run_filter};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("email-list.csv"),
//!     batch_size: 100,
//!     workers: 16,
//!     ..Default::default()
//! };
//!
//! let report = run_filter(config).await?;
//! println!("Kept {} of {} rows", report.kept, report.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod parse;
mod run;
pub mod signatures;
pub mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{
    run_all, run_filter, run_filter_with_resolver, BatchRun, BatchSummary, FilterReport,
};
