//! Row processing.
//!
//! This module provides the per-row step of the pipeline: email domain
//! extraction, classification, and conversion of failures into dropped rows.

mod process;

pub use process::{process_row, FilterContext, RowOutcome};
