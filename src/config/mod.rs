//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, DNS timeouts, built-in signatures)
//! - CLI option types and parsing
//! - Signature list loading

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{default_workers, Config, LogFormat, LogLevel};
