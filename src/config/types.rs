//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ALLOW_DOMAINS, DEFAULT_BATCH_SIZE, DEFAULT_DENY_LIST_PATH, DEFAULT_IGNORE_LIST_PATH,
    DEFAULT_OUTPUT_PATH, DEFAULT_SIGNATURES, DNS_TIMEOUT_SECS, EMAIL_FIELD_INDEX,
    FALLBACK_WORKERS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Worker-pool size used when `--workers` is not given.
///
/// Matches the number of cores the process may use.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_WORKERS)
}

/// Run configuration.
///
/// Parsed from the command line by `clap`, but can equally be constructed
/// programmatically via `Default`.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// mx_filter email-list.csv
///
/// # Smaller batches, more workers, extra allow-listed domain
/// mx_filter email-list.csv --batch-size 50 --workers 32 \
///     --allow-domain comcast.net --allow-domain example.org
///
/// # Custom provider signatures
/// mx_filter email-list.csv --signatures-file providers.txt
/// ```
///
/// ```no_run
/// use mx_filter::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("email-list.csv"),
///     batch_size: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mx_filter",
    about = "Drops email-list rows whose domain's MX records point at a blocked mail provider."
)]
pub struct Config {
    /// CSV file to read (first row is the header)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// Filtered CSV output path
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Deny-list output path (one blocked domain per line)
    #[arg(long, value_parser, default_value = DEFAULT_DENY_LIST_PATH)]
    pub deny_list: PathBuf,

    /// Ignore-list output path (one unclassifiable domain per line)
    #[arg(long, value_parser, default_value = DEFAULT_IGNORE_LIST_PATH)]
    pub ignore_list: PathBuf,

    /// Rows per batch; a batch is fully classified before the next starts
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Maximum rows classified concurrently (defaults to available cores)
    #[arg(long, default_value_t = default_workers())]
    pub workers: usize,

    /// Domain kept without an MX lookup (repeatable)
    #[arg(long = "allow-domain", value_name = "DOMAIN", default_values_t = DEFAULT_ALLOW_DOMAINS.iter().map(|d| d.to_string()).collect::<Vec<String>>())]
    pub allow_domains: Vec<String>,

    /// MX hostname fragment identifying a blocked provider (repeatable)
    ///
    /// When neither this nor `--signatures-file` is given, the built-in provider
    /// list is used.
    #[arg(long = "signature", value_name = "FRAGMENT")]
    pub signatures: Vec<String>,

    /// File of MX hostname fragments, one per line (`#` starts a comment)
    #[arg(long, value_parser)]
    pub signatures_file: Option<PathBuf>,

    /// 0-based index of the column holding the email address
    #[arg(long, default_value_t = EMAIL_FIELD_INDEX)]
    pub email_column: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("email-list.csv"),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            deny_list: PathBuf::from(DEFAULT_DENY_LIST_PATH),
            ignore_list: PathBuf::from(DEFAULT_IGNORE_LIST_PATH),
            batch_size: DEFAULT_BATCH_SIZE,
            workers: default_workers(),
            allow_domains: DEFAULT_ALLOW_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            signatures: Vec::new(),
            signatures_file: None,
            email_column: EMAIL_FIELD_INDEX,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Rejects settings the scheduler cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch size or worker count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("--batch-size must be at least 1");
        }
        if self.workers == 0 {
            bail!("--workers must be at least 1");
        }
        Ok(())
    }

    /// Resolves the signature fragments for this run.
    ///
    /// Precedence: `--signatures-file`, then `--signature` values, then the
    /// built-in provider list. Blank lines and `#` comments in the file are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the signatures file cannot be read or yields no
    /// fragments.
    pub fn load_signatures(&self) -> Result<Vec<String>> {
        let signatures: Vec<String> = if let Some(path) = &self.signatures_file {
            let contents = std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read signatures file {}", path.display())
            })?;
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect()
        } else if !self.signatures.is_empty() {
            self.signatures.clone()
        } else {
            DEFAULT_SIGNATURES.iter().map(|s| s.to_string()).collect()
        };

        if signatures.is_empty() {
            bail!("Signature list is empty; at least one provider fragment is required");
        }
        Ok(signatures)
    }
}
