//! Error type definitions.
//!
//! This module defines the initialization and per-row error types, plus the
//! error and info categories tallied by `ProcessingStats`.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::dns::DnsError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failure to classify a single row.
///
/// Row failures never abort a batch: the row is dropped, the failure is
/// logged, and a partially extracted domain (if any) goes to the ignore-set.
#[derive(Error, Debug)]
pub enum RowError {
    /// The row has fewer fields than the configured email column.
    #[error("row has {len} fields, email column {index} is missing")]
    MissingEmailField {
        /// Configured email column index
        index: usize,
        /// Number of fields actually present
        len: usize,
    },

    /// The email field has no `@` or nothing after it.
    #[error("no domain found in email address")]
    MalformedEmail,

    /// The domain was extracted but the MX lookup failed hard.
    #[error("{source}")]
    Resolver {
        /// Domain whose lookup failed
        domain: String,
        /// Underlying resolver failure
        #[source]
        source: DnsError,
    },
}

impl RowError {
    /// The domain extracted before the failure, if extraction got that far.
    pub fn partial_domain(&self) -> Option<&str> {
        match self {
            RowError::Resolver { domain, .. } => Some(domain.as_str()),
            RowError::MissingEmailField { .. } | RowError::MalformedEmail => None,
        }
    }

    /// Statistics category for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            RowError::MissingEmailField { .. } => ErrorType::MissingEmailField,
            RowError::MalformedEmail => ErrorType::MalformedEmail,
            RowError::Resolver { .. } => ErrorType::DnsMxLookupError,
        }
    }
}

/// Types of errors that can occur while classifying a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input errors
    MissingEmailField,
    MalformedEmail,
    // DNS errors
    DnsMxLookupError,
    // Scheduler errors
    TaskPanicked,
}

/// Informational events counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    // Cache hits (no resolver call)
    AllowCacheHit,
    DenyCacheHit,
    IgnoreCacheHit,
    // Resolver path
    MxLookup,
    MxAbsent,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::MissingEmailField => "Missing email field",
            ErrorType::MalformedEmail => "Malformed email address",
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::TaskPanicked => "Row task panicked",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::AllowCacheHit => "Allow-list cache hit",
            InfoType::DenyCacheHit => "Deny-list cache hit",
            InfoType::IgnoreCacheHit => "Ignore-list cache hit",
            InfoType::MxLookup => "MX lookup",
            InfoType::MxAbsent => "MX lookup with no usable records",
        }
    }
}
