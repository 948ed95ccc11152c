//! DNS MX resolution.
//!
//! This module provides the MX lookup used to classify email domains:
//! - `MxResolver`: the async lookup seam the classifier depends on
//! - `HickoryMxResolver`: the production implementation on `hickory-resolver`
//! - `MxResult`: exchange hostnames, or absence of usable MX information
//!
//! "No records", NXDOMAIN and timeouts are reported as `MxResult::Absent`; only
//! unexpected resolver failures surface as `DnsError`.

mod records;

use async_trait::async_trait;
use thiserror::Error;

// Re-export public API
pub use records::{absence_reason, lookup_mx_records, HickoryMxResolver};

/// Outcome of one MX lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxResult {
    /// Exchange hostnames, trailing root dot stripped.
    Found(Vec<String>),
    /// No MX record, non-existent domain, or the query timed out.
    Absent,
}

/// Hard MX lookup failures.
#[derive(Debug, Error)]
pub enum DnsError {
    /// The hickory resolver failed for a reason other than absence.
    #[error("MX lookup failed for {domain}: {source}")]
    Resolve {
        domain: String,
        #[source]
        source: hickory_resolver::error::ResolveError,
    },

    /// Any other resolver backend failure.
    #[error("MX lookup failed for {domain}: {message}")]
    Lookup { domain: String, message: String },
}

/// Performs one MX lookup per call.
///
/// Implementations must not retry: a hard failure is final for the run.
#[async_trait]
pub trait MxResolver: Send + Sync {
    /// Looks up the MX exchanges of `domain` (non-empty, caller-validated).
    async fn resolve(&self, domain: &str) -> Result<MxResult, DnsError>;
}
