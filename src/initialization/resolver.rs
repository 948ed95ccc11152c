//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;
use crate::dns::HickoryMxResolver;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for MX lookups.
///
/// Creates a resolver using the default upstream configuration with a short
/// per-query timeout so slow authoritative servers fail fast (a timeout is
/// treated as "no MX information").
///
/// # Arguments
///
/// * `timeout_secs` - Per-query timeout in seconds (must be non-zero)
///
/// # Returns
///
/// An `HickoryMxResolver` sharing one `TokioAsyncResolver` across all tasks.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` for a zero timeout.
pub fn init_resolver(timeout_secs: u64) -> Result<HickoryMxResolver, InitializationError> {
    if timeout_secs == 0 {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be at least 1 second".to_string(),
        ));
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
    Ok(HickoryMxResolver::new(Arc::new(resolver)))
}
