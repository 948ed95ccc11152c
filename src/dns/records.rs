//! MX record queries against `hickory-resolver`.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::{DnsError, MxResolver, MxResult};

/// Production `MxResolver` backed by a shared `TokioAsyncResolver`.
#[derive(Clone)]
pub struct HickoryMxResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryMxResolver {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl MxResolver for HickoryMxResolver {
    async fn resolve(&self, domain: &str) -> Result<MxResult, DnsError> {
        lookup_mx_records(domain, &self.resolver).await
    }
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// `MxResult::Found` with the exchange hostnames (trailing dots removed) in
/// preference order, or `MxResult::Absent` when the domain publishes no MX,
/// does not exist, or the query timed out.
///
/// # Errors
///
/// Returns `DnsError::Resolve` for any other resolver failure.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<MxResult, DnsError> {
    // Use domain as-is; ndots=0 on the resolver prevents search-domain appending
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some((
                            mx.preference(),
                            mx.exchange().to_utf8().trim_end_matches('.').to_string(),
                        ))
                    } else {
                        None
                    }
                })
                .collect();
            mx_records.sort_by_key(|(priority, _)| *priority);
            log::debug!("MX records for {domain}: {mx_records:?}");
            Ok(MxResult::Found(
                mx_records.into_iter().map(|(_, host)| host).collect(),
            ))
        }
        Err(e) => match absence_reason(&e) {
            Some(reason) => {
                log::debug!("No usable MX information for {domain} ({reason})");
                Ok(MxResult::Absent)
            }
            None => {
                log::warn!("Failed to lookup MX records for {domain}: {e}");
                Err(DnsError::Resolve {
                    domain: domain.to_string(),
                    source: e,
                })
            }
        },
    }
}

/// Names the absence condition a resolver error represents, if any.
///
/// Only NODATA (`NoError`) and NXDOMAIN are absence. hickory also reports
/// SERVFAIL, REFUSED and the other error response codes as `NoRecordsFound`;
/// those are hard failures. Timeouts may surface from the resolver itself or
/// from the underlying protocol client.
pub fn absence_reason(error: &ResolveError) -> Option<&'static str> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
            ResponseCode::NoError => Some("no records found"),
            ResponseCode::NXDomain => Some("domain does not exist"),
            _ => None,
        },
        ResolveErrorKind::Timeout => Some("timed out"),
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            Some("timed out")
        }
        _ => None,
    }
}
