//! Domain classification against the membership caches and MX signatures.
//!
//! Cache order is deny, allow, ignore. A miss on all three falls through to an
//! MX lookup, and the outcome is recorded in the deny- or allow-set.
//!
//! First sightings of a domain are single-flighted: concurrent tasks asking
//! about the same uncached domain queue on a per-domain lock and re-check the
//! caches once they hold it, so each domain is looked up at most once per run.
//! A hard lookup failure puts the domain in the ignore-set before the lock is
//! released, so queued tasks see the ignore hit instead of retrying.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::cache::{CacheHit, MembershipCaches};
use crate::dns::{DnsError, MxResolver, MxResult};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::signatures::SignatureSet;

/// Classification outcome for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep rows with this domain.
    Allowed,
    /// Drop rows with this domain (blocked provider or ignored domain).
    Blocked,
}

impl From<CacheHit> for Verdict {
    fn from(hit: CacheHit) -> Self {
        match hit {
            CacheHit::Allow => Verdict::Allowed,
            CacheHit::Deny | CacheHit::Ignore => Verdict::Blocked,
        }
    }
}

/// Classifies domains, sharing caches and a resolver across all row tasks.
pub struct DomainClassifier {
    resolver: Arc<dyn MxResolver>,
    signatures: Arc<SignatureSet>,
    caches: Arc<MembershipCaches>,
    stats: Arc<ProcessingStats>,
    in_flight: DashMap<String, Arc<Mutex<()>>>,
}

impl DomainClassifier {
    pub fn new(
        resolver: Arc<dyn MxResolver>,
        signatures: Arc<SignatureSet>,
        caches: Arc<MembershipCaches>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            resolver,
            signatures,
            caches,
            stats,
            in_flight: DashMap::new(),
        }
    }

    pub fn caches(&self) -> &Arc<MembershipCaches> {
        &self.caches
    }

    /// Classifies `domain`, consulting the caches before the resolver.
    ///
    /// # Errors
    ///
    /// Returns the resolver's `DnsError` on a hard lookup failure. Only the
    /// first caller sees the error; the domain is ignored from then on.
    pub async fn classify(&self, domain: &str) -> Result<Verdict, DnsError> {
        if let Some(verdict) = self.cached(domain) {
            return Ok(verdict);
        }

        // The map guard must be released before awaiting the per-domain lock
        let lock = Arc::clone(&self.in_flight.entry(domain.to_string()).or_default());
        let result = {
            let _guard = lock.lock().await;
            match self.cached(domain) {
                Some(verdict) => Ok(verdict),
                None => {
                    let result = self.resolve_and_record(domain).await;
                    if result.is_err() {
                        self.caches.insert_ignore(domain);
                    }
                    result
                }
            }
        };
        self.in_flight.remove(domain);
        result
    }

    fn cached(&self, domain: &str) -> Option<Verdict> {
        let hit = self.caches.lookup(domain)?;
        self.stats.increment_info(match hit {
            CacheHit::Allow => InfoType::AllowCacheHit,
            CacheHit::Deny => InfoType::DenyCacheHit,
            CacheHit::Ignore => InfoType::IgnoreCacheHit,
        });
        log::trace!("{domain}: {hit:?} cache hit");
        Some(hit.into())
    }

    async fn resolve_and_record(&self, domain: &str) -> Result<Verdict, DnsError> {
        self.stats.increment_info(InfoType::MxLookup);
        let mx = self.resolver.resolve(domain).await?;
        if mx == MxResult::Absent {
            self.stats.increment_info(InfoType::MxAbsent);
        }

        if self.signatures.is_blocked(&mx) {
            log::debug!("{domain}: blocked provider in MX {mx:?}");
            self.caches.insert_deny(domain);
            Ok(Verdict::Blocked)
        } else {
            log::debug!("{domain}: allowed (MX {mx:?})");
            self.caches.insert_allow(domain);
            Ok(Verdict::Allowed)
        }
    }
}
