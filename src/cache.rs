//! Membership caches for classified domains.
//!
//! Three append-only sets shared by every row task in a run:
//! - **allow**: MX lookup found no blocked provider (or seeded as known-good)
//! - **deny**: MX lookup matched a blocked provider
//! - **ignore**: classification failed; never retried within the run
//!
//! Sets only grow; nothing is ever removed during a run.

use dashmap::DashSet;

/// Which membership set a domain was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHit {
    Allow,
    Deny,
    Ignore,
}

/// Thread-safe allow/deny/ignore sets.
#[derive(Debug, Default)]
pub struct MembershipCaches {
    allow: DashSet<String>,
    deny: DashSet<String>,
    ignore: DashSet<String>,
}

impl MembershipCaches {
    /// Creates caches with the allow-set pre-seeded.
    pub fn new<I, S>(allow_seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let caches = Self::default();
        for domain in allow_seed {
            caches.allow.insert(domain.into());
        }
        caches
    }

    /// Looks a domain up in deny, then allow, then ignore order.
    pub fn lookup(&self, domain: &str) -> Option<CacheHit> {
        if self.deny.contains(domain) {
            Some(CacheHit::Deny)
        } else if self.allow.contains(domain) {
            Some(CacheHit::Allow)
        } else if self.ignore.contains(domain) {
            Some(CacheHit::Ignore)
        } else {
            None
        }
    }

    pub fn insert_allow(&self, domain: &str) {
        self.allow.insert(domain.to_string());
    }

    pub fn insert_deny(&self, domain: &str) {
        self.deny.insert(domain.to_string());
    }

    pub fn insert_ignore(&self, domain: &str) {
        self.ignore.insert(domain.to_string());
    }

    pub fn allow_len(&self) -> usize {
        self.allow.len()
    }

    pub fn deny_len(&self) -> usize {
        self.deny.len()
    }

    pub fn ignore_len(&self) -> usize {
        self.ignore.len()
    }

    /// Deny-set contents, sorted.
    pub fn denied(&self) -> Vec<String> {
        sorted(&self.deny)
    }

    /// Ignore-set contents, sorted.
    pub fn ignored(&self) -> Vec<String> {
        sorted(&self.ignore)
    }

    /// Allow-set contents (including the seed), sorted.
    #[cfg(test)]
    pub(crate) fn allowed(&self) -> Vec<String> {
        sorted(&self.allow)
    }
}

// Sorted so exported lists do not depend on task completion order
fn sorted(set: &DashSet<String>) -> Vec<String> {
    let mut domains: Vec<String> = set.iter().map(|d| d.key().clone()).collect();
    domains.sort();
    domains
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_allow_only() {
        let caches = MembershipCaches::new(["comcast.net"]);
        assert_eq!(caches.lookup("comcast.net"), Some(CacheHit::Allow));
        assert_eq!(caches.allow_len(), 1);
        assert_eq!(caches.deny_len(), 0);
        assert_eq!(caches.ignore_len(), 0);
    }

    #[test]
    fn test_lookup_miss() {
        let caches = MembershipCaches::new(["comcast.net"]);
        assert_eq!(caches.lookup("example.com"), None);
        // No normalization: keys are exact strings
        assert_eq!(caches.lookup("Comcast.net"), None);
    }

    #[test]
    fn test_deny_checked_before_allow() {
        let caches = MembershipCaches::new(["example.com"]);
        caches.insert_deny("example.com");
        assert_eq!(caches.lookup("example.com"), Some(CacheHit::Deny));
    }

    #[test]
    fn test_allow_checked_before_ignore() {
        let caches = MembershipCaches::default();
        caches.insert_ignore("example.com");
        assert_eq!(caches.lookup("example.com"), Some(CacheHit::Ignore));
        caches.insert_allow("example.com");
        assert_eq!(caches.lookup("example.com"), Some(CacheHit::Allow));
    }

    #[test]
    fn test_inserts_are_idempotent() {
        let caches = MembershipCaches::default();
        caches.insert_deny("pphosted.com");
        caches.insert_deny("pphosted.com");
        assert_eq!(caches.deny_len(), 1);
        assert_eq!(caches.denied(), vec!["pphosted.com".to_string()]);
    }

    #[test]
    fn test_exports_are_sorted() {
        let caches = MembershipCaches::default();
        for domain in ["zeta.org", "alpha.com", "mid.net"] {
            caches.insert_ignore(domain);
        }
        assert_eq!(
            caches.ignored(),
            vec![
                "alpha.com".to_string(),
                "mid.net".to_string(),
                "zeta.org".to_string()
            ]
        );
    }
}
