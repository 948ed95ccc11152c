//! Mail-provider signature matching.
//!
//! A domain is blocked when any of its MX exchange hostnames contains one of
//! the configured provider fragments. Matching is case-insensitive substring
//! containment, so a fragment may appear anywhere in the hostname.

use crate::dns::MxResult;

/// Immutable set of provider fragments, shared read-only across all row tasks.
#[derive(Debug, Clone)]
pub struct SignatureSet {
    fragments: Vec<String>,
}

impl SignatureSet {
    /// Builds a signature set, lowercasing every fragment once.
    ///
    /// Blank fragments are dropped; they would otherwise match every hostname.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments = fragments
            .into_iter()
            .map(|f| f.as_ref().trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        Self { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the first fragment contained in `hostname`, if any.
    pub fn matching_fragment(&self, hostname: &str) -> Option<&str> {
        let hostname = hostname.to_lowercase();
        self.fragments
            .iter()
            .find(|fragment| hostname.contains(fragment.as_str()))
            .map(String::as_str)
    }

    /// Decides whether an MX lookup result identifies a blocked provider.
    ///
    /// `Absent` is never blocked. For `Found`, the first matching hostname
    /// short-circuits; an empty host list is not blocked.
    pub fn is_blocked(&self, mx: &MxResult) -> bool {
        match mx {
            MxResult::Absent => false,
            MxResult::Found(hosts) => hosts
                .iter()
                .any(|host| self.matching_fragment(host).is_some()),
        }
    }
}
