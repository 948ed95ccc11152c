//! Configuration constants.
//!
//! Defaults for the CLI options and the fixed operational parameters of the
//! DNS resolver.

/// Rows submitted to the worker pool before waiting for the batch to drain
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// 0-based index of the CSV column holding the email address
pub const EMAIL_FIELD_INDEX: usize = 5;

/// Fallback worker count when available parallelism cannot be determined
pub const FALLBACK_WORKERS: usize = 4;

// DNS resolver
/// Per-query DNS timeout in seconds
/// A timed-out MX lookup counts as "no MX information", so a short timeout keeps
/// slow authoritative servers from stalling a batch.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Attempts the resolver makes internally per query (not retried by the classifier)
pub const DNS_ATTEMPTS: usize = 2;

// Output paths
pub const DEFAULT_OUTPUT_PATH: &str = "filtered_email_list.csv";
pub const DEFAULT_DENY_LIST_PATH: &str = "blacklist-domains.txt";
pub const DEFAULT_IGNORE_LIST_PATH: &str = "ignored-domains.txt";

/// Domains that are kept without an MX lookup unless overridden with `--allow-domain`.
pub const DEFAULT_ALLOW_DOMAINS: &[&str] = &["comcast.net"];

/// MX hostname fragments identifying the blocked mail-hosting providers.
///
/// Proofpoint (`pphosted.com`) and Rackspace (`emailsrvr.com`) plus a set of
/// hosted-mail domains seen fronting the same gateways. Overridable with
/// `--signature` or `--signatures-file`.
pub const DEFAULT_SIGNATURES: &[&str] = &[
    "pphosted.com",
    "emailsrvr.com",
    "beccaria.at",
    "wwaglobal.com",
    "wdf-company.com",
    "tuckstrucks.com",
    "trezo.com",
    "progressive4.life",
    "misbahmc.ae",
    "kimha.com",
    "jb1937.com",
    "hofflerandassociates.com",
    "eco-recitec.com.br",
    "corporacionculturalluterana.org",
    "fmtest-stag.com",
];
