//! Per-row classification.

use std::sync::Arc;

use crate::classifier::{DomainClassifier, Verdict};
use crate::domain::{row_domain, Row};
use crate::error_handling::{ProcessingStats, RowError};

/// Shared state every row task needs.
pub struct FilterContext {
    pub classifier: DomainClassifier,
    pub stats: Arc<ProcessingStats>,
    /// 0-based index of the email column
    pub email_column: usize,
}

/// Result of processing one row.
#[derive(Debug)]
pub enum RowOutcome {
    /// The row passed the filter and is returned unchanged.
    Kept(Row),
    /// The domain is blocked (or was previously ignored).
    Dropped,
    /// The row could not be classified; it is dropped.
    Failed(RowError),
}

impl RowOutcome {
    /// The kept row, if any.
    pub fn into_kept(self) -> Option<Row> {
        match self {
            RowOutcome::Kept(row) => Some(row),
            RowOutcome::Dropped | RowOutcome::Failed(_) => None,
        }
    }
}

/// Classifies a single row.
///
/// Failures never propagate: the row is dropped, the failure is logged and
/// counted, and any domain extracted before the failure is added to the
/// ignore-set so it is not looked up again this run.
pub async fn process_row(row: Row, ctx: Arc<FilterContext>) -> RowOutcome {
    match classify_row(&row, &ctx).await {
        Ok(Verdict::Allowed) => RowOutcome::Kept(row),
        Ok(Verdict::Blocked) => RowOutcome::Dropped,
        Err(e) => {
            let email = row
                .get(ctx.email_column)
                .map(String::as_str)
                .unwrap_or_default();
            log::warn!("Error processing domain {email}: {e}");

            if let Some(domain) = e.partial_domain() {
                ctx.classifier.caches().insert_ignore(domain);
            }
            ctx.stats.increment_error(e.error_type());
            RowOutcome::Failed(e)
        }
    }
}

async fn classify_row(row: &[String], ctx: &FilterContext) -> Result<Verdict, RowError> {
    let domain = row_domain(row, ctx.email_column)?;
    ctx.classifier
        .classify(domain)
        .await
        .map_err(|source| RowError::Resolver {
            domain: domain.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MembershipCaches;
    use crate::config::DEFAULT_SIGNATURES;
    use crate::dns::{DnsError, MxResolver, MxResult};
    use crate::error_handling::ErrorType;
    use crate::signatures::SignatureSet;
    use async_trait::async_trait;

    /// Fails every lookup.
    struct FailingResolver;

    #[async_trait]
    impl MxResolver for FailingResolver {
        async fn resolve(&self, domain: &str) -> Result<MxResult, DnsError> {
            Err(DnsError::Lookup {
                domain: domain.to_string(),
                message: "network unreachable".to_string(),
            })
        }
    }

    fn context() -> Arc<FilterContext> {
        let stats = Arc::new(ProcessingStats::new());
        Arc::new(FilterContext {
            classifier: DomainClassifier::new(
                Arc::new(FailingResolver),
                Arc::new(SignatureSet::new(DEFAULT_SIGNATURES)),
                Arc::new(MembershipCaches::new(["comcast.net"])),
                Arc::clone(&stats),
            ),
            stats,
            email_column: 1,
        })
    }

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[tokio::test]
    async fn test_allowed_row_is_returned_unchanged() {
        let ctx = context();
        let input = row(&["1", "user@comcast.net", "extra"]);
        match process_row(input.clone(), ctx).await {
            RowOutcome::Kept(kept) => assert_eq!(kept, input),
            other => panic!("expected Kept, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_email_drops_without_ignore_entry() {
        let ctx = context();
        let outcome = process_row(row(&["1", "no-at-sign"]), Arc::clone(&ctx)).await;

        assert!(matches!(outcome, RowOutcome::Failed(RowError::MalformedEmail)));
        assert_eq!(ctx.classifier.caches().ignore_len(), 0);
        assert_eq!(ctx.stats.get_error_count(ErrorType::MalformedEmail), 1);
    }

    #[tokio::test]
    async fn test_short_row_drops_without_ignore_entry() {
        let ctx = context();
        let outcome = process_row(row(&["only-one-field"]), Arc::clone(&ctx)).await;

        assert!(matches!(
            outcome,
            RowOutcome::Failed(RowError::MissingEmailField { .. })
        ));
        assert_eq!(ctx.classifier.caches().ignore_len(), 0);
    }

    #[tokio::test]
    async fn test_resolver_failure_ignores_domain() {
        let ctx = context();
        let outcome = process_row(row(&["1", "a@flaky.example"]), Arc::clone(&ctx)).await;

        assert!(outcome.into_kept().is_none());
        assert_eq!(
            ctx.classifier.caches().ignored(),
            vec!["flaky.example".to_string()]
        );
        assert_eq!(ctx.stats.get_error_count(ErrorType::DnsMxLookupError), 1);

        // Ignored domains are dropped without another lookup
        let outcome = process_row(row(&["2", "b@flaky.example"]), Arc::clone(&ctx)).await;
        assert!(matches!(outcome, RowOutcome::Dropped));
        assert_eq!(ctx.stats.get_error_count(ErrorType::DnsMxLookupError), 1);
    }
}
