//! Run orchestration: setup, batch classification, output.

mod batch;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;

use crate::app::print_error_statistics;
use crate::cache::MembershipCaches;
use crate::classifier::DomainClassifier;
use crate::config::Config;
use crate::dns::MxResolver;
use crate::error_handling::ProcessingStats;
use crate::export::{write_domain_list, write_filtered_rows, OutputFiles, OutputPaths};
use crate::initialization::{init_resolver, init_semaphore};
use crate::parse::read_rows;
use crate::signatures::SignatureSet;
use crate::utils::FilterContext;

pub use batch::{run_all, BatchRun, BatchSummary};

/// Results of a filtering run.
#[derive(Debug, Clone)]
pub struct FilterReport {
    /// Data rows read (header excluded)
    pub total_rows: usize,
    /// Rows written to the filtered output
    pub kept: usize,
    /// Rows dropped for a blocked or ignored domain
    pub dropped: usize,
    /// Rows dropped because they could not be classified
    pub failed: usize,
    /// Per-batch counts, in batch order
    pub batches: Vec<BatchSummary>,
    /// Domains written to the deny-list
    pub denied_domains: usize,
    /// Domains written to the ignore-list
    pub ignored_domains: usize,
    pub outputs: OutputPaths,
    pub elapsed_seconds: f64,
}

/// Runs the filter with the configured DNS resolver.
///
/// # Errors
///
/// Returns an error for any setup or I/O failure: invalid configuration,
/// unreadable input or signatures file, uncreatable output files, resolver
/// initialization, or a failed write. Per-row failures are never errors.
///
/// # Example
///
/// ```no_run
/// use mx_filter::{run_filter, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: PathBuf::from("email-list.csv"),
///     ..Default::default()
/// };
/// let report = run_filter(config).await?;
/// println!("Kept {} of {} rows", report.kept, report.total_rows);
/// # Ok(())
/// # }
/// ```
pub async fn run_filter(config: Config) -> Result<FilterReport> {
    let resolver =
        init_resolver(config.dns_timeout_seconds).context("Failed to initialize DNS resolver")?;
    run_filter_with_resolver(config, Arc::new(resolver)).await
}

/// Runs the filter with a caller-supplied MX resolver.
///
/// # Errors
///
/// See [`run_filter`].
pub async fn run_filter_with_resolver(
    config: Config,
    resolver: Arc<dyn MxResolver>,
) -> Result<FilterReport> {
    config.validate()?;
    let signatures = SignatureSet::new(config.load_signatures()?);
    if signatures.is_empty() {
        bail!("Signature list has no usable fragments");
    }
    info!("Loaded {} provider signatures", signatures.len());

    let input = read_rows(&config.input)?;
    info!(
        "Read {} rows from {}",
        input.rows.len(),
        config.input.display()
    );

    let mut outputs = OutputFiles::create(&config.output, &config.deny_list, &config.ignore_list)?;

    let stats = Arc::new(ProcessingStats::new());
    let caches = Arc::new(MembershipCaches::new(config.allow_domains.iter().cloned()));
    let ctx = Arc::new(FilterContext {
        classifier: DomainClassifier::new(
            resolver,
            Arc::new(signatures),
            Arc::clone(&caches),
            Arc::clone(&stats),
        ),
        stats: Arc::clone(&stats),
        email_column: config.email_column,
    });
    let semaphore = init_semaphore(config.workers);

    info!(
        "Classifying in batches of {} with {} workers",
        config.batch_size, config.workers
    );
    let start_time = std::time::Instant::now();
    let total_rows = input.rows.len();
    let run = run_all(input.rows, ctx, config.batch_size, semaphore).await;

    let denied = caches.denied();
    let ignored = caches.ignored();
    write_filtered_rows(&mut outputs.filtered, input.header.as_ref(), &run.kept)
        .with_context(|| format!("Failed to write {}", outputs.paths.filtered.display()))?;
    write_domain_list(&mut outputs.deny_list, &denied)
        .with_context(|| format!("Failed to write {}", outputs.paths.deny_list.display()))?;
    write_domain_list(&mut outputs.ignore_list, &ignored)
        .with_context(|| format!("Failed to write {}", outputs.paths.ignore_list.display()))?;

    print_error_statistics(&stats);

    let report = FilterReport {
        total_rows,
        kept: run.kept.len(),
        dropped: run.dropped(),
        failed: run.failed(),
        denied_domains: denied.len(),
        ignored_domains: ignored.len(),
        batches: run.batches,
        outputs: outputs.paths,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };
    info!(
        "Run statistics: total={}, kept={}, dropped={}, failed={}",
        report.total_rows, report.kept, report.dropped, report.failed
    );
    Ok(report)
}
