//! Batch scheduling.
//!
//! Rows are split into consecutive batches. Within a batch every row is a
//! spawned task gated by the worker-pool semaphore; results are collected in
//! completion order. The next batch starts only after every task of the
//! current one has finished.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::warn;
use tokio::sync::Semaphore;

use crate::app::log_progress;
use crate::domain::Row;
use crate::error_handling::ErrorType;
use crate::utils::{process_row, FilterContext, RowOutcome};

/// Counts for one completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// 0-based batch number
    pub index: usize,
    /// Rows submitted in this batch
    pub size: usize,
    pub kept: usize,
    pub dropped: usize,
    pub failed: usize,
}

/// Output of `run_all`.
#[derive(Debug, Default)]
pub struct BatchRun {
    /// Kept rows, grouped by batch, in completion order within each batch.
    pub kept: Vec<Row>,
    pub batches: Vec<BatchSummary>,
}

impl BatchRun {
    pub fn dropped(&self) -> usize {
        self.batches.iter().map(|b| b.dropped).sum()
    }

    pub fn failed(&self) -> usize {
        self.batches.iter().map(|b| b.failed).sum()
    }
}

/// Classifies every row, `batch_size` rows at a time.
///
/// A `batch_size` of zero is treated as one.
pub async fn run_all(
    rows: Vec<Row>,
    ctx: Arc<FilterContext>,
    batch_size: usize,
    semaphore: Arc<Semaphore>,
) -> BatchRun {
    let batch_size = batch_size.max(1);
    let total_batches = rows.len().div_ceil(batch_size);
    let start_time = Instant::now();

    let mut run = BatchRun::default();
    let mut rows_done = 0;
    let mut rows = rows.into_iter().peekable();

    while rows.peek().is_some() {
        let batch: Vec<Row> = rows.by_ref().take(batch_size).collect();
        let summary = run_batch(run.batches.len(), batch, &ctx, &semaphore, &mut run.kept).await;
        rows_done += summary.size;
        run.batches.push(summary);
        log_progress(
            start_time,
            run.batches.len(),
            total_batches,
            rows_done,
            run.kept.len(),
        );
    }

    run
}

async fn run_batch(
    index: usize,
    batch: Vec<Row>,
    ctx: &Arc<FilterContext>,
    semaphore: &Arc<Semaphore>,
    kept: &mut Vec<Row>,
) -> BatchSummary {
    let mut summary = BatchSummary {
        index,
        size: batch.len(),
        ..Default::default()
    };
    let mut tasks = FuturesUnordered::new();

    for row in batch {
        let permit = match Arc::clone(semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Worker pool closed, dropping row in batch {index}");
                summary.failed += 1;
                continue;
            }
        };

        let ctx = Arc::clone(ctx);
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            process_row(row, ctx).await
        }));
    }

    while let Some(task_result) = tasks.next().await {
        match task_result {
            Ok(RowOutcome::Kept(row)) => {
                summary.kept += 1;
                kept.push(row);
            }
            Ok(RowOutcome::Dropped) => summary.dropped += 1,
            Ok(RowOutcome::Failed(_)) => summary.failed += 1,
            Err(join_error) => {
                summary.failed += 1;
                ctx.stats.increment_error(ErrorType::TaskPanicked);
                warn!("Row task panicked: {:?}", join_error);
            }
        }
    }

    summary
}
