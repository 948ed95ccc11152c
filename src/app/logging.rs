//! Progress logging utilities.

use log::info;

/// Logs progress after a batch has drained.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `batches_done` - Batches completed so far
/// * `total_batches` - Batches in the run
/// * `rows_done` - Rows classified so far
/// * `kept` - Rows kept so far
pub fn log_progress(
    start_time: std::time::Instant,
    batches_done: usize,
    total_batches: usize,
    rows_done: usize,
    kept: usize,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        rows_done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Batch {}/{}: processed {} rows ({} kept) in {:.2} seconds (~{:.2} rows/sec)",
        batches_done, total_batches, rows_done, kept, elapsed_secs, rate
    );
}
