//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization and per-row failures)
//! - Processing statistics tracking (errors and info metrics)
//!
//! Row failures are categorized into **errors** (the row could not be
//! classified and was dropped) and **info** events (cache hits, MX lookups)
//! that describe how classification decisions were reached.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, RowError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::MalformedEmail);
        assert_eq!(stats.get_error_count(ErrorType::MalformedEmail), 1);

        stats.increment_info(InfoType::AllowCacheHit);
        assert_eq!(stats.get_info_count(InfoType::AllowCacheHit), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::MalformedEmail);
        stats.increment_error(ErrorType::DnsMxLookupError);
        stats.increment_info(InfoType::MxLookup);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_info(), 1);
    }

    #[test]
    fn test_processing_stats_concurrent_increments() {
        let stats = std::sync::Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = std::sync::Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_info(InfoType::DenyCacheHit);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_info_count(InfoType::DenyCacheHit), 800);
    }
}
