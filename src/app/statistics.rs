//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::analysis::Tier;
use crate::collect::BatchRun;
use crate::error_handling::{ErrorType, ProcessingStats, WarningType};

/// Logs the tier distribution, error and warning counts, and a one-line
/// summary of the run.
pub fn print_final_statistics(run: &BatchRun, stats: &ProcessingStats, elapsed_seconds: f64) {
    info!("Tier distribution:");
    for tier in Tier::iter() {
        info!(
            "   {} ({}): {}",
            tier,
            tier.label(),
            run.tier_histogram.count(tier)
        );
    }

    print_error_statistics(stats);

    let summary = run.summary();
    info!(
        "✅ Collected {} tool{} ({} succeeded, {} failed, avg {}ms) in {:.1}s",
        summary.total,
        if summary.total == 1 { "" } else { "s" },
        summary.successful,
        summary.failed,
        summary.average_latency_ms,
        elapsed_seconds
    );
}

/// Prints error and warning counts to the log.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_warnings = stats.total_warnings();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }
}
