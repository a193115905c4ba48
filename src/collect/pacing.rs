//! Pauses between batches.

use std::time::Duration;

use crate::config::DEFAULT_INTER_BATCH_DELAY;

/// Decides how long to wait between two batches.
///
/// The collector asks once per gap, after batch `completed` (0-based) has
/// finished and before the next one starts; no pause follows the last batch.
pub trait BatchPacing: Send + Sync + std::fmt::Debug {
    fn pause_after(&self, completed: usize) -> Duration;
}

/// Same pause after every batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay(DEFAULT_INTER_BATCH_DELAY)
    }
}

impl BatchPacing for FixedDelay {
    fn pause_after(&self, _completed: usize) -> Duration {
        self.0
    }
}

/// Back-to-back batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl BatchPacing for NoDelay {
    fn pause_after(&self, _completed: usize) -> Duration {
        Duration::ZERO
    }
}
