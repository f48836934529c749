//! Batch run accounting

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Counters of one batch run (or one worker's share of it).
///
/// `processed + skipped == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Registrations in the covered range when the run started.
    pub total: u64,
    /// Registrations that went through the risk engine and, when updated,
    /// were written back.
    pub processed: u64,
    /// Registrations that could not be read or written back.
    pub skipped: u64,
    /// Processed registrations whose state changed.
    pub updated: u64,
    /// Retention resets of never-notified users.
    pub missed_notifications: u64,
    /// Failed write-backs, included in `skipped`.
    pub write_failures: u64,
}

impl BatchReport {
    pub fn is_balanced(&self) -> bool {
        self.processed + self.skipped == self.total
    }
}

impl AddAssign for BatchReport {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.updated += other.updated;
        self.missed_notifications += other.missed_notifications;
        self.write_failures += other.write_failures;
    }
}

impl std::iter::Sum for BatchReport {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, r| {
            acc += r;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_worker_reports() {
        let a = BatchReport {
            total: 3,
            processed: 2,
            skipped: 1,
            updated: 1,
            missed_notifications: 0,
            write_failures: 1,
        };
        let b = BatchReport {
            total: 5,
            processed: 5,
            updated: 2,
            missed_notifications: 1,
            ..Default::default()
        };
        let total: BatchReport = [a, b].into_iter().sum();
        assert_eq!(total.total, 8);
        assert_eq!(total.processed, 7);
        assert_eq!(total.write_failures, 1);
        assert!(total.is_balanced());
    }
}
