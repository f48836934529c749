//! Lazy walk over epoch boundaries.

use super::instant::EpochInstant;

/// Forward-only, finite sequence of epoch-aligned instants in `[start, end)`.
#[derive(Debug, Clone)]
pub struct EpochSequence {
    next: EpochInstant,
    end: EpochInstant,
}

impl EpochSequence {
    pub(crate) fn new(start: EpochInstant, end: EpochInstant) -> Self {
        Self { next: start, end }
    }
}

impl Iterator for EpochSequence {
    type Item = EpochInstant;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_before(&self.end) {
            return None;
        }
        let current = self.next;
        self.next = current.plus_epochs(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.next.is_before(&self.end) {
            return (0, Some(0));
        }
        let secs = (self.end.as_instant() - self.next.as_instant()).num_seconds();
        let remaining = secs.div_euclid(super::EPOCH_DURATION_SECS)
            + i64::from(secs.rem_euclid(super::EPOCH_DURATION_SECS) != 0);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl std::iter::FusedIterator for EpochSequence {}
