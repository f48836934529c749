//! Result of one risk pass over a registration

/// What a pass changed. Callers persist the registration only on `Updated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskOutcome {
    Unchanged,
    Updated(RiskUpdate),
}

impl RiskOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RiskOutcome::Updated(_))
    }

    /// The registration was reset while its user had never been told about the risk.
    pub fn missed_notification(&self) -> bool {
        match self {
            RiskOutcome::Updated(update) => update.missed_notification,
            RiskOutcome::Unchanged => false,
        }
    }
}

/// Details of an updating pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskUpdate {
    /// Fresh exposure crossed the threshold.
    pub raised: bool,
    /// Retention period expired and the risk was cleared.
    pub reset: bool,
    /// `reset` happened before the user was notified.
    pub missed_notification: bool,
    /// Expositions dropped by the purge.
    pub purged: usize,
}

/// Kind of retention reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionReset {
    AlreadyNotified,
    MissedNotification,
}
