//! # Contact Date Jitter
//!
//! `PlusMinusOneDay` moves the contact date by a random whole day in
//! `[-1, +1]`, narrowing the interval near the boundaries so the jitter never
//! pushes the date past "today" or across the retention limit:
//!
//! | days since contact | offset range |
//! |--------------------|--------------|
//! | 0                  | `[-1, 0]`    |
//! | retention          | `[0, +1]`    |
//! | retention + 1      | `[-1, 0]`    |
//! | otherwise          | `[-1, +1]`   |

use crate::ports::outbound::ContactDateRandomizer;
use chrono::Duration;
use rand::Rng;
use rs_01_epoch_clock::EpochInstant;

/// Keeps the contact date as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl ContactDateRandomizer for NoJitter {
    fn randomize(&self, contact: EpochInstant, _reference: EpochInstant) -> EpochInstant {
        contact
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlusMinusOneDay {
    retention_period_days: i64,
}

impl PlusMinusOneDay {
    pub fn new(retention_period_days: u32) -> Self {
        Self {
            retention_period_days: i64::from(retention_period_days),
        }
    }

    fn bounds(&self, days_since_contact: i64) -> (i64, i64) {
        match days_since_contact {
            0 => (-1, 0),
            d if d == self.retention_period_days => (0, 1),
            d if d == self.retention_period_days + 1 => (-1, 0),
            _ => (-1, 1),
        }
    }
}

impl ContactDateRandomizer for PlusMinusOneDay {
    fn randomize(&self, contact: EpochInstant, reference: EpochInstant) -> EpochInstant {
        let (past, future) = self.bounds(contact.days_between(&reference));
        let offset = rand::thread_rng().gen_range(past..=future);
        contact.plus(Duration::days(offset)).truncated_to_day()
    }
}
