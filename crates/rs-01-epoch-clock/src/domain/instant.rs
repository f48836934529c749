//! # Epoch Instant
//!
//! An absolute time point bound to the service start. Every view (NTP seconds,
//! epoch id, time32, time16) is derived on demand.
//!
//! ## Wire Views
//!
//! ```text
//! NTP seconds (i64, big-endian):  [b0 b1 b2 b3 | b4 b5 b6 b7]
//!                                                └─ time32 ─┘
//!                                                     └ time16 ┘
//! ```
//!
//! Time32 keeps only the low 32 bits, so instants after the NTP era wrap
//! (2036-02-07T06:28:16Z) do not survive a time32 round-trip.

use super::sequence::EpochSequence;
use super::{EPOCHS_PER_DAY, EPOCH_DURATION_SECS, NTP_UNIX_OFFSET_SECS};
use chrono::{DateTime, Duration, NaiveTime, SecondsFormat, TimeZone, Utc};
use std::fmt;

/// A time point and the service start it is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochInstant {
    instant: DateTime<Utc>,
    service_start: DateTime<Utc>,
}

impl EpochInstant {
    pub(crate) fn new(instant: DateTime<Utc>, service_start: DateTime<Utc>) -> Self {
        Self {
            instant,
            service_start,
        }
    }

    fn with_instant(&self, instant: DateTime<Utc>) -> Self {
        Self::new(instant, self.service_start)
    }

    /// Wall-clock instant.
    pub fn as_instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Service start this instant is measured from.
    pub fn service_start(&self) -> DateTime<Utc> {
        self.service_start
    }

    /// Seconds since 1970-01-01T00:00:00Z, floored.
    pub fn as_unix_timestamp(&self) -> i64 {
        self.instant.timestamp()
    }

    /// Seconds since 1900-01-01T00:00:00Z, floored.
    pub fn as_ntp_timestamp(&self) -> i64 {
        self.instant.timestamp() + NTP_UNIX_OFFSET_SECS
    }

    /// `floor((instant - service_start) / 15 min)`.
    pub fn as_epoch_id(&self) -> i32 {
        let elapsed = self.instant.timestamp() - self.service_start.timestamp();
        saturate_i32(elapsed.div_euclid(EPOCH_DURATION_SECS))
    }

    /// Bytes 4..8 of the big-endian NTP seconds.
    pub fn as_time32(&self) -> [u8; 4] {
        let bytes = self.as_ntp_timestamp().to_be_bytes();
        [bytes[4], bytes[5], bytes[6], bytes[7]]
    }

    /// Low 16 bits of the NTP seconds.
    pub fn as_time16(&self) -> u16 {
        (self.as_ntp_timestamp() & 0xFFFF) as u16
    }

    /// NTP seconds of the start of this instant's UTC day.
    pub fn as_day_truncated_ntp(&self) -> i64 {
        self.truncated_to_day().as_ntp_timestamp()
    }

    pub fn plus_epochs(&self, epochs: i64) -> Self {
        self.plus(Duration::seconds(epochs * EPOCH_DURATION_SECS))
    }

    pub fn minus_epochs(&self, epochs: i64) -> Self {
        self.plus_epochs(-epochs)
    }

    pub fn plus(&self, duration: Duration) -> Self {
        self.with_instant(self.instant + duration)
    }

    pub fn minus(&self, duration: Duration) -> Self {
        self.with_instant(self.instant - duration)
    }

    /// Start of the epoch containing this instant.
    pub fn truncated_to_epoch(&self) -> Self {
        let epoch = i64::from(self.as_epoch_id());
        self.with_instant(self.service_start + Duration::seconds(epoch * EPOCH_DURATION_SECS))
    }

    /// UTC midnight of this instant's day.
    pub fn truncated_to_day(&self) -> Self {
        let midnight = self.instant.date_naive().and_time(NaiveTime::MIN);
        self.with_instant(Utc.from_utc_datetime(&midnight))
    }

    /// Whole epochs from `self` to `other`, truncated toward zero.
    pub fn epochs_between(&self, other: &EpochInstant) -> i64 {
        (other.instant - self.instant).num_seconds() / EPOCH_DURATION_SECS
    }

    /// Whole days from `self` to `other`, truncated toward zero.
    pub fn days_between(&self, other: &EpochInstant) -> i64 {
        self.epochs_between(other) / EPOCHS_PER_DAY
    }

    pub fn is_before(&self, other: &EpochInstant) -> bool {
        self.instant < other.instant
    }

    pub fn is_after(&self, other: &EpochInstant) -> bool {
        self.instant > other.instant
    }

    /// Epoch-aligned instants from the start of this instant's epoch up to,
    /// but excluding, `end`.
    pub fn until(&self, end: &EpochInstant) -> EpochSequence {
        EpochSequence::new(self.truncated_to_epoch(), *end)
    }
}

/// `<ISO instant>=<epoch id>E`, e.g. `2022-04-23T08:30:00Z=10786E`.
impl fmt::Display for EpochInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}E",
            self.instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.as_epoch_id()
        )
    }
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
