//! # Epoch Clock
//!
//! Factory for `EpochInstant`s sharing one service start. All constructors
//! except `now()` are deterministic.

use super::instant::EpochInstant;
use super::{EPOCH_DURATION_SECS, NTP_UNIX_OFFSET_SECS};
use crate::error::{ClockError, ClockResult};
use crate::ports::outbound::{SystemTimeSource, TimeSource};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;
use std::sync::Arc;

/// Converts between wall-clock time and protocol epochs.
#[derive(Clone)]
pub struct EpochClock {
    service_start: DateTime<Utc>,
    time_source: Arc<dyn TimeSource>,
}

impl EpochClock {
    /// Clock whose epoch 0 starts at UTC midnight of `service_start_date`.
    pub fn new(service_start_date: NaiveDate) -> Self {
        Self::with_time_source(service_start_date, Arc::new(SystemTimeSource))
    }

    /// Same as `new`, reading "now" from `time_source`.
    pub fn with_time_source(
        service_start_date: NaiveDate,
        time_source: Arc<dyn TimeSource>,
    ) -> Self {
        let midnight = service_start_date.and_time(NaiveTime::MIN);
        Self {
            service_start: Utc.from_utc_datetime(&midnight),
            time_source,
        }
    }

    /// Start of epoch 0.
    pub fn service_start(&self) -> DateTime<Utc> {
        self.service_start
    }

    /// Fixed protocol epoch length.
    pub fn epoch_duration(&self) -> Duration {
        Duration::seconds(EPOCH_DURATION_SECS)
    }

    pub fn now(&self) -> EpochInstant {
        self.at(self.time_source.now())
    }

    /// Epoch id of `now()`.
    pub fn current_epoch(&self) -> i32 {
        self.now().as_epoch_id()
    }

    pub fn at(&self, instant: DateTime<Utc>) -> EpochInstant {
        EpochInstant::new(instant, self.service_start)
    }

    /// Instant for a number of seconds since 1900-01-01.
    pub fn at_ntp_timestamp(&self, ntp_seconds: i64) -> ClockResult<EpochInstant> {
        let unix_seconds = ntp_seconds
            .checked_sub(NTP_UNIX_OFFSET_SECS)
            .ok_or_else(|| ClockError::OutOfRange(format!("ntp seconds {}", ntp_seconds)))?;
        self.at_unix_timestamp(unix_seconds)
    }

    /// Instant for a number of seconds since 1970-01-01.
    pub fn at_unix_timestamp(&self, unix_seconds: i64) -> ClockResult<EpochInstant> {
        DateTime::<Utc>::from_timestamp(unix_seconds, 0)
            .map(|instant| self.at(instant))
            .ok_or_else(|| ClockError::OutOfRange(format!("unix seconds {}", unix_seconds)))
    }

    /// Start of epoch `epoch_id`.
    pub fn at_epoch(&self, epoch_id: i32) -> EpochInstant {
        self.at(self.service_start + Duration::seconds(i64::from(epoch_id) * EPOCH_DURATION_SECS))
    }

    /// Instant from a time32 field. The 4 bytes become the low half of the
    /// NTP seconds, so values after the 2036 wrap come back in era 0.
    pub fn at_time32(&self, time32: [u8; 4]) -> ClockResult<EpochInstant> {
        self.at_ntp_timestamp(i64::from(u32::from_be_bytes(time32)))
    }

    /// Parse `<ISO instant>=<epoch id>E`.
    ///
    /// The service start is recovered from the pair: the instant minus
    /// `epoch id` epochs, truncated to the UTC day.
    pub fn parse(text: &str) -> ClockResult<EpochInstant> {
        let parse_error = |reason: &str| ClockError::Parse {
            input: text.to_string(),
            reason: reason.to_string(),
        };

        let body = text
            .strip_suffix('E')
            .ok_or_else(|| parse_error("missing trailing 'E'"))?;
        let (iso, epoch) = body
            .rsplit_once('=')
            .ok_or_else(|| parse_error("missing '=' separator"))?;
        if !iso.ends_with('Z') {
            return Err(parse_error("instant must be UTC with a 'Z' suffix"));
        }
        if epoch.is_empty() || !epoch.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error("epoch id must be a decimal number"));
        }
        let epoch_id: i32 = epoch
            .parse()
            .map_err(|_| parse_error("epoch id out of range"))?;
        let instant = DateTime::parse_from_rfc3339(iso)
            .map_err(|e| parse_error(&e.to_string()))?
            .with_timezone(&Utc);

        let start = instant - Duration::seconds(i64::from(epoch_id) * EPOCH_DURATION_SECS);
        let clock = Self::new(start.date_naive());
        Ok(clock.at(instant))
    }
}

impl fmt::Debug for EpochClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EpochClock")
            .field("service_start", &self.service_start)
            .finish_non_exhaustive()
    }
}
