//! # rs-01-epoch-clock
//!
//! Time abstraction anchoring every protocol message and scoring decision.
//!
//! ## Overview
//!
//! - **Epoch**: 15-minute unit counted from the service start (UTC midnight)
//! - **Time32**: low 32 bits of NTP seconds, carried by authenticated requests
//! - **Time16**: low 16 bits of NTP seconds, carried by HELLO messages
//! - **Textual form**: `2022-04-23T08:30:00Z=10786E`
//!
//! ```text
//! service start                                   instant
//!      │◄── 900 s ──►│◄── 900 s ──►│ ... │◄── 900 s ──►│
//!      epoch 0        epoch 1             epoch n (floor)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rs_01_epoch_clock::EpochClock;
//!
//! let clock = EpochClock::new(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
//! let t = clock.at_epoch(10786);
//! assert_eq!(t.to_string(), "2022-04-23T08:30:00Z=10786E");
//! assert_eq!(t.plus_epochs(2).as_epoch_id(), 10788);
//! ```

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{
    EpochClock, EpochInstant, EpochSequence, EPOCHS_PER_DAY, EPOCH_DURATION_SECS,
    NTP_UNIX_OFFSET_SECS,
};
pub use error::{ClockError, ClockResult};
pub use ports::outbound::{FixedTimeSource, SystemTimeSource, TimeSource};
