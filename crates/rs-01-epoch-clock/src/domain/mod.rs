//! Domain layer for the epoch clock

pub mod clock;
pub mod instant;
pub mod sequence;

pub use clock::EpochClock;
pub use instant::EpochInstant;
pub use sequence::EpochSequence;

/// Length of one protocol epoch. Fixed by the protocol.
pub const EPOCH_DURATION_SECS: i64 = 15 * 60;

/// Epochs in a UTC day.
pub const EPOCHS_PER_DAY: i64 = 24 * 60 * 60 / EPOCH_DURATION_SECS;

/// Seconds between 1900-01-01 (NTP era 0) and 1970-01-01.
pub const NTP_UNIX_OFFSET_SECS: i64 = 2_208_988_800;
