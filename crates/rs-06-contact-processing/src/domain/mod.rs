//! Domain layer for contact processing

pub mod entities;
pub mod errors;
pub mod scoring;
pub mod validation;

pub use entities::{Contact, ContactOutcome, HelloMessage, ScoringResult};
pub use errors::{ContactError, ContactResult};
pub use scoring::{RssiScoringV2, ScoringStrategy};
pub use validation::{epoch_matches, time16_within_tolerance};
