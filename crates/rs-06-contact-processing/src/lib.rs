//! # rs-06-contact-processing
//!
//! Ingestion of uploaded contacts: each contact carries the HELLO messages a
//! device received from one EBID. Messages are authenticated against the
//! emitter's MAC key, checked against their reception time, scored with the
//! RSSI model and the score is appended to the emitter's registration.
//!
//! ## Per-HELLO Checks
//!
//! | Check  | Rule                                                        |
//! |--------|-------------------------------------------------------------|
//! | MAC    | `HMAC-SHA256(K_a, 0x01 ‖ ecc ‖ ebid ‖ time16)[..5]`         |
//! | Time   | `time16` within `hello_time_tolerance_secs` of reception     |
//! | Epoch  | reception epoch within one epoch of the EBID epoch          |
//!
//! A failing message is dropped; a contact left without messages is
//! discarded. An unknown emitter discards the whole contact.
//!
//! ## Scoring
//!
//! [`ScoringStrategy`] is the seam for risk models; [`RssiScoringV2`] is the
//! deployed one.

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::{ContactConfig, ScoringConfig};
pub use domain::{
    Contact, ContactError, ContactOutcome, ContactResult, HelloMessage, RssiScoringV2,
    ScoringResult, ScoringStrategy,
};
pub use ports::inbound::ContactProcessingApi;
pub use service::ContactProcessingService;
