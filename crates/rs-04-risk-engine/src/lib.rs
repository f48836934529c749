//! # rs-04-risk-engine
//!
//! Turns the exposure scores accumulated by a registration into its
//! at-risk state.
//!
//! ## State Machine
//!
//! ```text
//!              score ≥ threshold
//!   ┌──────┐ ───────────────────► ┌──────────────────┐  status request  ┌────────────────┐
//!   │ Safe │                      │ AtRisk(pending)  │ ───────────────► │ AtRisk(notified)│
//!   └──────┘ ◄─────────────────── └──────────────────┘                  └────────────────┘
//!      ▲       retention expired      (missed notification)                     │
//!      └────────────────────────────────────────────────────────────────────────┘
//!                                  retention expired
//! ```
//!
//! `notified` is never cleared by the engine; it counts notifications over
//! the registration's lifetime.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rs_01_epoch_clock::EpochClock;
//! use rs_04_risk_engine::{RiskConfig, RiskEngine, RiskEngineApi};
//! use shared_types::{EpochExposition, IdA, Registration};
//!
//! let clock = EpochClock::new(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
//! let engine = RiskEngine::new(clock, RiskConfig::default());
//!
//! let mut registration = Registration::new(IdA::random());
//! registration.exposed_epochs = vec![EpochExposition::new(10786, vec![14.0, 2.0])];
//!
//! assert!(engine.process(&mut registration, 10786).is_updated());
//! assert!(registration.at_risk);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{NoJitter, PlusMinusOneDay};
pub use config::RiskConfig;
pub use domain::{RetentionReset, RiskOutcome, RiskUpdate};
pub use ports::inbound::RiskEngineApi;
pub use ports::outbound::ContactDateRandomizer;
pub use service::RiskEngine;
