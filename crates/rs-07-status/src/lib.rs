//! # rs-07-status
//!
//! Handlers for the authenticated requests a client sends about itself:
//!
//! | Request          | Effect                                                 |
//! |------------------|--------------------------------------------------------|
//! | `STATUS`         | throttled risk report, marks an at-risk user notified  |
//! | `DELETE_HISTORY` | clears the recorded exposures                          |
//! | `UNREGISTER`     | deletes the registration                               |
//!
//! A status request is accepted when at least
//! `min_epochs_between_status_requests` whole epochs separate it from the
//! previous accepted one. A throttled request leaves the registration as is.

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use config::StatusConfig;
pub use domain::{check_throttling, RiskStatus};
pub use error::{StatusError, StatusResult};
pub use ports::inbound::StatusApi;
pub use service::StatusService;
