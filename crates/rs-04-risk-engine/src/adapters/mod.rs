//! Contact-date randomizers

pub mod jitter;

pub use jitter::{NoJitter, PlusMinusOneDay};
