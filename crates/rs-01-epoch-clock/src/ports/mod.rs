//! Ports for the epoch clock

pub mod outbound;
