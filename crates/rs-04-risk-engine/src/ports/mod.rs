//! Ports for the risk engine

pub mod inbound;
pub mod outbound;
