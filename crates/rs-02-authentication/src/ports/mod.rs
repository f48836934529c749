//! Ports for the authentication codec

pub mod inbound;
pub mod outbound;
