//! Ports for status handling

pub mod inbound;
