//! Ports for contact processing

pub mod inbound;
