//! # Integration Flows
//!
//! - `flows`: one request type at a time through authentication, the store
//!   and the batch
//! - `lifecycle`: a registration's risk over weeks of simulated time

pub mod flows;
pub mod lifecycle;
