//! # ROBERT Benchmarks
//!
//! Criterion benchmarks for the per-request and per-batch hot paths.

pub mod rs_02_authentication;
pub mod rs_05_batch;
pub mod rs_06_scoring;
