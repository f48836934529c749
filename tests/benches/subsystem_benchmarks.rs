//! # ROBERT Subsystem Benchmarks
//!
//! | Subsystem | Hot path |
//! |-----------|----------|
//! | rs-02 Authentication | EBID crypto, request MAC, HELLO MAC |
//! | rs-05 Batch | full risk pass over the store |
//! | rs-06 Contact processing | RSSI scoring, contact ingestion |

use criterion::{criterion_group, criterion_main};
use robert_tests::benchmarks::{rs_02_authentication, rs_05_batch, rs_06_scoring};

criterion_group!(
    benches,
    rs_02_authentication::register_benchmarks,
    rs_05_batch::register_benchmarks,
    rs_06_scoring::register_benchmarks,
);
criterion_main!(benches);
