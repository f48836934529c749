//! # ROBERT Test Suite
//!
//! Cross-subsystem tests driving the full stack through its public APIs.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # In-memory stack with a settable clock
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── rs_02_authentication.rs
//! │   ├── rs_05_batch.rs
//! │   └── rs_06_scoring.rs
//! │
//! └── integration/      # Contact → batch → status flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p robert-tests
//!
//! # By category
//! cargo test -p robert-tests integration::
//!
//! # Benchmarks
//! cargo bench -p robert-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
