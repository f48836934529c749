//! # Batch Orchestrator Service
//!
//! ```text
//!            partition(id_range, workers)
//!   ┌──────────────┬──────────────┬──────────────┐
//!   │   worker 0   │   worker 1   │   worker n   │   rayon pool
//!   │ page → risk  │ page → risk  │ page → risk  │
//!   │  → save      │  → save      │  → save      │
//!   └──────┬───────┴──────┬───────┴──────┬───────┘
//!          └──────── Σ BatchReport ──────┘
//! ```
//!
//! Each worker owns its sub-range end to end, so no registration is seen by
//! two workers in one run. Only `Updated` registrations are written back.

use crate::config::BatchConfig;
use crate::domain::{partition, BatchReport};
use crate::error::{BatchError, BatchResult};
use rayon::prelude::*;
use rs_04_risk_engine::RiskEngineApi;
use shared_types::{IdRange, RegistrationStore};
use tracing::{debug, info, warn};

pub struct BatchOrchestrator<S: RegistrationStore, E: RiskEngineApi> {
    store: S,
    engine: E,
    config: BatchConfig,
}

impl<S: RegistrationStore, E: RiskEngineApi> BatchOrchestrator<S, E> {
    pub fn new(store: S, engine: E, config: BatchConfig) -> BatchResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            engine,
            config,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one risk pass over the configured id range.
    ///
    /// # Errors
    ///
    /// `WorkerPool` when the thread pool cannot be built, `Store` when a
    /// worker cannot count its range. Per-registration failures are counted
    /// in the report instead.
    pub fn run(&self, current_epoch: i32) -> BatchResult<BatchReport> {
        let ranges = partition(self.config.id_range, self.config.worker_count);
        info!(
            epoch = current_epoch,
            workers = ranges.len(),
            "[rs-05] Starting risk batch"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count)
            .thread_name(|i| format!("risk-batch-{}", i))
            .build()
            .map_err(|e| BatchError::WorkerPool(e.to_string()))?;

        let reports = pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| self.run_range(range, current_epoch))
                .collect::<BatchResult<Vec<_>>>()
        })?;
        let report: BatchReport = reports.into_iter().sum();

        info!(
            total = report.total,
            processed = report.processed,
            skipped = report.skipped,
            updated = report.updated,
            missed_notifications = report.missed_notifications,
            "[rs-05] Risk batch finished"
        );
        Ok(report)
    }

    /// Page through `range`, run the engine and write back updates.
    fn run_range(&self, range: IdRange, current_epoch: i32) -> BatchResult<BatchReport> {
        let mut report = BatchReport {
            total: self.store.count_in_range(range)?,
            ..Default::default()
        };
        let mut seen = 0u64;
        let mut after = None;

        loop {
            let page = match self.store.page(range, after, self.config.page_size) {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        min = range.min,
                        max = range.max,
                        "[rs-05] Page read failed, skipping rest of range: {}",
                        e
                    );
                    break;
                }
            };
            let Some(last) = page.last() else {
                break;
            };
            after = Some(last.id_a.as_u64());

            for mut registration in page {
                seen += 1;
                let outcome = self.engine.process(&mut registration, current_epoch);
                if !outcome.is_updated() {
                    report.processed += 1;
                    continue;
                }
                match self.store.save(&registration) {
                    Ok(()) => {
                        report.processed += 1;
                        report.updated += 1;
                        if outcome.missed_notification() {
                            report.missed_notifications += 1;
                        }
                    }
                    Err(e) => {
                        warn!(
                            id = %registration.id_a,
                            "[rs-05] Write-back failed: {}",
                            e
                        );
                        report.skipped += 1;
                        report.write_failures += 1;
                    }
                }
            }
        }

        // Keys that were counted but never read.
        report.total = report.total.max(seen);
        report.skipped += report.total - seen;

        debug!(
            min = range.min,
            max = range.max,
            total = report.total,
            updated = report.updated,
            "[rs-05] Range done"
        );
        Ok(report)
    }
}
