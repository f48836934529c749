//! # RS-05 Batch Benchmarks
//!
//! Full risk passes over an in-memory store, varying the population and the
//! worker count. One registration in ten carries an exposition.

use crate::fixtures::{reference_config, reference_now, Harness};
use criterion::{BenchmarkId, Criterion, Throughput};
use rs_06_contact_processing::ContactProcessingApi;
use shared_types::ServerConfig;
use std::time::Duration;

fn populated(registrations: usize, workers: usize) -> Harness {
    let config = ServerConfig {
        batch_workers: workers,
        ..reference_config()
    };
    let h = Harness::new(&config, reference_now()).expect("harness");
    let epoch = h.current_epoch();
    for index in 0..registrations {
        let device = h.register().expect("device");
        if index % 10 == 0 {
            let contact = h.contact(&device, epoch, -50).expect("contact");
            h.contacts.process(&contact).expect("processed");
        }
    }
    h
}

pub fn bench_batch_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("rs-05-batch");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for registrations in [1_000usize, 10_000] {
        for workers in [1usize, 4] {
            let h = populated(registrations, workers);
            let epoch = h.current_epoch();
            group.throughput(Throughput::Elements(registrations as u64));
            group.bench_function(
                BenchmarkId::new(format!("run_{}_workers", workers), registrations),
                |b| b.iter(|| h.batch.run(epoch).expect("batch")),
            );
        }
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_batch_run(c);
}
