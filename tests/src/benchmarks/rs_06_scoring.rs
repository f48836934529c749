//! # RS-06 Scoring Benchmarks
//!
//! RSSI scoring cost per contact size, and the full contact ingestion path
//! (decrypt, per-HELLO MAC, score, store).

use crate::fixtures::Harness;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use rs_06_contact_processing::{
    ContactProcessingApi, HelloMessage, RssiScoringV2, ScoringStrategy,
};

const T0: i64 = 3_859_691_400;

fn random_hellos(count: usize) -> Vec<HelloMessage> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let collected = T0 + rng.gen_range(0..900);
            HelloMessage {
                time16: (collected & 0xFFFF) as u16,
                mac: [0; 5],
                rssi_calibrated: rng.gen_range(-100..-20),
                time_collected_on_device: collected,
            }
        })
        .collect()
}

pub fn bench_scoring(c: &mut Criterion) {
    let scoring = RssiScoringV2::default();
    let mut group = c.benchmark_group("rs-06-scoring");

    for count in [2usize, 60, 900] {
        let hellos = random_hellos(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("rssi_v2", count), &hellos, |b, hellos| {
            b.iter(|| black_box(scoring.score(hellos)))
        });
    }
    group.finish();
}

pub fn bench_contact_processing(c: &mut Criterion) {
    let h = Harness::reference().expect("harness");
    let emitter = h.register().expect("device");
    let contact = h
        .contact(&emitter, h.current_epoch(), -45)
        .expect("contact");

    c.bench_function("rs-06-contact/process", |b| {
        b.iter(|| black_box(h.contacts.process(&contact)))
    });
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_scoring(c);
    bench_contact_processing(c);
}
