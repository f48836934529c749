//! # RS-02 Authentication Benchmarks
//!
//! Every device request pays for one EBID decryption and one HMAC; HELLO
//! validation pays one truncated HMAC per message.

use crate::fixtures::{Device, Harness};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rs_02_authentication::domain::mac::compute_hello_mac;
use rs_02_authentication::{AuthenticationApi, RequestType};

fn setup() -> (Harness, Device) {
    let harness = Harness::reference().expect("harness");
    let device = harness.register().expect("device");
    (harness, device)
}

pub fn bench_ebid(c: &mut Criterion) {
    let (h, device) = setup();
    let epoch = h.current_epoch();
    let ebid = h.auth.generate_ebid(epoch, &device.id_a).expect("ebid");

    let mut group = c.benchmark_group("rs-02-ebid");
    group.bench_function("generate", |b| {
        b.iter(|| black_box(h.auth.generate_ebid(black_box(epoch), &device.id_a)))
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| black_box(h.auth.decrypt_ebid(black_box(epoch), &ebid)))
    });
    group.finish();
}

pub fn bench_request_verification(c: &mut Criterion) {
    let (h, device) = setup();
    let mut group = c.benchmark_group("rs-02-verify");

    for request_type in [
        RequestType::Status,
        RequestType::Unregister,
        RequestType::DeleteHistory,
    ] {
        let bundle = h.bundle(&device, request_type).expect("bundle");
        group.bench_with_input(
            BenchmarkId::new("verify", request_type.name()),
            &bundle,
            |b, bundle| b.iter(|| black_box(h.auth.verify(bundle))),
        );
    }

    let mut forged = h.bundle(&device, RequestType::Status).expect("bundle");
    forged.mac[0] ^= 0x01;
    group.bench_function("verify_forged", |b| {
        b.iter(|| black_box(h.auth.verify(&forged).is_err()))
    });
    group.finish();
}

pub fn bench_hello_mac(c: &mut Criterion) {
    let (h, device) = setup();
    let ebid = h
        .auth
        .generate_ebid(h.current_epoch(), &device.id_a)
        .expect("ebid");

    let mut group = c.benchmark_group("rs-02-hello-mac");
    for count in [1u16, 60, 900] {
        let hellos: Vec<_> = (0..count)
            .map(|t| {
                let mac = compute_hello_mac(&device.mac_key, 0x33, &ebid, t).expect("mac");
                (t, mac)
            })
            .collect();
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("verify", count), &hellos, |b, hellos| {
            b.iter(|| {
                hellos
                    .iter()
                    .filter(|(t, mac)| {
                        h.auth
                            .verify_hello_mac(&device.id_a, 0x33, &ebid, *t, mac)
                            .is_ok()
                    })
                    .count()
            })
        });
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_ebid(c);
    bench_request_verification(c);
    bench_hello_mac(c);
}
