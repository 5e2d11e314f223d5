//! # Record Codec Benchmarks
//!
//! - Build + sign a v4 record
//! - Encode to wire bytes
//! - Decode + verify (the per-packet cost)
//! - Rejection of hostile inputs (must be cheaper than a full verify)

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use k256::ecdsa::SigningKey;
use node_record::{build_v4_record, NodeRecord};

fn sample_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

fn sample_record(key: &SigningKey) -> NodeRecord {
    build_v4_record(key, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 30303, 30303)
        .expect("sample record builds")
}

pub fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("node-record/build");
    group.measurement_time(Duration::from_secs(5));

    let key = sample_key();
    group.bench_function("build_v4", |b| {
        b.iter(|| {
            black_box(build_v4_record(
                &key,
                IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
                black_box(30303),
                30303,
            ))
        })
    });

    let record = sample_record(&key);
    group.bench_function("encode", |b| b.iter(|| black_box(record.encode())));

    group.finish();
}

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("node-record/decode");
    group.measurement_time(Duration::from_secs(5));

    let encoded = sample_record(&sample_key()).encode();
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("decode_verify", |b| {
        b.iter(|| black_box(NodeRecord::decode(black_box(&encoded))))
    });

    // Many distinct records, as seen from a crawl
    for count in [10usize, 100] {
        let batch: Vec<Vec<u8>> = (0..count)
            .map(|_| sample_record(&sample_key()).encode())
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("decode_batch", count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .filter(|bytes| NodeRecord::decode(bytes).is_ok())
                    .count()
            })
        });
    }

    group.finish();
}

pub fn bench_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("node-record/reject");

    let oversized = vec![0xc0u8; 4096];
    group.bench_function("oversized", |b| {
        b.iter(|| black_box(NodeRecord::decode(black_box(&oversized)).is_err()))
    });

    let mut tampered = sample_record(&sample_key()).encode();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    group.bench_function("tampered_content", |b| {
        b.iter(|| black_box(NodeRecord::decode(black_box(&tampered)).is_err()))
    });

    let garbage: Vec<u8> = {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        (0..200).map(|_| rng.gen()).collect()
    };
    group.bench_function("random_bytes", |b| {
        b.iter(|| black_box(NodeRecord::decode(black_box(&garbage)).is_err()))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_build(c);
    bench_decode(c);
    bench_rejections(c);
}
