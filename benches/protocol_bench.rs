//! Benchmarks for RHCP request processing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rhcp::protocol::EngineV1;
use rhcp::store::{MemoryStore, Record};

fn protocol_benchmarks(c: &mut Criterion) {
    let engine = EngineV1::new();
    let store = MemoryStore::new(vec![
        Record::new("lamp1", "off"),
        Record::new("lamp2", "on"),
    ]);

    c.bench_function("parse_get", |b| {
        b.iter(|| engine.parse(black_box("GET lamp1 1.0\r\n\r\n\r\n")))
    });

    c.bench_function("parse_set", |b| {
        b.iter(|| engine.parse(black_box("SET lamp1 1.0\r\nStatus: on\r\n\r\n\r\n")))
    });

    c.bench_function("process_get", |b| {
        b.iter(|| engine.process(black_box("GET lamp1 1.0\r\n\r\n\r\n"), &store))
    });

    c.bench_function("process_set", |b| {
        b.iter(|| engine.process(black_box("SET lamp1 1.0\r\nStatus: on\r\n\r\n\r\n"), &store))
    });
}

criterion_group!(benches, protocol_benchmarks);
criterion_main!(benches);
