//! Benchmarks for rotorcrypt engine operations.
//!
//! Measures engine construction, encode/decode throughput over a fixed
//! stream, and encode throughput scaling with stack depth.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::{RotorConfig, RotorEngine, Symbol};

/// Alphabet used across all benchmarks.
const ALPHABET: usize = 26;

/// Stream length in symbols.
const STREAM_LEN: usize = 4096;

/// Builds a configuration of `depth` rotated-alphabet dials.
fn bench_config(depth: usize) -> RotorConfig<ALPHABET> {
    let tables = (0..depth).map(|d| {
        let mut table = [0 as Symbol; ALPHABET];
        for (i, item) in table.iter_mut().enumerate() {
            *item = ((i * 7 + d * 3) % ALPHABET) as Symbol;
        }
        table
    });
    RotorConfig::<ALPHABET>::builder()
        .dials(tables)
        .starting_counter((0..depth).map(|d| (d % ALPHABET) as Symbol))
        .select(0..depth)
        .build()
        .unwrap()
}

fn bench_stream() -> Vec<Symbol> {
    (0..STREAM_LEN)
        .map(|i| ((i * 13 + 5) % ALPHABET) as Symbol)
        .collect()
}

/// Benchmarks `RotorEngine::new()` including inverse derivation.
fn bench_engine_init(c: &mut Criterion) {
    let config = bench_config(8);
    c.bench_function("engine_init", |b| {
        b.iter(|| RotorEngine::new(black_box(&config)).unwrap());
    });
}

/// Benchmarks `encode()` over a 4096-symbol stream with 8 dials.
fn bench_encode(c: &mut Criterion) {
    let mut engine = RotorEngine::new(&bench_config(8)).unwrap();
    let stream = bench_stream();

    let mut group = c.benchmark_group("encode_stream");
    group.throughput(Throughput::Bytes(STREAM_LEN as u64));
    group.bench_function("8_dials", |b| {
        b.iter(|| engine.encode(black_box(&stream)).unwrap());
    });
    group.finish();
}

/// Benchmarks `decode()` over a 4096-symbol stream with 8 dials.
fn bench_decode(c: &mut Criterion) {
    let mut engine = RotorEngine::new(&bench_config(8)).unwrap();
    let encoded = engine.encode(&bench_stream()).unwrap();

    let mut group = c.benchmark_group("decode_stream");
    group.throughput(Throughput::Bytes(STREAM_LEN as u64));
    group.bench_function("8_dials", |b| {
        b.iter(|| engine.decode(black_box(&encoded)).unwrap());
    });
    group.finish();
}

/// Benchmarks in-place encoding across stack depths.
fn bench_encode_depth_scaling(c: &mut Criterion) {
    let depths: &[usize] = &[1, 3, 8, 16];
    let stream = bench_stream();

    let mut group = c.benchmark_group("encode_depth_scaling");
    group.throughput(Throughput::Bytes(STREAM_LEN as u64));

    for &depth in depths {
        let mut engine = RotorEngine::new(&bench_config(depth)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            let mut buffer = stream.clone();
            b.iter(|| engine.encode_in_place(black_box(&mut buffer)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_engine_init,
    bench_encode,
    bench_decode,
    bench_encode_depth_scaling,
);
criterion_main!(benches);
