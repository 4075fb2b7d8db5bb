use std::{hint::black_box, sync::atomic::AtomicBool};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tonegen_benchmark::bench_config as config;
use tonegen_core::{SampleEncoder, StreamMetrics, ToneGenerator, ToneStream};
use tonegen_types::{GenerationConfig, SampleBlock};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for bs in [512usize, 4_096, 65_536] {
        group.throughput(Throughput::Elements(bs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bs), &bs, |b, &bs| {
            let mut generator = ToneGenerator::new(&config("cf32", bs)).unwrap();
            let mut block = SampleBlock::new(0, Vec::with_capacity(bs));

            b.iter(|| {
                generator.fill_block(&mut block);
                black_box(&block);
            });
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let bs = 4_096;
    let block = ToneGenerator::new(&config("cf32", bs)).unwrap().next_block();

    for dtype in ["cu8", "cs16", "cf32", "cf64", "s64"] {
        let encoder = SampleEncoder::from_config(&config(dtype, bs));
        let mut out = Vec::new();

        group.throughput(Throughput::Bytes(encoder.encoded_len(bs) as u64));
        group.bench_function(dtype, |b| {
            b.iter(|| {
                encoder.encode_into(black_box(&block), &mut out).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    c.bench_function("stream_cs16_64_blocks", |b| {
        let cfg = GenerationConfig {
            max_blocks: Some(64),
            ..config("cs16", 512)
        };
        let stop = AtomicBool::new(false);
        let mut out = Vec::with_capacity(64 * cfg.block_bytes());

        b.iter(|| {
            out.clear();
            let mut stream = ToneStream::new(&cfg).unwrap();
            stream
                .run(&mut out, &stop, &StreamMetrics::default())
                .unwrap();
            black_box(&out);
        });
    });
}

criterion_group!(benches, bench_generate, bench_encode, bench_stream);
criterion_main!(benches);
