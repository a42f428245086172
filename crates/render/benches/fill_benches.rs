//! Criterion benchmarks for the fill loop
//!
//! Run with: cargo bench -p tonefill-render --bench fill_benches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tonefill_math::{exp, sin};
use tonefill_render::env::{PAGE_SIZE, SAMPLE_BYTES};
use tonefill_render::{fill, fill_slice, vars, Env, FillParams, LinearMemory, Tick};

const SAMPLE_RATE: f32 = 44100.0;

fn bench_fill_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let mut bytes = vec![0u8; PAGE_SIZE];

    for block in [64u32, 128, 512, 4096] {
        group.throughput(Throughput::Elements(u64::from(block)));
        group.bench_with_input(BenchmarkId::new("sine", block), &block, |b, &block| {
            let mut memory = LinearMemory::new(&mut bytes);
            let mut env = Env::new();
            let mut formula = vars(&["freq"], |tick: Tick, args: &[f32]| {
                sin(core::f32::consts::TAU * args[0] * tick.t)
            });
            let mut start = 0u32;
            b.iter(|| {
                let params = FillParams::new(start, block, SAMPLE_RATE);
                fill(&mut env, &mut memory, params, black_box(&[440.0f32][..]), &mut formula)
                    .unwrap();
                start = start.wrapping_add(block);
            });
        });
    }

    group.finish();
}

fn bench_fill_vs_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_vs_slice");
    let block = (PAGE_SIZE / SAMPLE_BYTES) as u32;
    group.throughput(Throughput::Elements(u64::from(block)));

    let mut pluck = |tick: Tick, args: &[f32]| {
        exp(-args[1] * tick.t) * sin(core::f32::consts::TAU * args[0] * tick.t)
    };

    let args = [220.0f32, 4.0];
    let mut bytes = vec![0u8; PAGE_SIZE];
    group.bench_function("linear_memory", |b| {
        let mut memory = LinearMemory::new(&mut bytes);
        let mut env = Env::new();
        b.iter(|| {
            let params = FillParams::new(0, block, SAMPLE_RATE);
            fill(&mut env, &mut memory, params, black_box(&args), &mut pluck).unwrap();
        })
    });

    let mut out = vec![0.0f32; block as usize];
    group.bench_function("slice", |b| {
        b.iter(|| {
            fill_slice(&mut out, 0, SAMPLE_RATE, black_box(&args), &mut pluck).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fill_block_sizes, bench_fill_vs_slice);
criterion_main!(benches);
