//! Benchmarks for wedge-model construction and convolution.
//!
//! Run with: `cargo bench --bench wedge_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wedge_rs::{earth_model, tuning_wedge, wavelet, LayerStack, TuningAnalysis, WaveletSpec};

fn reference_stack() -> LayerStack {
    LayerStack::from_props(&[3000.0, 2.5, 2700.0, 2.3, 3000.0, 2.5]).unwrap()
}

fn bench_earth_model(c: &mut Criterion) {
    let stack = reference_stack();
    c.bench_function("earth_model", |b| {
        b.iter(|| earth_model(black_box(&stack)))
    });
}

fn bench_wavelet_synthesis(c: &mut Criterion) {
    let ricker = WaveletSpec::ricker(30.0).unwrap();
    let ormsby = WaveletSpec::ormsby([5.0, 10.0, 40.0, 50.0]).unwrap();
    c.bench_function("wavelet_ricker", |b| {
        b.iter(|| wavelet(black_box(0.200), black_box(0.001), &ricker).unwrap())
    });
    c.bench_function("wavelet_ormsby", |b| {
        b.iter(|| wavelet(black_box(0.200), black_box(0.001), &ormsby).unwrap())
    });
}

fn bench_tuning_wedge(c: &mut Criterion) {
    let stack = reference_stack();
    let model = earth_model(&stack);
    let spec = WaveletSpec::ricker(30.0).unwrap();
    let w = wavelet(0.200, 0.001, &spec).unwrap();
    c.bench_function("tuning_wedge", |b| {
        b.iter(|| tuning_wedge(black_box(&model.rc), black_box(&w)))
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let stack = reference_stack();
    let spec = WaveletSpec::ricker(30.0).unwrap();
    c.bench_function("tuning_analysis", |b| {
        b.iter(|| TuningAnalysis::run(black_box(&stack), 0.200, 0.001, &spec).unwrap())
    });
}

criterion_group!(
    benches,
    bench_earth_model,
    bench_wavelet_synthesis,
    bench_tuning_wedge,
    bench_full_analysis
);
criterion_main!(benches);
