//! Criterion benchmarks for u-workforce construction and local search.
//!
//! Uses generated instances of increasing size with fixed seeds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_workforce::cost::total_cost;
use u_workforce::generator::{GeneratorConfig, InstanceGenerator};
use u_workforce::grasp::{GraspConfig, GraspRunner};
use u_workforce::local_search::{LocalSearchConfig, LocalSearchRunner};
use u_workforce::model::Instance;

const SIZES: [usize; 3] = [100, 300, 1000];

fn instance(providers: usize) -> Instance {
    InstanceGenerator::new(
        GeneratorConfig::default()
            .with_providers(providers)
            .with_seed(42),
    )
    .generate()
    .expect("generator config is valid")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("grasp_construction");
    group.sample_size(10);

    for n in SIZES {
        let inst = instance(n);
        group.bench_with_input(BenchmarkId::new("greedy", n), &inst, |b, inst| {
            b.iter(|| GraspRunner::run(black_box(inst), &GraspConfig::greedy()))
        });
        group.bench_with_input(BenchmarkId::new("randomized", n), &inst, |b, inst| {
            let config = GraspConfig::randomized(0.9).with_seed(7);
            b.iter(|| GraspRunner::run(black_box(inst), &config))
        });
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);
    let config = LocalSearchConfig::default().with_time_limit_ms(60_000);

    for n in SIZES {
        let inst = instance(n);
        let base = GraspRunner::run(&inst, &GraspConfig::randomized(0.9).with_seed(7))
            .expect("generated instances are feasible");
        group.bench_with_input(BenchmarkId::from_parameter(n), &(inst, base), |b, (inst, base)| {
            b.iter(|| LocalSearchRunner::run(black_box(inst), base.clone(), &config))
        });
    }
    group.finish();
}

fn bench_total_cost(c: &mut Criterion) {
    let inst = instance(1000);
    let base = GraspRunner::run(&inst, &GraspConfig::greedy()).expect("generated instances are feasible");
    c.bench_function("total_cost_1000", |b| {
        b.iter(|| total_cost(black_box(&inst), base.solution.selections()))
    });
}

criterion_group!(benches, bench_construction, bench_local_search, bench_total_cost);
criterion_main!(benches);
