//! Installation performance benchmarks
//!
//! Benchmarks end-to-end `install_module` runs onto a fresh in-memory host,
//! and the zero-work path where the whole closure is already installed.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use sprig_benchmarks::criterion_config;
use sprig_benchmarks::fixtures::{chain_registry, diamond_registry};
use sprig_installer::{Installer, MemoryHost};
use std::sync::Arc;

/// Benchmark fresh installation of a full chain closure
fn bench_fresh_install(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("fresh_install");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.sample_size(20);

    for depth in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*depth as u64));

        group.bench_with_input(BenchmarkId::new("chain", depth), depth, |b, &depth| {
            let (registry, root) = chain_registry(depth);
            let installer = Installer::new(Arc::new(registry));

            b.iter_batched(
                MemoryHost::new,
                |host| {
                    rt.block_on(async {
                        black_box(installer.install_module(&host, &root).await.unwrap())
                    })
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark installation of a wide diamond closure
fn bench_diamond_install(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("diamond_install");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.sample_size(20);

    for width in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*width as u64));

        group.bench_with_input(BenchmarkId::new("width", width), width, |b, &width| {
            let (registry, root) = diamond_registry(width);
            let installer = Installer::new(Arc::new(registry));

            b.iter_batched(
                MemoryHost::new,
                |host| {
                    rt.block_on(async {
                        black_box(installer.install_module(&host, &root).await.unwrap())
                    })
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark the already-installed path: resolution runs, zero install calls
fn bench_noop_reinstall(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("noop_reinstall");
    group.measurement_time(std::time::Duration::from_secs(5));

    for depth in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*depth as u64));

        group.bench_with_input(BenchmarkId::new("chain", depth), depth, |b, &depth| {
            let (registry, root) = chain_registry(depth);
            let installer = Installer::new(Arc::new(registry));

            let host = MemoryHost::new();
            rt.block_on(async { installer.install_module(&host, &root).await.unwrap() });

            b.iter(|| {
                rt.block_on(async {
                    black_box(installer.install_module(&host, &root).await.unwrap())
                })
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_fresh_install, bench_diamond_install, bench_noop_reinstall
}
criterion_main!(benches);
