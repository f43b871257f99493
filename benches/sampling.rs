use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hiku::pcg::Pcg32;
use hiku::reservoir::Reservoir;
use hiku::sample::{sample, sample_with, Strategy};
use hiku::canonical;
use rand::RngCore;

fn bench_pcg(c: &mut Criterion) {
    let mut group = c.benchmark_group("pcg32");

    group.bench_function("next_u32", |b| {
        let mut rng = Pcg32::new(1);
        b.iter(|| black_box(rng.next_u32()))
    });

    group.bench_function("canonical", |b| {
        let mut rng = Pcg32::new(1);
        b.iter(|| black_box(canonical(&mut rng)))
    });

    // Jump cost should be flat in the distance.
    for &d in &[1u64 << 10, 1 << 32, u64::MAX] {
        group.bench_function(format!("discard_{d}"), |b| {
            let mut rng = Pcg32::new(1);
            b.iter(|| rng.discard(black_box(d)))
        });
    }
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    let n = 100_000;
    let source: Vec<u64> = (0..n as u64).collect();
    let ks = [10, 1_000, 50_000];

    for &k in &ks {
        for strategy in [Strategy::Rejection, Strategy::PartialShuffle, Strategy::Selection] {
            group.bench_function(format!("{strategy:?}_n{n}_k{k}"), |b| {
                let mut rng = Pcg32::new(7);
                b.iter(|| black_box(sample_with(strategy, &source, k, &mut rng)))
            });
        }
        group.bench_function(format!("dispatch_n{n}_k{k}"), |b| {
            let mut rng = Pcg32::new(7);
            b.iter(|| black_box(sample(&source, k, &mut rng)))
        });
    }
    group.finish();
}

fn bench_reservoir(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir");
    let k = 100;

    for &size in &[1_000, 10_000, 100_000] {
        group.bench_function(format!("alg_r_n{size}_k{k}"), |b| {
            let mut rng = Pcg32::new(3);
            b.iter(|| {
                let mut reservoir = Reservoir::new(k);
                for i in 0..size {
                    reservoir.add(black_box(i), &mut rng);
                }
                black_box(reservoir.samples().len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pcg, bench_strategies, bench_reservoir);
criterion_main!(benches);
