use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dp_spline_tool::{calculate, SplineOptions, Vector2};
use std::hint::black_box;

fn build_polygon(pole_count: usize) -> Vec<Vector2> {
    (0..pole_count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / pole_count as f64;
            let radius = 100.0 + 15.0 * ((i * 7) % 5) as f64;
            Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp_spline_order");
    let poles = build_polygon(24);

    for &order in &[1usize, 2, 4] {
        group.bench_with_input(BenchmarkId::new("interpolating", order), &order, |b, &r| {
            b.iter(|| {
                let nodes = calculate(black_box(&poles), r, 8, true).expect("Spline failed");
                black_box(nodes.len())
            })
        });
        group.bench_with_input(BenchmarkId::new("approximating", order), &order, |b, &r| {
            b.iter(|| {
                let nodes = calculate(black_box(&poles), r, 8, false).expect("Spline failed");
                black_box(nodes.len())
            })
        });
    }

    group.finish();
}

fn bench_pole_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp_spline_poles");
    let options = SplineOptions::default();

    for &pole_count in &[8usize, 32, 64] {
        let poles = build_polygon(pole_count);
        group.bench_with_input(BenchmarkId::new("default", pole_count), &poles, |b, poles| {
            b.iter(|| {
                let nodes = calculate(
                    black_box(poles),
                    options.order,
                    options.subdivision,
                    options.include_poles,
                )
                .expect("Spline failed");
                black_box(nodes.len())
            })
        });
    }

    group.finish();
}

criterion_group!(spline_benches, bench_orders, bench_pole_counts);
criterion_main!(spline_benches);
