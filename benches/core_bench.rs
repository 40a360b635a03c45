use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use kurven_editor::shared::chaikin::chaikin_refine;
use kurven_editor::shared::curve_geometry::{bernstein_curve, casteljau_curve};
use kurven_editor::FactorialTable;
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            let y = if i % 2 == 0 { 1.0 } else { -1.0 } * (i as f64 * 0.5 + 1.0);
            DVec3::new(x, y, 0.0)
        })
        .collect()
}

fn bench_bezier_sampling(c: &mut Criterion) {
    let factorials = FactorialTable::new(100);
    let mut group = c.benchmark_group("bezier_sampling");

    for &point_count in &[4usize, 10, 16] {
        let control_points = build_control_points(point_count);

        group.bench_with_input(
            BenchmarkId::new("bernstein", point_count),
            &control_points,
            |b, points| {
                b.iter(|| {
                    bernstein_curve(&factorials, black_box(points), 10)
                        .expect("Abtastung fehlgeschlagen")
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("casteljau", point_count),
            &control_points,
            |b, points| {
                b.iter(|| {
                    casteljau_curve(black_box(points), 10).expect("Abtastung fehlgeschlagen")
                })
            },
        );
    }

    group.finish();
}

fn bench_chaikin_refinement(c: &mut Criterion) {
    let polygon = build_control_points(6);
    let mut group = c.benchmark_group("chaikin_refinement");

    for &level in &[1usize, 3, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, &level| {
            b.iter(|| chaikin_refine(black_box(&polygon), level))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bezier_sampling, bench_chaikin_refinement);
criterion_main!(benches);
