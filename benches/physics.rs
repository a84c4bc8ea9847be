//! Benchmarks for the taut simulation core.

use criterion::{criterion_group, criterion_main, Criterion};
use taut::*;

fn bench_bungee_step(c: &mut Criterion) {
    c.bench_function("bungee_20_segments_60_steps", |b| {
        b.iter(|| {
            let mut rope: Bungee<f64> = Bungee::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(20.0, 0.0),
                20,
                BungeeConfig { relax_passes: 4, ..BungeeConfig::default() },
            )
            .unwrap();
            let ctx = PhysicsContext::new();
            for _ in 0..60 {
                rope.step(1.0 / 60.0, &ctx, &mut NoOpStepObserver);
            }
            rope.positions()
        });
    });
}

fn bench_graph_relaxation(c: &mut Criterion) {
    c.bench_function("graph_100_point_chain_4_passes", |b| {
        let mut g: ConstraintGraph<f64> = ConstraintGraph::with_capacity(100);
        for i in 0..100 {
            g.add_point(LinkedPoint::new(Vec2::new(i as f64, 0.0), 1.0));
        }
        g.pin(0, Vec2::new(0.0, 0.0)).unwrap();
        for i in 0..99 {
            g.add_constraint(i + 1, i, 1.0, ConstraintKind::AtMost).unwrap();
        }
        // Stretch the tail so every pass has work to do.
        g.point_mut(99).pos = Vec2::new(150.0, 0.0);

        b.iter(|| {
            g.satisfy(4);
            g.point(99).pos
        });
    });
}

fn bench_path_mover(c: &mut Criterion) {
    c.bench_function("path_mover_circle_1000_updates", |b| {
        b.iter(|| {
            let mut m: PathMover<f64> =
                PathMover::circle(Vec2::new(0.0, 0.0), 50.0, 16, Winding::Clockwise, 40.0)
                    .unwrap();
            m.set_rotation_speed(1.5);
            m.start();
            for _ in 0..1000 {
                m.update(1.0 / 60.0);
            }
            (m.pos, m.angle())
        });
    });
}

criterion_group!(
    benches,
    bench_bungee_step,
    bench_graph_relaxation,
    bench_path_mover
);
criterion_main!(benches);
