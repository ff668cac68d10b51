//! Frame tick benchmarks over generated worlds.
//!
//! Run with: cargo bench --package outlast-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outlast_core::prelude::*;

fn generated_game(attempts: u32) -> GameState {
    let mut game = GameState::new(BalanceConfig::default(), 42).unwrap();
    let config = WorldConfig {
        attempts,
        half_extent: 40.0 * (attempts as f32 / 150.0).sqrt().max(1.0),
        ..Default::default()
    };
    game.generate(&config, &FlatTerrain::default());
    game
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for attempts in [150u32, 600, 2400].iter() {
        let mut game = generated_game(*attempts);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_attempts", attempts)),
            attempts,
            |b, _| {
                b.iter(|| {
                    let report = game.update(black_box(1.0 / 60.0)).unwrap();
                    black_box(report)
                });
            },
        );
    }

    group.finish();
}

fn bench_nearest_interactable(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_interactable");

    for attempts in [150u32, 2400].iter() {
        let game = generated_game(*attempts);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_attempts", attempts)),
            attempts,
            |b, _| {
                b.iter(|| black_box(game.nearest_interactable()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_update, bench_nearest_interactable);
criterion_main!(benches);
