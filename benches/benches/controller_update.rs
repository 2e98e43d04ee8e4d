//! Benchmark suite for animation playback
//!
//! This benchmark measures the cost of `AnimationController::update` for regular game
//! loop ticks and for long stalls that skip through many frames at once.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, sync::Arc, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flipbook_benches::{Mode, generate_definition, generate_irregular_definition, generate_ticks};
use flipbook_types::animation::{AnimationController, PlaybackConfig};

/// Benchmark a 60 Hz game loop with jittered ticks
fn bench_game_loop_ticks(c: &mut Criterion) {
	let mut group = c.benchmark_group("update_ticks");
	let ticks = generate_ticks(600, 16.6, 0.2, 7);
	group.throughput(Throughput::Elements(ticks.len() as u64));

	for (name, mode) in [("looping", Mode::Looping), ("ping_pong", Mode::PingPong)] {
		let definition = Arc::new(generate_definition(8, 100, mode));
		group.bench_with_input(BenchmarkId::new("mode", name), &ticks, |b, ticks| {
			b.iter(|| {
				let mut controller = AnimationController::new(Arc::clone(&definition)).unwrap();
				controller.play();
				for &tick in ticks {
					controller.update(black_box(tick)).unwrap();
				}
				black_box(controller.current_frame())
			});
		});
	}

	let irregular = Arc::new(generate_irregular_definition(24, 20, 200, 11));
	group.bench_with_input(BenchmarkId::new("mode", "irregular"), &ticks, |b, ticks| {
		b.iter(|| {
			let mut controller = AnimationController::new(Arc::clone(&irregular)).unwrap();
			controller.play();
			for &tick in ticks {
				controller.update(black_box(tick)).unwrap();
			}
			black_box(controller.current_frame())
		});
	});

	group.finish();
}

/// Benchmark a single update after a long stall
fn bench_stall_catch_up(c: &mut Criterion) {
	let mut group = c.benchmark_group("update_stall");
	let definition = Arc::new(generate_definition(16, 10, Mode::Looping));

	for stall_ms in [100u64, 1_000, 10_000] {
		group.throughput(Throughput::Elements(stall_ms / 10));
		group.bench_with_input(BenchmarkId::new("stall_ms", stall_ms), &stall_ms, |b, &stall_ms| {
			b.iter(|| {
				let mut controller =
					AnimationController::with_config(Arc::clone(&definition), PlaybackConfig::lenient())
						.unwrap();
				controller.play();
				controller.update(black_box(Duration::from_millis(stall_ms))).unwrap();
				black_box(controller.internal_frame())
			});
		});
	}

	group.finish();
}

/// Benchmark trigger dispatch with several listeners attached
fn bench_listener_dispatch(c: &mut Criterion) {
	let mut group = c.benchmark_group("listeners");
	let definition = Arc::new(generate_definition(4, 10, Mode::Looping));

	for listeners in [0usize, 1, 8] {
		group.bench_with_input(BenchmarkId::new("count", listeners), &listeners, |b, &listeners| {
			b.iter(|| {
				let mut controller = AnimationController::new(Arc::clone(&definition)).unwrap();
				for _ in 0..listeners {
					controller.subscribe(|controller, trigger| {
						black_box((controller.internal_frame(), trigger));
					});
				}
				controller.play();
				controller.update(black_box(Duration::from_millis(1_000))).unwrap();
				black_box(controller.current_frame())
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_game_loop_ticks, bench_stall_catch_up, bench_listener_dispatch);
criterion_main!(benches);
