//! Benchmark helper utilities for flipbook-rs
//!
//! This module provides generators for synthetic animation definitions and tick
//! sequences shared by the benchmark suite.

use std::time::Duration;

use flipbook_types::animation::{AnimationDefinition, AnimationFrame};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Playback mode of a generated definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Plays once and completes
	Once,
	/// Wraps around at the end
	Looping,
	/// Bounces between the ends
	PingPong,
}

/// Generates a definition of `frame_count` frames lasting `frame_ms` each.
pub fn generate_definition(frame_count: u32, frame_ms: u64, mode: Mode) -> AnimationDefinition {
	let indices: Vec<u32> = (0..frame_count).collect();
	let definition =
		AnimationDefinition::from_frame_indices("bench", &indices, Duration::from_millis(frame_ms))
			.expect("frame_count must be non-zero");
	match mode {
		Mode::Once => definition,
		Mode::Looping => definition.with_looping(true),
		Mode::PingPong => definition.with_looping(true).with_ping_pong(true),
	}
}

/// Generates a definition with randomised frame durations between `min_ms` and `max_ms`.
pub fn generate_irregular_definition(
	frame_count: u32,
	min_ms: u64,
	max_ms: u64,
	seed: u64,
) -> AnimationDefinition {
	let mut rng = SmallRng::seed_from_u64(seed);
	let frames = (0..frame_count)
		.map(|i| AnimationFrame::from_millis(i, rng.random_range(min_ms..=max_ms)))
		.collect();
	AnimationDefinition::new("irregular", frames)
		.expect("frame_count must be non-zero")
		.with_looping(true)
}

/// Generates `count` tick lengths around `base_ms`, varying by up to `jitter` (fraction).
pub fn generate_ticks(count: usize, base_ms: f64, jitter: f64, seed: u64) -> Vec<Duration> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count)
		.map(|_| {
			let variation = if jitter > 0.0 {
				rng.random_range(-jitter..jitter)
			} else {
				0.0
			};
			Duration::from_secs_f64(base_ms * (1.0 + variation) / 1000.0)
		})
		.collect()
}
