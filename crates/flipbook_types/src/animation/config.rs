//! Playback configuration.
//!
//! This module provides the limits that keep a single [`update`] call bounded, no matter
//! how long the elapsed time is or how malformed the frame timings are.
//!
//! [`update`]: super::AnimationController::update

/// Configuration for animation playback.
///
/// # Advance Limits
///
/// `update` consumes elapsed time by repeatedly advancing frames while the countdown of
/// the current frame is exhausted. Two limits keep that loop finite:
///
/// 1. **`max_advances_per_update`**: ceiling of frame advances within one call of looping
///    playback. Whole loop cycles past the ceiling are skipped; overshoot still left when
///    the ceiling is reached is dropped and the current frame restarts. Values below 1
///    count as 1. Non-looping playback is bounded by its frame count instead.
/// 2. **`stall_cycles`**: number of full ping-pong cycles (`2 × frame_count` advances)
///    that may pass without loading a frame with a non-zero duration before playback is
///    declared stalled.
///
/// # Presets
///
/// - `default()`: 10000 advances per update, 1 stall cycle
/// - `lenient()`: 100000 advances per update, 4 stall cycles
/// - `strict()`: 1000 advances per update, 1 stall cycle
///
/// # Examples
///
/// ```
/// use flipbook_types::animation::PlaybackConfig;
///
/// let config = PlaybackConfig::default();
/// assert_eq!(config.max_advances_per_update, 10_000);
///
/// let config = PlaybackConfig::new(64, 2);
/// assert_eq!(config.stall_limit(4), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
	/// Maximum number of frame advances performed by a single update
	pub max_advances_per_update: usize,
	/// Number of ping-pong cycles without progress tolerated before stalling
	pub stall_cycles: usize,
}

impl Default for PlaybackConfig {
	fn default() -> Self {
		Self {
			max_advances_per_update: 10_000,
			stall_cycles: 1,
		}
	}
}

impl PlaybackConfig {
	/// Create a new playback configuration with custom limits.
	///
	/// # Arguments
	/// * `max_advances_per_update` - Advance ceiling per update, raised to at least 1
	/// * `stall_cycles` - Cycles without progress before stalling
	pub fn new(max_advances_per_update: usize, stall_cycles: usize) -> Self {
		Self {
			max_advances_per_update: max_advances_per_update.max(1),
			stall_cycles,
		}
	}

	/// Create a lenient configuration with higher limits.
	///
	/// Suitable for hosts that may stall for a long time (debugger breaks, window drags)
	/// and still want every elapsed frame to be accounted for.
	/// - `max_advances_per_update`: 100000
	/// - `stall_cycles`: 4
	pub fn lenient() -> Self {
		Self {
			max_advances_per_update: 100_000,
			stall_cycles: 4,
		}
	}

	/// Create a strict configuration with lower limits.
	/// - `max_advances_per_update`: 1000
	/// - `stall_cycles`: 1
	pub fn strict() -> Self {
		Self {
			max_advances_per_update: 1_000,
			stall_cycles: 1,
		}
	}

	/// Number of consecutive zero-length advances tolerated for an animation with
	/// `frame_count` frames.
	pub fn stall_limit(&self, frame_count: usize) -> usize {
		frame_count.saturating_mul(2).saturating_mul(self.stall_cycles.max(1))
	}
}
