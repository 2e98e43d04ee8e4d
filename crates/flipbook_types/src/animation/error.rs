//! Error types for animation definitions and playback.

use thiserror::Error;

/// Errors that can occur when building or playing an animation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
	/// A frame index outside `[0, frame_count)` was requested
	#[error("Frame index {index} out of range (frame count: {frame_count})")]
	FrameOutOfRange {
		/// Frame index that was requested
		index: usize,
		/// Number of frames in the animation
		frame_count: usize,
	},

	/// The definition contains no frames
	#[error("Animation '{name}' has no frames")]
	EmptyDefinition {
		/// Name of the offending animation
		name: String,
	},

	/// Playback could not make progress because every visited frame has a zero duration
	#[error("Animation '{name}' stalled after {advances} frame advances without consuming any time")]
	StalledPlayback {
		/// Name of the offending animation
		name: String,
		/// Number of advances performed before giving up
		advances: usize,
	},

	/// Playback speed must be finite and non-negative
	#[error("Invalid playback speed: {0}")]
	InvalidSpeed(f32),

	/// No animation with the given name exists in the library
	#[error("Animation '{0}' not found")]
	AnimationNotFound(String),
}

impl AnimationError {
	/// Creates a `FrameOutOfRange` error.
	pub fn frame_out_of_range(index: usize, frame_count: usize) -> Self {
		Self::FrameOutOfRange {
			index,
			frame_count,
		}
	}
}
