//! Animation definition types.
//!
//! This module defines the [`AnimationDefinition`] struct, the immutable description of an
//! animation that any number of controllers can play at the same time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{error::AnimationError, frame::AnimationFrame};

/// Immutable, shareable description of an animation.
///
/// A definition is an ordered list of [`AnimationFrame`]s plus the default playback policy
/// (looping, reversed, ping-pong). The flags are copied into each
/// [`AnimationController`] on construction and on [`reset`], and playback never writes
/// back to the definition, so it is usually wrapped in an `Arc` and shared by every
/// entity playing the same cycle.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use flipbook_types::animation::{AnimationDefinition, AnimationFrame};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let walk = AnimationDefinition::new(
///     "walk",
///     vec![
///         AnimationFrame::from_millis(0, 100),
///         AnimationFrame::from_millis(1, 100),
///         AnimationFrame::from_millis(2, 150),
///     ],
/// )?
/// .with_looping(true);
///
/// assert_eq!(walk.frame_count(), 3);
/// assert_eq!(walk.total_duration(), Duration::from_millis(350));
/// assert!(walk.is_looping());
/// # Ok(())
/// # }
/// ```
///
/// # Uniform Strips
///
/// ```
/// use std::time::Duration;
/// use flipbook_types::animation::AnimationDefinition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Bounce between the four cells of a sprite sheet row
/// let idle = AnimationDefinition::from_frame_indices("idle", &[4, 5, 6, 7], Duration::from_millis(80))?
///     .with_looping(true)
///     .with_ping_pong(true);
///
/// assert_eq!(idle.frames()[2].frame_index, 6);
/// # Ok(())
/// # }
/// ```
///
/// [`AnimationController`]: super::AnimationController
/// [`reset`]: super::AnimationController::reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationDefinition {
	name: String,
	frames: Vec<AnimationFrame>,
	#[serde(default)]
	looping: bool,
	#[serde(default)]
	reversed: bool,
	#[serde(default)]
	ping_pong: bool,
}

impl AnimationDefinition {
	/// Creates a new definition with all playback flags cleared.
	///
	/// # Arguments
	///
	/// * `name` - Name of the animation
	/// * `frames` - Ordered frames, at least one
	///
	/// # Errors
	///
	/// Returns [`AnimationError::EmptyDefinition`] if `frames` is empty.
	pub fn new(name: impl Into<String>, frames: Vec<AnimationFrame>) -> Result<Self, AnimationError> {
		let definition = Self {
			name: name.into(),
			frames,
			looping: false,
			reversed: false,
			ping_pong: false,
		};
		definition.validate()?;
		Ok(definition)
	}

	/// Creates a definition where every frame shares the same duration.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::EmptyDefinition`] if `frame_indices` is empty.
	pub fn from_frame_indices(
		name: impl Into<String>,
		frame_indices: &[u32],
		frame_duration: Duration,
	) -> Result<Self, AnimationError> {
		let frames = frame_indices
			.iter()
			.map(|&frame_index| AnimationFrame::new(frame_index, frame_duration))
			.collect();
		Self::new(name, frames)
	}

	/// Sets the default looping flag.
	pub fn with_looping(mut self, looping: bool) -> Self {
		self.looping = looping;
		self
	}

	/// Sets the default reversed flag.
	pub fn with_reversed(mut self, reversed: bool) -> Self {
		self.reversed = reversed;
		self
	}

	/// Sets the default ping-pong flag.
	///
	/// Ping-pong only has an effect while looping.
	pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
		self.ping_pong = ping_pong;
		self
	}

	/// Returns the animation name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the ordered frames.
	pub fn frames(&self) -> &[AnimationFrame] {
		&self.frames
	}

	/// Returns the frame at `index`, if any.
	pub fn frame(&self, index: usize) -> Option<&AnimationFrame> {
		self.frames.get(index)
	}

	/// Returns the number of frames.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` if the animation loops by default.
	pub fn is_looping(&self) -> bool {
		self.looping
	}

	/// Returns `true` if the animation plays backwards by default.
	pub fn is_reversed(&self) -> bool {
		self.reversed
	}

	/// Returns `true` if the animation bounces between its ends by default.
	pub fn is_ping_pong(&self) -> bool {
		self.ping_pong
	}

	/// Sum of all frame durations, i.e. the length of one forward pass.
	pub fn total_duration(&self) -> Duration {
		self.frames.iter().map(|frame| frame.duration).sum()
	}

	/// Returns `true` if no frame has a non-zero duration.
	///
	/// Looping playback of a degenerate definition can never consume time and is
	/// reported as [`AnimationError::StalledPlayback`].
	pub fn is_degenerate(&self) -> bool {
		self.frames.iter().all(AnimationFrame::is_zero_length)
	}

	/// Checks that the definition can be played.
	///
	/// Definitions obtained through deserialization bypass [`new`](Self::new), so
	/// controllers call this before accepting one.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::EmptyDefinition`] if there are no frames.
	pub fn validate(&self) -> Result<(), AnimationError> {
		if self.frames.is_empty() {
			return Err(AnimationError::EmptyDefinition {
				name: self.name.clone(),
			});
		}
		Ok(())
	}
}

impl std::fmt::Display for AnimationDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "AnimationDefinition('{}', {} frames", self.name, self.frames.len())?;
		if self.looping {
			f.write_str(", looping")?;
		}
		if self.reversed {
			f.write_str(", reversed")?;
		}
		if self.ping_pong {
			f.write_str(", ping-pong")?;
		}
		f.write_str(")")
	}
}
