//! Single animation frame.
//!
//! An [`AnimationFrame`] pairs the index of a renderable region (usually a cell of a
//! sprite sheet or texture atlas) with how long that region stays on screen at normal
//! playback speed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One step of an animation.
///
/// `frame_index` is an opaque payload as far as playback is concerned: it is handed back
/// through [`AnimationController::current_frame`] and the caller maps it to whatever
/// it draws. The same index may appear several times in one definition, which makes
/// non-contiguous sequences such as `[0, 1, 2, 1]` possible.
///
/// A zero `duration` is tolerated but malformed: playback passes through such a frame
/// without it ever becoming visible.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use flipbook_types::animation::AnimationFrame;
///
/// let frame = AnimationFrame::from_millis(3, 120);
/// assert_eq!(frame.frame_index, 3);
/// assert_eq!(frame.duration, Duration::from_millis(120));
/// assert!(!frame.is_zero_length());
/// ```
///
/// [`AnimationController::current_frame`]: super::AnimationController::current_frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationFrame {
	/// Index into the renderable frame set
	pub frame_index: u32,
	/// How long this frame stays current at 1.0x speed
	#[serde(rename = "duration_ms", with = "duration_ms")]
	pub duration: Duration,
}

impl AnimationFrame {
	/// Creates a new frame.
	///
	/// # Arguments
	/// * `frame_index` - Renderable frame to display
	/// * `duration` - Display time at normal speed
	pub fn new(frame_index: u32, duration: Duration) -> Self {
		Self {
			frame_index,
			duration,
		}
	}

	/// Creates a frame whose duration is given in milliseconds.
	pub fn from_millis(frame_index: u32, millis: u64) -> Self {
		Self::new(frame_index, Duration::from_millis(millis))
	}

	/// Returns `true` if this frame has no display time.
	pub fn is_zero_length(&self) -> bool {
		self.duration.is_zero()
	}

	/// Duration in whole nanoseconds, saturated to `i64`.
	pub(crate) fn duration_nanos(&self) -> i64 {
		i64::try_from(self.duration.as_nanos()).unwrap_or(i64::MAX)
	}
}

impl std::fmt::Display for AnimationFrame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Frame(id={}, dur={:?})", self.frame_index, self.duration)
	}
}

/// Serializes a [`Duration`] as floating-point milliseconds.
pub(crate) mod duration_ms {
	use std::time::Duration;

	use serde::{Deserialize, Deserializer, Serializer, de::Error};

	pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		let millis = f64::deserialize(deserializer)?;
		Duration::try_from_secs_f64(millis / 1000.0)
			.map_err(|_| D::Error::custom(format!("invalid frame duration: {millis} ms")))
	}
}
