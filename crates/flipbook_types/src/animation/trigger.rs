//! Playback notifications.
//!
//! Every lifecycle milestone of an [`AnimationController`] is reported through a single
//! channel: listeners registered with [`AnimationController::subscribe`] receive the
//! controller and an [`AnimationTrigger`] describing what just happened.
//!
//! # Ordering
//!
//! Within one call to [`AnimationController::update`]:
//! - `FrameEnd` (and `FrameSkipped`, if applicable) for a frame precedes the `FrameBegin`
//!   of the frame that replaces it
//! - `AnimationLoop` or `AnimationCompleted` for a boundary crossing precedes any
//!   `FrameBegin` that follows it
//!
//! [`AnimationController`]: super::AnimationController
//! [`AnimationController::subscribe`]: super::AnimationController::subscribe
//! [`AnimationController::update`]: super::AnimationController::update

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::controller::AnimationController;

/// Kind of playback event delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationTrigger {
	/// A frame became current, either by natural advancement or `set_frame`
	FrameBegin,
	/// The current frame's time ran out and it is being left
	FrameEnd,
	/// The frame being left was entered and exhausted within the same update,
	/// so it was never visible to the host
	FrameSkipped,
	/// Playback wrapped around or bounced off an end
	AnimationLoop,
	/// A non-looping animation ran past its last frame
	AnimationCompleted,
	/// Playback was stopped explicitly
	AnimationStopped,
}

impl std::fmt::Display for AnimationTrigger {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::FrameBegin => write!(f, "FrameBegin"),
			Self::FrameEnd => write!(f, "FrameEnd"),
			Self::FrameSkipped => write!(f, "FrameSkipped"),
			Self::AnimationLoop => write!(f, "AnimationLoop"),
			Self::AnimationCompleted => write!(f, "AnimationCompleted"),
			Self::AnimationStopped => write!(f, "AnimationStopped"),
		}
	}
}

/// Handle returned by [`AnimationController::subscribe`], used to unsubscribe.
///
/// [`AnimationController::subscribe`]: super::AnimationController::subscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// Boxed listener callback.
pub type AnimationListener = Box<dyn FnMut(&AnimationController, AnimationTrigger) + Send>;

pub(crate) struct Listener {
	pub(crate) id: ListenerId,
	pub(crate) callback: RefCell<AnimationListener>,
}

impl std::fmt::Debug for Listener {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Listener").field("id", &self.id).finish_non_exhaustive()
	}
}
