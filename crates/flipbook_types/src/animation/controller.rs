//! Animation playback state machine.
//!
//! This module defines the [`AnimationController`], which advances through an
//! [`AnimationDefinition`] as time passes and reports milestones to its listeners.
//!
//! # States
//!
//! ```text
//!            play()                 pause()
//! Stopped ───────────▶ Playing ◀──────────▶ Paused
//!    ▲                  │   unpause()         │
//!    └──────────────────┴─────────────────────┘
//!        stop(), completion, reset()
//! ```
//!
//! # Frame Advancement
//!
//! Each [`update`](AnimationController::update) subtracts `elapsed × speed` from the
//! countdown of the current frame. While the countdown is exhausted the controller keeps
//! advancing, carrying the overshoot into the next frame, so a single long update walks
//! through every frame whose time has been consumed. One advance step:
//!
//! 1. Emit `FrameEnd` for the frame being left (plus `FrameSkipped` if it was entered
//!    during the same update)
//! 2. Move one frame in the current direction
//! 3. Past either end:
//!    - not looping: stay on the boundary frame and stop with `AnimationCompleted`
//!    - looping: wrap to the opposite end and emit `AnimationLoop`
//!    - looping ping-pong: flip direction, step back past the boundary frame so it is
//!      not shown twice in a row, and emit `AnimationLoop`
//! 4. Load the new frame's duration and emit `FrameBegin`

use std::{cell::RefCell, sync::Arc, time::Duration};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::{
	config::PlaybackConfig,
	definition::AnimationDefinition,
	error::AnimationError,
	frame::AnimationFrame,
	trigger::{AnimationTrigger, Listener, ListenerId},
};

/// Observable playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
	/// Not animating
	Stopped,
	/// Animating and consuming time
	Playing,
	/// Animating but frozen on the current frame
	Paused,
}

impl std::fmt::Display for PlaybackState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Stopped => write!(f, "Stopped"),
			Self::Playing => write!(f, "Playing"),
			Self::Paused => write!(f, "Paused"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
	Forward,
	Backward,
}

impl Direction {
	fn step(self) -> isize {
		match self {
			Self::Forward => 1,
			Self::Backward => -1,
		}
	}

	fn flipped(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}

/// Per-instance playback of an [`AnimationDefinition`].
///
/// The controller only reads the definition; all mutable state (current frame, direction,
/// countdown, flags, speed) lives here, so one `Arc<AnimationDefinition>` can drive any
/// number of controllers. The host calls the control methods in response to game logic,
/// calls [`update`](Self::update) once per tick, and reads
/// [`current_frame`](Self::current_frame) to pick what to draw.
///
/// Control methods whose precondition does not hold (`pause` while stopped, `stop` while
/// stopped, ...) do nothing and return `false`. Out-of-range frame indices are caller bugs
/// and fail with [`AnimationError::FrameOutOfRange`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use flipbook_types::animation::{AnimationController, AnimationDefinition, AnimationTrigger};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let walk = AnimationDefinition::from_frame_indices("walk", &[10, 11, 12], Duration::from_millis(100))?
///     .with_looping(true);
/// let mut controller = AnimationController::new(walk)?;
///
/// controller.subscribe(|controller, trigger| {
///     if trigger == AnimationTrigger::AnimationLoop {
///         println!("{} looped", controller.name());
///     }
/// });
///
/// assert!(controller.play());
/// controller.update(Duration::from_millis(250))?;
/// assert_eq!(controller.current_frame(), 12);
/// assert_eq!(controller.current_frame_time_remaining(), Duration::from_millis(50));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AnimationController {
	definition: Arc<AnimationDefinition>,
	config: PlaybackConfig,
	internal_frame: usize,
	direction: Direction,
	animating: bool,
	paused: bool,
	looping: bool,
	ping_pong: bool,
	speed: f32,
	/// Countdown of the current frame in nanoseconds; negative while overshoot is carried
	time_remaining: i64,
	listeners: Vec<Listener>,
	next_listener_id: u64,
}

impl AnimationController {
	/// Creates a stopped controller with the default [`PlaybackConfig`].
	///
	/// # Errors
	///
	/// Returns [`AnimationError::EmptyDefinition`] if the definition has no frames.
	pub fn new(definition: impl Into<Arc<AnimationDefinition>>) -> Result<Self, AnimationError> {
		Self::with_config(definition, PlaybackConfig::default())
	}

	/// Creates a stopped controller with a custom [`PlaybackConfig`].
	///
	/// # Errors
	///
	/// Returns [`AnimationError::EmptyDefinition`] if the definition has no frames.
	pub fn with_config(
		definition: impl Into<Arc<AnimationDefinition>>,
		config: PlaybackConfig,
	) -> Result<Self, AnimationError> {
		let definition = definition.into();
		definition.validate()?;

		let mut controller = Self {
			definition,
			config,
			internal_frame: 0,
			direction: Direction::Forward,
			animating: false,
			paused: true,
			looping: false,
			ping_pong: false,
			speed: 1.0,
			time_remaining: 0,
			listeners: Vec::new(),
			next_listener_id: 0,
		};
		controller.reset();
		Ok(controller)
	}

	/// Returns the shared definition being played.
	pub fn definition(&self) -> &Arc<AnimationDefinition> {
		&self.definition
	}

	/// Returns the playback configuration.
	pub fn config(&self) -> &PlaybackConfig {
		&self.config
	}

	/// Returns the name of the animation being played.
	pub fn name(&self) -> &str {
		self.definition.name()
	}

	/// Returns the number of frames in the animation.
	pub fn frame_count(&self) -> usize {
		self.definition.frame_count()
	}

	/// Returns the renderable frame index of the current frame.
	///
	/// This is the `frame_index` payload of the current [`AnimationFrame`], not its
	/// position in the definition; see [`internal_frame`](Self::internal_frame) for that.
	pub fn current_frame(&self) -> u32 {
		self.current().frame_index
	}

	/// Returns the position of the current frame within the definition.
	pub fn internal_frame(&self) -> usize {
		self.internal_frame
	}

	/// Returns the time left before the current frame ends, at 1.0x speed.
	pub fn current_frame_time_remaining(&self) -> Duration {
		Duration::from_nanos(u64::try_from(self.time_remaining).unwrap_or(0))
	}

	/// Returns the current playback state.
	pub fn state(&self) -> PlaybackState {
		match (self.animating, self.paused) {
			(false, _) => PlaybackState::Stopped,
			(true, false) => PlaybackState::Playing,
			(true, true) => PlaybackState::Paused,
		}
	}

	/// Returns `true` while playing or paused.
	pub fn is_animating(&self) -> bool {
		self.animating
	}

	/// Returns `true` if time is not being consumed.
	///
	/// A stopped controller also reports paused.
	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Returns `true` if playback wraps around at the ends.
	pub fn is_looping(&self) -> bool {
		self.looping
	}

	/// Overrides the looping flag for this instance.
	pub fn set_looping(&mut self, looping: bool) {
		self.looping = looping;
	}

	/// Returns `true` if playback currently moves towards the first frame.
	///
	/// Ping-pong playback flips this every time it bounces off an end.
	pub fn is_reversed(&self) -> bool {
		self.direction == Direction::Backward
	}

	/// Sets the playback direction.
	pub fn set_reversed(&mut self, reversed: bool) {
		self.direction = if reversed {
			Direction::Backward
		} else {
			Direction::Forward
		};
	}

	/// Returns `true` if looping playback bounces between the ends.
	pub fn is_ping_pong(&self) -> bool {
		self.ping_pong
	}

	/// Overrides the ping-pong flag for this instance.
	pub fn set_ping_pong(&mut self, ping_pong: bool) {
		self.ping_pong = ping_pong;
	}

	/// Returns the playback speed multiplier.
	pub fn speed(&self) -> f32 {
		self.speed
	}

	/// Sets the playback speed multiplier. `0.0` freezes playback without pausing it.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::InvalidSpeed`] for negative or non-finite values.
	pub fn set_speed(&mut self, speed: f32) -> Result<(), AnimationError> {
		if !speed.is_finite() || speed < 0.0 {
			return Err(AnimationError::InvalidSpeed(speed));
		}
		self.speed = speed;
		Ok(())
	}

	/// Starts playback from the first frame in the current direction.
	///
	/// Returns `false` and leaves the controller untouched if it is already animating.
	pub fn play(&mut self) -> bool {
		if self.animating {
			return false;
		}
		self.start(self.first_frame());
		true
	}

	/// Starts playback from `starting_frame`.
	///
	/// No `FrameBegin` is emitted for the starting frame.
	///
	/// # Returns
	///
	/// `Ok(false)` if the controller is already animating, in which case nothing changes.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::FrameOutOfRange`] if `starting_frame >= frame_count()`.
	pub fn play_from(&mut self, starting_frame: usize) -> Result<bool, AnimationError> {
		self.check_frame(starting_frame)?;
		if self.animating {
			return Ok(false);
		}
		self.start(starting_frame);
		Ok(true)
	}

	/// Pauses playback, keeping the current position within the frame.
	pub fn pause(&mut self) -> bool {
		self.pause_with(false)
	}

	/// Pauses playback.
	///
	/// With `reset_frame_duration`, the countdown is reloaded to the current frame's full
	/// duration so that resuming restarts the frame. Returns `false` without touching the
	/// countdown if the controller is stopped or already paused.
	pub fn pause_with(&mut self, reset_frame_duration: bool) -> bool {
		if !self.animating || self.paused {
			return false;
		}
		self.paused = true;
		if reset_frame_duration {
			self.reload_frame_duration();
		}
		debug!("Animation '{}' paused on frame {}", self.name(), self.internal_frame);
		true
	}

	/// Resumes paused playback where it left off.
	pub fn unpause(&mut self) -> bool {
		self.unpause_with(false)
	}

	/// Resumes paused playback.
	///
	/// With `advance_to_next_frame`, one advance step runs immediately: `FrameEnd` is emitted
	/// for the frame being left, exactly as during [`update`](Self::update), and the next
	/// frame starts with its full duration. Returns `false` unless the controller is
	/// animating and paused.
	pub fn unpause_with(&mut self, advance_to_next_frame: bool) -> bool {
		if !self.animating || !self.paused {
			return false;
		}
		self.paused = false;
		debug!("Animation '{}' resumed on frame {}", self.name(), self.internal_frame);
		if advance_to_next_frame {
			self.advance_frame(false, false);
		}
		true
	}

	/// Stops playback and emits `AnimationStopped`.
	///
	/// The current frame is kept. Returns `false` if the controller is not animating.
	pub fn stop(&mut self) -> bool {
		if !self.animating {
			return false;
		}
		self.halt(AnimationTrigger::AnimationStopped);
		true
	}

	/// Jumps to `index`, reloading its full duration and emitting `FrameBegin`.
	///
	/// Works in every state; the playback state itself is not changed.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::FrameOutOfRange`] if `index >= frame_count()`, leaving the
	/// controller untouched.
	pub fn set_frame(&mut self, index: usize) -> Result<(), AnimationError> {
		self.check_frame(index)?;
		self.internal_frame = index;
		self.reload_frame_duration();
		trace!("Animation '{}' scrubbed to frame {}", self.name(), index);
		self.emit(AnimationTrigger::FrameBegin);
		Ok(())
	}

	/// Restores the definition's default flags and stops without emitting anything.
	///
	/// Speed returns to `1.0` and the current frame to the first frame in the default
	/// direction (the last frame for reversed animations).
	pub fn reset(&mut self) {
		self.looping = self.definition.is_looping();
		self.ping_pong = self.definition.is_ping_pong();
		self.set_reversed(self.definition.is_reversed());
		self.animating = false;
		self.paused = true;
		self.speed = 1.0;
		self.internal_frame = self.first_frame();
		self.reload_frame_duration();
	}

	/// Consumes `elapsed` wall time scaled by the playback speed.
	///
	/// Does nothing unless playing. Advances as many frames as the elapsed time covers,
	/// carrying overshoot from one frame into the next. Non-looping playback walks at most
	/// one pass over the frames before completing. Looping playback is bounded by
	/// [`PlaybackConfig::max_advances_per_update`]: whole loop cycles that would not fit
	/// under that ceiling are skipped without frame events (one `AnimationLoop` is still
	/// emitted per boundary crossed), and only overshoot left past the ceiling is dropped.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::StalledPlayback`] when looping playback keeps landing on
	/// zero-length frames without ever consuming time. The controller stops itself
	/// (emitting `AnimationStopped`) before returning, so the condition is reported once.
	pub fn update(&mut self, elapsed: Duration) -> Result<(), AnimationError> {
		if !self.animating || self.paused {
			return Ok(());
		}

		self.time_remaining = self.time_remaining.saturating_sub(self.scaled_nanos(elapsed));

		let stall_limit = self.config.stall_limit(self.frame_count());
		let mut advances = 0;
		let mut advances_without_progress = 0;
		let mut entered_this_update = false;

		let ceiling = if self.looping {
			let ceiling = self.config.max_advances_per_update.max(1);
			if self.time_remaining <= 0
				&& let Some(cycle) = self.loop_cycle()
			{
				entered_this_update = self.skip_loop_cycles(cycle, ceiling);
			}
			ceiling
		} else {
			// Completes within one pass
			self.frame_count()
		};

		while self.time_remaining <= 0 {
			if advances >= ceiling {
				warn!(
					"Animation '{}' reached {} advances in one update, dropping {}ns of overshoot",
					self.name(),
					advances,
					self.time_remaining.unsigned_abs()
				);
				self.reload_frame_duration();
				break;
			}
			advances += 1;

			if !self.advance_frame(true, entered_this_update) {
				break;
			}
			entered_this_update = true;

			if self.current().is_zero_length() {
				advances_without_progress += 1;
				if advances_without_progress >= stall_limit {
					warn!(
						"Animation '{}' stalled: {} advances without a non-zero frame duration",
						self.name(),
						advances
					);
					self.time_remaining = 0;
					self.halt(AnimationTrigger::AnimationStopped);
					return Err(AnimationError::StalledPlayback {
						name: self.name().to_string(),
						advances,
					});
				}
			} else {
				advances_without_progress = 0;
			}
		}

		Ok(())
	}

	/// Registers a listener for playback triggers.
	///
	/// Listeners run in registration order and receive a shared reference to the
	/// controller, so they can query the current frame or state.
	pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&AnimationController, AnimationTrigger) + Send + 'static,
	{
		let id = ListenerId(self.next_listener_id);
		self.next_listener_id += 1;
		self.listeners.push(Listener {
			id,
			callback: RefCell::new(Box::new(callback)),
		});
		id
	}

	/// Removes a listener. Returns `false` if it was not registered.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|listener| listener.id != id);
		self.listeners.len() != before
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	fn current(&self) -> &AnimationFrame {
		&self.definition.frames()[self.internal_frame]
	}

	fn first_frame(&self) -> usize {
		match self.direction {
			Direction::Forward => 0,
			Direction::Backward => self.frame_count() - 1,
		}
	}

	fn check_frame(&self, index: usize) -> Result<(), AnimationError> {
		if index >= self.frame_count() {
			return Err(AnimationError::frame_out_of_range(index, self.frame_count()));
		}
		Ok(())
	}

	fn start(&mut self, frame: usize) {
		self.animating = true;
		self.paused = false;
		self.internal_frame = frame;
		self.reload_frame_duration();
		debug!("Animation '{}' playing from frame {}", self.name(), frame);
	}

	fn halt(&mut self, trigger: AnimationTrigger) {
		self.animating = false;
		self.paused = true;
		debug!("Animation '{}' halted on frame {} ({})", self.name(), self.internal_frame, trigger);
		self.emit(trigger);
	}

	fn reload_frame_duration(&mut self) {
		self.time_remaining = self.current().duration_nanos();
	}

	/// One full cycle of looping playback, if it consumes any time.
	///
	/// A cycle returns to the same frame: `frame_count` advances when wrapping, and
	/// `2 × (frame_count - 1)` advances with two bounces for ping-pong.
	fn loop_cycle(&self) -> Option<LoopCycle> {
		let frames = self.definition.frames();
		let total = frames.iter().map(AnimationFrame::duration_nanos).fold(0, i64::saturating_add);
		let cycle = match frames {
			[] => return None,
			_ if !self.ping_pong => LoopCycle {
				nanos: total,
				advances: frames.len(),
				loops: 1,
			},
			[only] => LoopCycle {
				nanos: only.duration_nanos().saturating_mul(2),
				advances: 2,
				loops: 2,
			},
			[first, .., last] => LoopCycle {
				nanos: total
					.saturating_mul(2)
					.saturating_sub(first.duration_nanos())
					.saturating_sub(last.duration_nanos()),
				advances: 2 * (frames.len() - 1),
				loops: 2,
			},
		};
		(cycle.nanos > 0).then_some(cycle)
	}

	/// Drops whole cycles from the carried overshoot so the rest fits under `ceiling`
	/// advances. Returns `true` if anything was skipped.
	fn skip_loop_cycles(&mut self, cycle: LoopCycle, ceiling: usize) -> bool {
		let overshoot = self.time_remaining.unsigned_abs();
		let cycle_nanos = cycle.nanos.unsigned_abs();
		let walkable = (ceiling / cycle.advances).saturating_sub(1) as u64;
		let skipped = (overshoot / cycle_nanos).saturating_sub(walkable);
		if skipped == 0 {
			return false;
		}

		// At least one cycle was removed, so the rest fits in i64 and stays <= 0
		let rest = overshoot - skipped * cycle_nanos;
		self.time_remaining = -(rest as i64);
		debug!("Animation '{}' skipped {} whole loop cycles", self.name(), skipped);

		let loops = skipped.saturating_mul(cycle.loops);
		let reported = loops.min(ceiling as u64);
		if reported < loops {
			warn!(
				"Animation '{}' crossed {} loop boundaries in one update, reporting {}",
				self.name(),
				loops,
				reported
			);
		}
		for _ in 0..reported {
			self.emit(AnimationTrigger::AnimationLoop);
		}
		true
	}

	fn scaled_nanos(&self, elapsed: Duration) -> i64 {
		// Float to int `as` casts saturate
		(elapsed.as_nanos() as f64 * f64::from(self.speed)).round() as i64
	}

	/// Runs one advance step. Returns `false` if the animation completed instead.
	fn advance_frame(&mut self, carry_overshoot: bool, skipped: bool) -> bool {
		self.emit(AnimationTrigger::FrameEnd);
		if skipped {
			self.emit(AnimationTrigger::FrameSkipped);
		}

		let count = self.frame_count() as isize;
		let mut next = self.internal_frame as isize + self.direction.step();
		let looped = !(0..count).contains(&next);

		if looped {
			if !self.looping {
				self.time_remaining = 0;
				self.halt(AnimationTrigger::AnimationCompleted);
				return false;
			}

			if self.ping_pong {
				self.direction = self.direction.flipped();
				next = (next + self.direction.step() * 2).clamp(0, count - 1);
			} else {
				next = match self.direction {
					Direction::Forward => 0,
					Direction::Backward => count - 1,
				};
			}
		}

		self.internal_frame = next as usize;
		if looped {
			self.emit(AnimationTrigger::AnimationLoop);
		}

		let duration = self.current().duration_nanos();
		self.time_remaining = if carry_overshoot {
			self.time_remaining.saturating_add(duration)
		} else {
			duration
		};
		trace!("Animation '{}' entered frame {}", self.name(), self.internal_frame);
		self.emit(AnimationTrigger::FrameBegin);
		true
	}

	fn emit(&self, trigger: AnimationTrigger) {
		for listener in &self.listeners {
			if let Ok(mut callback) = listener.callback.try_borrow_mut() {
				(*callback)(self, trigger);
			}
		}
	}
}

/// Time, advance count and `AnimationLoop` count of one full loop cycle.
#[derive(Debug, Clone, Copy)]
struct LoopCycle {
	nanos: i64,
	advances: usize,
	loops: u64,
}
