//! Sprite-sheet animation playback for `flipbook-rs`.
//!
//! This module provides the data types that describe an animation and the state machine
//! that plays one back over time. It knows nothing about textures or drawing: a
//! definition is a list of opaque frame indices with durations, and the host maps the
//! controller's current frame index to whatever region of a sprite sheet it renders.
//!
//! # Overview
//!
//! - [`AnimationFrame`]: one step, a renderable frame index plus its display duration
//! - [`AnimationDefinition`]: immutable ordered frames and default playback flags
//!   (looping, reversed, ping-pong), shared between controllers through `Arc`
//! - [`AnimationController`]: per-instance playback state (current frame, direction,
//!   countdown, play/pause/stop) advanced by [`AnimationController::update`]
//! - [`AnimationTrigger`]: lifecycle notifications delivered to subscribed listeners
//! - [`AnimationLibrary`]: named collection of definitions that hands out controllers
//! - [`PlaybackConfig`]: limits that keep a single update bounded
//!
//! # Playback Modes
//!
//! ```text
//! frames [0, 1, 2, 3]
//!
//! once        0 1 2 3 (completed)
//! looping     0 1 2 3 0 1 2 3 0 ...
//! reversed    3 2 1 0 3 2 1 0 3 ...
//! ping-pong   0 1 2 3 2 1 0 1 2 ...
//! ```
//!
//! # Usage Examples
//!
//! ## Driving a controller from a game loop
//!
//! ```
//! use std::{sync::Arc, time::Duration};
//! use flipbook_types::animation::{AnimationController, AnimationDefinition};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let walk = Arc::new(
//!     AnimationDefinition::from_frame_indices("walk", &[0, 1, 2, 3], Duration::from_millis(100))?
//!         .with_looping(true),
//! );
//!
//! // Ten enemies share the same definition
//! let mut enemies: Vec<AnimationController> = (0..10)
//!     .map(|_| AnimationController::new(Arc::clone(&walk)))
//!     .collect::<Result<_, _>>()?;
//!
//! for enemy in &mut enemies {
//!     enemy.play();
//! }
//!
//! let tick = Duration::from_millis(16);
//! for enemy in &mut enemies {
//!     enemy.update(tick)?;
//!     let _region = enemy.current_frame(); // look up the atlas region to draw
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Reacting to frames
//!
//! ```
//! use std::time::Duration;
//! use flipbook_types::animation::{AnimationController, AnimationDefinition, AnimationTrigger};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let swing = AnimationDefinition::from_frame_indices("swing", &[20, 21, 22], Duration::from_millis(60))?;
//! let mut controller = AnimationController::new(swing)?;
//!
//! controller.subscribe(|controller, trigger| match trigger {
//!     AnimationTrigger::FrameBegin if controller.current_frame() == 21 => {
//!         // enable the weapon hitbox
//!     }
//!     AnimationTrigger::AnimationCompleted => {
//!         // return to idle
//!     }
//!     _ => {}
//! });
//!
//! controller.play();
//! controller.update(Duration::from_millis(200))?;
//! assert!(!controller.is_animating());
//! assert_eq!(controller.current_frame(), 22);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod config;
pub mod controller;
pub mod definition;
pub mod error;
pub mod frame;
pub mod library;
pub mod trigger;


// Re-exports for convenience
pub use self::config::PlaybackConfig;
pub use self::controller::{AnimationController, PlaybackState};
pub use self::definition::AnimationDefinition;
pub use self::error::AnimationError;
pub use self::frame::AnimationFrame;
pub use self::library::AnimationLibrary;
pub use self::trigger::{AnimationListener, AnimationTrigger, ListenerId};
