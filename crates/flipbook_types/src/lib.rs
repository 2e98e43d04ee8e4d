//! This crate provides the core animation types for the `flipbook-rs` project.
//!
//! # Components
//!
//! - **Definitions**: immutable frame lists with timing and default playback flags
//! - **Controllers**: per-instance playback state machines driven by elapsed time
//! - **Triggers**: lifecycle notifications (frame begin/end, loop, completion, stop)
//! - **Libraries**: named collections of definitions shared between controllers
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use std::time::Duration;
//! use flipbook_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let blink = AnimationDefinition::from_frame_indices("blink", &[0, 1], Duration::from_millis(120))?
//!     .with_looping(true);
//! let mut controller = AnimationController::new(blink)?;
//! controller.play();
//! controller.update(Duration::from_millis(130))?;
//! assert_eq!(controller.current_frame(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use flipbook_types::animation::{AnimationController, AnimationDefinition};
//! ```

pub mod animation;

/// `use flipbook_types::prelude::*;` to import commonly used items.
pub mod prelude;
