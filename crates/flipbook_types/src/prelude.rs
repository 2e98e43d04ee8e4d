//! Prelude module for `flipbook_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use flipbook_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let library = AnimationLibrary::new();
//! let config = PlaybackConfig::lenient();
//! ```

#[doc(inline)]
pub use crate::animation::{
	// Playback
	AnimationController,
	// Data
	AnimationDefinition,
	// Errors
	AnimationError,
	AnimationFrame,
	AnimationLibrary,
	// Events
	AnimationListener,
	AnimationTrigger,
	ListenerId,
	PlaybackConfig,
	PlaybackState,
};

// Re-export the animation module for advanced usage
#[doc(inline)]
pub use crate::animation;
