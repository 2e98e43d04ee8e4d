//! This module is separated into its own crate to enable simple dynamic linking for `flipbook`, and should not be used directly.

/// `use flipbook::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export flipbook_types for convenience
pub use flipbook_types;

// Re-export commonly used types at crate root
pub use flipbook_types::animation::{
	AnimationController, AnimationDefinition, AnimationError, AnimationFrame, AnimationLibrary,
	AnimationTrigger, PlaybackConfig,
};
