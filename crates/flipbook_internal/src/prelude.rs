//! Prelude module for `flipbook_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use flipbook_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let frame = AnimationFrame::from_millis(0, 100);
//! let definition = AnimationDefinition::new("still", vec![frame]).unwrap();
//! let controller = AnimationController::new(definition).unwrap();
//! assert_eq!(controller.current_frame_time_remaining(), Duration::from_millis(100));
//! ```

// Re-export everything from flipbook_types::prelude
#[doc(inline)]
pub use flipbook_types::prelude::*;

// Re-export the entire flipbook_types module for advanced usage
#[doc(inline)]
pub use flipbook_types;
