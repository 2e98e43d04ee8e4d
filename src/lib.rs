#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `flipbook-rs` plays sprite-sheet animations for 2D games.
//!
//! Describe an animation once as an [`AnimationDefinition`], share it between any number
//! of [`AnimationController`]s, call `update` every tick and draw the frame reported by
//! `current_frame`.
//!
pub use flipbook_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use flipbook_dylib;
