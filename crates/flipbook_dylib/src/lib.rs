//! Forces dynamic linking of `flipbook_internal` when the `dynamic_linking` feature is enabled.
//!
//! Should not be used directly.

#![allow(unused_imports, clippy::single_component_path_imports)]
use flipbook_internal;
