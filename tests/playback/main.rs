//! Playback tests for `flipbook-rs`

mod assets;
mod sharding;

use std::time::Duration;

use flipbook_rs::prelude::*;

pub(crate) fn walk_cycle() -> AnimationDefinition {
	AnimationDefinition::from_frame_indices("walk", &[0, 1, 2, 3], Duration::from_millis(100))
		.unwrap()
		.with_looping(true)
}

#[test_log::test]
fn test_facade_reexports() {
	let library: AnimationLibrary = std::iter::once(walk_cycle()).collect();
	let mut controller = library.controller("walk").unwrap();
	assert!(controller.play());
	controller.update(Duration::from_millis(420)).unwrap();
	assert_eq!(controller.current_frame(), 0);
	assert_eq!(controller.current_frame_time_remaining(), Duration::from_millis(80));
}
