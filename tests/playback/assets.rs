//! Loading shipped demo definitions

use std::{path::PathBuf, time::Duration};

use flipbook_rs::prelude::*;

fn asset(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("assets").join(name)
}

#[test]
fn test_hero_json_definitions() {
	let text = std::fs::read_to_string(asset("hero.json")).unwrap();
	let definitions: Vec<AnimationDefinition> = serde_json::from_str(&text).unwrap();
	assert!(definitions.iter().all(|definition| definition.validate().is_ok()));

	let library: AnimationLibrary = definitions.into_iter().collect();
	assert_eq!(library.names(), vec!["attack", "idle", "walk"]);

	let mut idle = library.controller("idle").unwrap();
	idle.play();
	let mut shown = vec![idle.current_frame()];
	for _ in 0..6 {
		let remaining = idle.current_frame_time_remaining();
		idle.update(remaining).unwrap();
		shown.push(idle.current_frame());
	}
	assert_eq!(shown, vec![0, 1, 2, 1, 0, 1, 2]);
}

#[test]
fn test_coin_yaml_definitions() {
	let text = std::fs::read_to_string(asset("coin.yaml")).unwrap();
	let definitions: Vec<AnimationDefinition> = serde_yaml::from_str(&text).unwrap();
	let library: AnimationLibrary = definitions.into_iter().collect();

	let mut collect = library.controller("collect").unwrap();
	assert!(collect.is_reversed());
	collect.play();
	assert_eq!(collect.current_frame(), 6);
	collect.update(Duration::from_millis(150)).unwrap();
	assert!(!collect.is_animating());
	assert_eq!(collect.current_frame(), 4);
}
