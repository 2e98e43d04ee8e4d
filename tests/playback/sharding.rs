//! Controllers updated from several threads

use std::{
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	thread,
	time::Duration,
};

use flipbook_rs::prelude::*;

use crate::walk_cycle;

#[test]
fn test_sharded_updates_share_one_definition() {
	let definition = Arc::new(walk_cycle());
	let loops = Arc::new(AtomicUsize::new(0));

	let mut controllers: Vec<AnimationController> = (0..16)
		.map(|i| {
			let mut controller = AnimationController::new(Arc::clone(&definition)).unwrap();
			let loops = Arc::clone(&loops);
			controller.subscribe(move |_, trigger| {
				if trigger == AnimationTrigger::AnimationLoop {
					loops.fetch_add(1, Ordering::Relaxed);
				}
			});
			controller.play_from(i % 4).unwrap();
			controller
		})
		.collect();

	thread::scope(|scope| {
		for shard in controllers.chunks_mut(4) {
			scope.spawn(move || {
				for _ in 0..10 {
					for controller in shard.iter_mut() {
						controller.update(Duration::from_millis(100)).unwrap();
					}
				}
			});
		}
	});

	// 10 advances from every starting frame end two frames further along
	for (i, controller) in controllers.iter().enumerate() {
		assert_eq!(controller.internal_frame(), (i % 4 + 10) % 4);
	}
	// Starting at frames 0/1 wraps twice, 2/3 wraps three times
	assert_eq!(loops.load(Ordering::Relaxed), 4 * (2 + 2 + 3 + 3));
	assert_eq!(Arc::strong_count(&definition), 17);
}
