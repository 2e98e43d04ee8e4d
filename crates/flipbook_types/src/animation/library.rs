//! Named collection of shared animation definitions.

use std::{collections::HashMap, sync::Arc};

use super::{
	config::PlaybackConfig, controller::AnimationController, definition::AnimationDefinition,
	error::AnimationError,
};

/// A set of animations keyed by name, such as all the cycles cut from one sprite sheet.
///
/// Definitions are stored behind `Arc` so every controller created from the library
/// shares the same frame data.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use flipbook_types::animation::{AnimationDefinition, AnimationLibrary};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let step = Duration::from_millis(100);
/// let library: AnimationLibrary = [
///     AnimationDefinition::from_frame_indices("idle", &[0, 1], step)?.with_looping(true),
///     AnimationDefinition::from_frame_indices("attack", &[8, 9, 10], step)?,
/// ]
/// .into_iter()
/// .collect();
///
/// let mut attack = library.controller("attack")?;
/// attack.play();
/// assert_eq!(attack.current_frame(), 8);
/// assert!(library.controller("jump").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnimationLibrary {
	animations: HashMap<String, Arc<AnimationDefinition>>,
	config: PlaybackConfig,
}

impl AnimationLibrary {
	/// Creates an empty library.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty library whose controllers use `config`.
	pub fn with_config(config: PlaybackConfig) -> Self {
		Self {
			animations: HashMap::new(),
			config,
		}
	}

	/// Adds a definition under its own name, returning the one it replaced.
	pub fn insert(
		&mut self,
		definition: impl Into<Arc<AnimationDefinition>>,
	) -> Option<Arc<AnimationDefinition>> {
		let definition = definition.into();
		self.animations.insert(definition.name().to_string(), definition)
	}

	/// Removes a definition by name.
	pub fn remove(&mut self, name: &str) -> Option<Arc<AnimationDefinition>> {
		self.animations.remove(name)
	}

	/// Returns the definition with the given name.
	pub fn get(&self, name: &str) -> Option<&Arc<AnimationDefinition>> {
		self.animations.get(name)
	}

	/// Returns `true` if an animation with the given name exists.
	pub fn contains(&self, name: &str) -> bool {
		self.animations.contains_key(name)
	}

	/// Returns all animation names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Returns the number of animations.
	pub fn len(&self) -> usize {
		self.animations.len()
	}

	/// Returns `true` if the library holds no animations.
	pub fn is_empty(&self) -> bool {
		self.animations.is_empty()
	}

	/// Creates a stopped controller for the named animation.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::AnimationNotFound`] for unknown names and
	/// [`AnimationError::EmptyDefinition`] if the stored definition has no frames.
	pub fn controller(&self, name: &str) -> Result<AnimationController, AnimationError> {
		let definition = self
			.animations
			.get(name)
			.ok_or_else(|| AnimationError::AnimationNotFound(name.to_string()))?;
		AnimationController::with_config(Arc::clone(definition), self.config)
	}
}

impl FromIterator<AnimationDefinition> for AnimationLibrary {
	fn from_iter<I: IntoIterator<Item = AnimationDefinition>>(iter: I) -> Self {
		let mut library = Self::new();
		library.extend(iter);
		library
	}
}

impl Extend<AnimationDefinition> for AnimationLibrary {
	fn extend<I: IntoIterator<Item = AnimationDefinition>>(&mut self, iter: I) {
		for definition in iter {
			self.insert(definition);
		}
	}
}
