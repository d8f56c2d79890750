// Copyright © 2025 Stephan Kunz
//! [`BehaviorRegistry`] implementation.

// region:      --- modules
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ConstString;
use crate::behavior::{
	Behavior, BehaviorCreationFn, BehaviorDescription, BehaviorPtr, BehaviorStatic, behavior_description_of,
};

use super::error::Error;
// endregion:   --- modules

// region:     --- BehaviorRegistry
/// A registry of behavior types used by the
/// [`BehaviorFactory`](crate::factory::BehaviorFactory) for the creation
/// of behavior trees.
#[derive(Default)]
pub struct BehaviorRegistry {
	/// Available behavior creation functions keyed by registration name.
	behaviors: BTreeMap<ConstString, (BehaviorDescription, Arc<BehaviorCreationFn>)>,
}

impl BehaviorRegistry {
	/// Add a behavior to the registry.
	/// # Errors
	/// - if the behavior entry already exists
	pub fn add_behavior<F>(&mut self, bhvr_description: BehaviorDescription, bhvr_creation_fn: F) -> Result<(), Error>
	where
		F: Fn() -> BehaviorPtr + Send + Sync + 'static,
	{
		if self.behaviors.contains_key(bhvr_description.name()) {
			return Err(Error::AlreadyRegistered {
				name: bhvr_description.name().clone(),
			});
		}
		self.behaviors.insert(
			bhvr_description.name().clone(),
			(bhvr_description, Arc::from(bhvr_creation_fn)),
		);
		Ok(())
	}

	/// Register a behavior type under the given name.
	/// # Errors
	/// - if the name is already registered
	pub fn register_type<T>(&mut self, name: &str) -> Result<(), Error>
	where
		T: Behavior + BehaviorStatic + 'static,
	{
		let description = behavior_description_of::<T>(name);
		let creation_fn = T::creation_fn();
		if self.behaviors.contains_key(description.name()) {
			return Err(Error::AlreadyRegistered {
				name: description.name().clone(),
			});
		}
		self.behaviors
			.insert(description.name().clone(), (description, Arc::from(creation_fn)));
		Ok(())
	}

	/// Whether a behavior with the given name is registered.
	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.behaviors.contains_key(name)
	}

	/// Fetch the description and a fresh instance of a behavior.
	/// # Errors
	/// - if the behavior is not found in the registry
	pub fn fetch(&self, name: &str) -> Result<(BehaviorDescription, BehaviorPtr), Error> {
		self.behaviors.get(name).map_or_else(
			|| Err(Error::NotRegistered { name: name.into() }),
			|(description, creation_fn)| Ok((description.clone(), creation_fn())),
		)
	}

	/// The names of all registered behaviors.
	#[must_use]
	pub fn behavior_names(&self) -> Vec<ConstString> {
		self.behaviors.keys().cloned().collect()
	}
}
// endregion:   --- BehaviorRegistry
