// Copyright © 2025 Stephan Kunz

//! Port [`Remappings`] implementation.

// region:      --- modules
use std::collections::BTreeMap;

use crate::ConstString;
use crate::blackboard::Value;
// endregion:   --- modules

// region:		--- helpers
/// Extract the blackboard key from a `{key}` pointer notation.
/// Returns `None` for plain values.
#[must_use]
pub fn strip_pointer(value: &str) -> Option<&str> {
	value.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'))
}
// endregion:	--- helpers

// region:		--- Remappings
/// The validated configuration map of a node.
///
/// An entry is either a literal [`Value`] or a string in `{key}` pointer
/// notation which remaps the port to a blackboard entry.
#[derive(Clone, Debug, Default)]
pub struct Remappings(BTreeMap<ConstString, Value>);

impl From<BTreeMap<ConstString, Value>> for Remappings {
	fn from(map: BTreeMap<ConstString, Value>) -> Self {
		Self(map)
	}
}

impl Remappings {
	/// Find the configured value for a port.
	#[must_use]
	pub fn find(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Insert a configuration entry, returning the previous one.
	pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
		self.0.insert(key.into(), value)
	}

	/// Iterate the configuration entries.
	pub fn iter(&self) -> impl Iterator<Item = (&ConstString, &Value)> {
		self.0.iter()
	}

	/// Whether a port is configured.
	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of configuration entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no entry is configured.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
// endregion:	--- Remappings
