// Copyright © 2025 Stephan Kunz

//! [`TreeRegistry`] implementation.

// region:      --- modules
use std::collections::BTreeMap;
use std::sync::Arc;

use spin::RwLock;

use crate::ConstString;

use super::error::Error;
use super::node::TreeNode;
// endregion:   --- modules

// region:		--- TreeRegistry
/// Lookup table mapping tree id to tree template.
///
/// Templates are never ticked themselves; [`instantiate`](TreeRegistry::instantiate)
/// deep-clones a template into an independent subtree.
#[derive(Clone, Default)]
pub struct TreeRegistry(Arc<RwLock<BTreeMap<ConstString, TreeNode>>>);

impl core::fmt::Debug for TreeRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("TreeRegistry")
			.field(&self.0.read().keys().collect::<Vec<_>>())
			.finish()
	}
}

impl TreeRegistry {
	/// Constructor.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether a template with the given id is registered.
	#[must_use]
	pub fn has(&self, id: &str) -> bool {
		self.0.read().contains_key(id)
	}

	/// Register a tree template.
	/// # Errors
	/// - if a template with the same id is already registered
	pub fn register(&self, id: &str, template: TreeNode) -> Result<(), Error> {
		let mut guard = self.0.write();
		if guard.contains_key(id) {
			return Err(Error::AlreadyRegistered { id: id.into() });
		}
		guard.insert(id.into(), template);
		Ok(())
	}

	/// Clone a template into an independent subtree.
	/// # Errors
	/// - if no template with the given id is registered
	pub fn instantiate(&self, id: &str) -> Result<TreeNode, Error> {
		self.0
			.read()
			.get(id)
			.cloned()
			.ok_or_else(|| Error::NotRegistered { id: id.into() })
	}

	/// The ids of all registered templates.
	#[must_use]
	pub fn all_ids(&self) -> Vec<ConstString> {
		self.0.read().keys().cloned().collect()
	}

	/// Remove a template, returning whether it existed.
	pub fn unregister(&self, id: &str) -> bool {
		self.0.write().remove(id).is_some()
	}
}
// endregion:	--- TreeRegistry
