// Copyright © 2025 Stephan Kunz

//! Hierarchically scoped blackboard of [`ticktree`](crate).
//!
//! A [`Blackboard`] is a named scope holding dynamically typed [`Value`]s.
//! Reads fall through to parent scopes, writes and deletes touch only the
//! local scope. Subtrees get their own child scope so that their entries
//! stay invisible to siblings and parents.

mod diff;
mod value;

// flatten
pub use diff::{BlackboardDiff, ValueChange};
pub(crate) use value::ser_json_str;
pub use value::{Value, ValueKind};

// region:      --- modules
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use spin::RwLock;

use crate::ConstString;
// endregion:   --- modules

// region:		--- BlackboardData
/// The guarded content of a [`Blackboard`] scope.
struct BlackboardData {
	/// Name of this scope.
	scope_name: ConstString,
	/// The local entries.
	storage: BTreeMap<ConstString, Value>,
	/// The enclosing scope. Parents outlive children by construction,
	/// the weak link only serves read fall-through.
	parent: Option<Weak<RwLock<BlackboardData>>>,
	/// Child scopes owned by this scope.
	children: BTreeMap<ConstString, Blackboard>,
}
// endregion:	--- BlackboardData

// region:		--- Blackboard
/// A shareable handle to a blackboard scope.
#[derive(Clone)]
pub struct Blackboard(Arc<RwLock<BlackboardData>>);

impl Default for Blackboard {
	fn default() -> Self {
		Self::new("root")
	}
}

impl core::fmt::Debug for Blackboard {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let guard = self.0.read();
		f.debug_struct("Blackboard")
			.field("scope", &guard.scope_name)
			.field("storage", &guard.storage)
			.field("children", &guard.children.keys().collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}

impl Blackboard {
	/// Create a new root scope.
	#[must_use]
	pub fn new(scope_name: &str) -> Self {
		Self(Arc::new(RwLock::new(BlackboardData {
			scope_name: scope_name.into(),
			storage: BTreeMap::new(),
			parent: None,
			children: BTreeMap::new(),
		})))
	}

	/// The name of this scope.
	#[must_use]
	pub fn scope_name(&self) -> ConstString {
		self.0.read().scope_name.clone()
	}

	/// Whether two handles refer to the same scope.
	#[must_use]
	pub fn same_scope(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	/// Read a value, falling through to parent scopes.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<Value> {
		let parent = {
			let guard = self.0.read();
			if let Some(value) = guard.storage.get(key) {
				return Some(value.clone());
			}
			guard.parent.as_ref().and_then(Weak::upgrade)
		};
		parent.and_then(|p| Self(p).get(key))
	}

	/// Whether a key is visible from this scope.
	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Whether a key exists in the local scope.
	#[must_use]
	pub fn contains_local(&self, key: &str) -> bool {
		self.0.read().storage.contains_key(key)
	}

	/// Write a value into the local scope, shadowing any parent entry.
	/// Returns the previous local value, if any.
	pub fn set(&self, key: &str, value: Value) -> Option<Value> {
		self.0.write().storage.insert(key.into(), value)
	}

	/// Delete an entry from the local scope only.
	/// Parent entries with the same key stay untouched.
	pub fn delete(&self, key: &str) -> Option<Value> {
		self.0.write().storage.remove(key)
	}

	/// Drop all local entries and all child scopes.
	pub fn clear(&self) {
		let mut guard = self.0.write();
		guard.storage.clear();
		guard.children.clear();
	}

	/// The keys of the local scope.
	#[must_use]
	pub fn keys(&self) -> Vec<ConstString> {
		self.0.read().storage.keys().cloned().collect()
	}

	/// Number of local entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.read().storage.len()
	}

	/// Whether the local scope is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.read().storage.is_empty()
	}

	/// Get or create the child scope with the given name.
	/// Repeated calls return the identical scope.
	pub fn create_scope(&self, name: &str) -> Self {
		let mut guard = self.0.write();
		if let Some(child) = guard.children.get(name) {
			return child.clone();
		}
		let child = Self(Arc::new(RwLock::new(BlackboardData {
			scope_name: name.into(),
			storage: BTreeMap::new(),
			parent: Some(Arc::downgrade(&self.0)),
			children: BTreeMap::new(),
		})));
		guard.children.insert(name.into(), child.clone());
		child
	}

	/// Look up an existing child scope.
	#[must_use]
	pub fn scope(&self, name: &str) -> Option<Self> {
		self.0.read().children.get(name).cloned()
	}

	/// The parent scope, if any.
	#[must_use]
	pub fn parent(&self) -> Option<Self> {
		self.0.read().parent.as_ref().and_then(Weak::upgrade).map(Self)
	}

	/// A deep copy of the local entries.
	#[must_use]
	pub fn snapshot(&self) -> BTreeMap<ConstString, Value> {
		self.0.read().storage.clone()
	}

	/// A detached deep copy of this scope including child scopes.
	/// The copy has no parent; later mutations of either side stay invisible
	/// to the other.
	#[must_use]
	pub fn deep_clone(&self) -> Self {
		let guard = self.0.read();
		let copy = Self(Arc::new(RwLock::new(BlackboardData {
			scope_name: guard.scope_name.clone(),
			storage: guard.storage.clone(),
			parent: None,
			children: BTreeMap::new(),
		})));
		for (name, child) in &guard.children {
			let child_copy = child.deep_clone();
			child_copy.0.write().parent = Some(Arc::downgrade(&copy.0));
			copy.0.write().children.insert(name.clone(), child_copy);
		}
		copy
	}
}
// endregion:	--- Blackboard
