// Copyright © 2025 Stephan Kunz

//! Difference between two [`Blackboard`](crate::blackboard::Blackboard) snapshots.

// region:      --- modules
use std::collections::BTreeMap;

use nanoserde::{SerJson, SerJsonState};

use crate::ConstString;

use super::value::{Value, ser_json_str};
// endregion:   --- modules

// region:		--- ValueChange
/// An entry modification recorded in a [`BlackboardDiff`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValueChange {
	/// The previously committed value.
	pub from: Value,
	/// The current value.
	pub to: Value,
}

impl SerJson for ValueChange {
	fn ser_json(&self, d: usize, state: &mut SerJsonState) {
		state.out.push_str("{\"from\":");
		self.from.ser_json(d, state);
		state.out.push_str(",\"to\":");
		self.to.ser_json(d, state);
		state.out.push('}');
	}
}
// endregion:	--- ValueChange

// region:		--- BlackboardDiff
/// The changes between two blackboard snapshots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlackboardDiff {
	/// Keys present now but not in the previous snapshot.
	pub added: BTreeMap<ConstString, Value>,
	/// Keys present in both snapshots with differing values.
	pub modified: BTreeMap<ConstString, ValueChange>,
	/// Keys present in the previous snapshot but gone now.
	pub deleted: Vec<ConstString>,
}

impl BlackboardDiff {
	/// Compute the difference between a previous and a current snapshot.
	#[must_use]
	pub fn between(previous: &BTreeMap<ConstString, Value>, current: &BTreeMap<ConstString, Value>) -> Self {
		let mut diff = Self::default();
		for (key, value) in current {
			match previous.get(key) {
				None => {
					diff.added.insert(key.clone(), value.clone());
				}
				Some(old) if old != value => {
					diff.modified.insert(
						key.clone(),
						ValueChange {
							from: old.clone(),
							to: value.clone(),
						},
					);
				}
				Some(_) => {}
			}
		}
		for key in previous.keys() {
			if !current.contains_key(key) {
				diff.deleted.push(key.clone());
			}
		}
		diff
	}

	/// `true` if nothing changed.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
	}
}

impl SerJson for BlackboardDiff {
	fn ser_json(&self, d: usize, state: &mut SerJsonState) {
		state.out.push_str("{\"added\":{");
		for (i, (key, value)) in self.added.iter().enumerate() {
			if i > 0 {
				state.out.push(',');
			}
			ser_json_str(key, state);
			state.out.push(':');
			value.ser_json(d, state);
		}
		state.out.push_str("},\"modified\":{");
		for (i, (key, change)) in self.modified.iter().enumerate() {
			if i > 0 {
				state.out.push(',');
			}
			ser_json_str(key, state);
			state.out.push(':');
			change.ser_json(d, state);
		}
		state.out.push_str("},\"deleted\":[");
		for (i, key) in self.deleted.iter().enumerate() {
			if i > 0 {
				state.out.push(',');
			}
			ser_json_str(key, state);
		}
		state.out.push_str("]}");
	}
}
// endregion:	--- BlackboardDiff
