// Copyright © 2025 Stephan Kunz

//! Execution snapshots captured by the [`TickEngine`](crate::tree::TickEngine).

// region:      --- modules
use std::collections::BTreeMap;

use nanoserde::{SerJson, SerJsonState};

use crate::ConstString;
use crate::behavior::BehaviorState;
use crate::blackboard::{BlackboardDiff, Value, ser_json_str};

use super::observer::{Event, EventKind};
// endregion:   --- modules

// region:		--- TraceEntry
/// One event of a tick, recorded in an [`ExecutionSnapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEntry {
	/// The kind of event.
	pub kind: EventKind,
	/// Id of the originating node.
	pub node_id: ConstString,
	/// Kind specific payload.
	pub data: Option<Value>,
	/// Wall clock milliseconds since the unix epoch.
	pub timestamp_ms: u64,
}

impl From<&Event> for TraceEntry {
	fn from(event: &Event) -> Self {
		Self {
			kind: event.kind,
			node_id: event.node_id.clone(),
			data: event.data.clone(),
			timestamp_ms: event.timestamp_ms,
		}
	}
}

impl SerJson for TraceEntry {
	fn ser_json(&self, d: usize, state: &mut SerJsonState) {
		state.out.push_str("{\"kind\":\"");
		state.out.push_str(&self.kind.to_string());
		state.out.push_str("\",\"node_id\":");
		ser_json_str(&self.node_id, state);
		state.out.push_str(",\"data\":");
		match &self.data {
			Some(value) => value.ser_json(d, state),
			None => state.out.push_str("null"),
		}
		state.out.push_str(",\"timestamp_ms\":");
		state.out.push_str(&self.timestamp_ms.to_string());
		state.out.push('}');
	}
}
// endregion:	--- TraceEntry

// region:		--- ExecutionSnapshot
/// An immutable record of one tick that changed the blackboard.
///
/// Snapshots are deep copies; later mutations of tree or blackboard
/// never show through.
#[derive(Clone, Debug)]
pub struct ExecutionSnapshot {
	/// The tick this snapshot was captured after.
	pub tick_number: u64,
	/// Wall clock milliseconds since the unix epoch.
	pub timestamp_ms: u64,
	/// Id of the tree root.
	pub root_node_id: ConstString,
	/// The root state after the tick.
	pub root_state: BehaviorState,
	/// Deep copy of the blackboard content.
	pub blackboard: BTreeMap<ConstString, Value>,
	/// Changes against the previously committed snapshot.
	pub diff: BlackboardDiff,
	/// The events of the tick in control flow order.
	pub trace: Vec<TraceEntry>,
}

impl SerJson for ExecutionSnapshot {
	fn ser_json(&self, d: usize, state: &mut SerJsonState) {
		state.out.push_str("{\"tick_number\":");
		state.out.push_str(&self.tick_number.to_string());
		state.out.push_str(",\"timestamp_ms\":");
		state.out.push_str(&self.timestamp_ms.to_string());
		state.out.push_str(",\"root_node_id\":");
		ser_json_str(&self.root_node_id, state);
		state.out.push_str(",\"root_state\":\"");
		state.out.push_str(&self.root_state.to_string());
		state.out.push_str("\",\"blackboard\":{");
		for (i, (key, value)) in self.blackboard.iter().enumerate() {
			if i > 0 {
				state.out.push(',');
			}
			ser_json_str(key, state);
			state.out.push(':');
			value.ser_json(d, state);
		}
		state.out.push_str("},\"diff\":");
		self.diff.ser_json(d, state);
		state.out.push_str(",\"trace\":[");
		for (i, entry) in self.trace.iter().enumerate() {
			if i > 0 {
				state.out.push(',');
			}
			entry.ser_json(d, state);
		}
		state.out.push_str("]}");
	}
}
// endregion:	--- ExecutionSnapshot
