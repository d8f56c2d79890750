// Copyright © 2025 Stephan Kunz

//! Lifecycle [`Event`]s emitted during tree execution.

// region:      --- modules
use std::time::{SystemTime, UNIX_EPOCH};

use nanoserde::{SerJson, SerJsonState};

use crate::ConstString;
use crate::behavior::{BehaviorState, NodeData};
use crate::blackboard::{Value, ser_json_str};
// endregion:   --- modules

// region:		--- helpers
/// Wall clock milliseconds since the unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_millis() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map_or(0, |duration| duration.as_millis() as u64)
}
// endregion:	--- helpers

// region:		--- EventKind
/// The kind of a lifecycle [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
	/// A node is about to execute its tick.
	TickStart,
	/// A node finished its tick, data carries the resulting state.
	TickEnd,
	/// A node raised an error, data carries the message.
	Error,
	/// A running node has been halted.
	Halt,
	/// A node has been reset to pristine state.
	Reset,
	/// A log record, data carries level and message.
	Log,
}

impl core::fmt::Display for EventKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::TickStart => write!(f, "tick_start"),
			Self::TickEnd => write!(f, "tick_end"),
			Self::Error => write!(f, "error"),
			Self::Halt => write!(f, "halt"),
			Self::Reset => write!(f, "reset"),
			Self::Log => write!(f, "log"),
		}
	}
}
// endregion:	--- EventKind

// region:		--- Event
/// A lifecycle event of a single node.
///
/// Emission order follows the control flow order inside a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
	/// The kind of event.
	pub kind: EventKind,
	/// Id of the originating node.
	pub node_id: ConstString,
	/// Display name of the originating node.
	pub node_name: ConstString,
	/// Registered type tag of the originating node.
	pub node_type: ConstString,
	/// Wall clock milliseconds since the unix epoch.
	pub timestamp_ms: u64,
	/// Kind specific payload.
	pub data: Option<Value>,
}

impl Event {
	/// Create an event for a node.
	#[must_use]
	pub fn for_node(kind: EventKind, data: &NodeData, payload: Option<Value>) -> Self {
		Self {
			kind,
			node_id: data.id().clone(),
			node_name: data.name().clone(),
			node_type: data.description().name().clone(),
			timestamp_ms: now_millis(),
			data: payload,
		}
	}

	/// Create a tick end event carrying the resulting state.
	#[must_use]
	pub fn tick_end(data: &NodeData, state: BehaviorState) -> Self {
		Self::for_node(EventKind::TickEnd, data, Some(Value::from(state.to_string())))
	}

	/// The [`BehaviorState`] carried by a tick end event, if any.
	#[must_use]
	pub fn state(&self) -> Option<BehaviorState> {
		self.data
			.as_ref()
			.and_then(Value::as_str)
			.and_then(|s| s.parse::<BehaviorState>().ok())
	}
}

impl SerJson for Event {
	fn ser_json(&self, d: usize, state: &mut SerJsonState) {
		state.out.push_str("{\"kind\":\"");
		state.out.push_str(&self.kind.to_string());
		state.out.push_str("\",\"node_id\":");
		ser_json_str(&self.node_id, state);
		state.out.push_str(",\"node_name\":");
		ser_json_str(&self.node_name, state);
		state.out.push_str(",\"node_type\":");
		ser_json_str(&self.node_type, state);
		state.out.push_str(",\"timestamp_ms\":");
		state.out.push_str(&self.timestamp_ms.to_string());
		state.out.push_str(",\"data\":");
		match &self.data {
			Some(value) => value.ser_json(d, state),
			None => state.out.push_str("null"),
		}
		state.out.push('}');
	}
}
// endregion:	--- Event
