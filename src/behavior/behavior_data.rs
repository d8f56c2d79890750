// Copyright © 2025 Stephan Kunz
//! [`NodeData`], the per node execution state of [`ticktree`](crate).

// region:      --- modules
use crate::ConstString;
use crate::blackboard::Value;
use crate::port::{Remappings, strip_pointer};
use crate::tree::TickContext;

use super::behavior_description::BehaviorDescription;
use super::{BehaviorState, error::Error};
// endregion:   --- modules

// region:      --- NodeData
/// Identity and mutable execution state of a tree node.
pub struct NodeData {
	/// Stable id of the node within the tree, non empty.
	id: ConstString,
	/// Display name, defaults to the id.
	name: ConstString,
	/// Current state of the node.
	state: BehaviorState,
	/// Message of the most recent error, if any.
	last_error: Option<ConstString>,
	/// The validated configuration including port defaults,
	/// either literal values or `{key}` blackboard pointers.
	remappings: Remappings,
	/// Description of the behavior type.
	description: BehaviorDescription,
}

impl NodeData {
	/// Constructor
	#[must_use]
	pub(crate) fn new(id: &str, name: Option<&str>, remappings: Remappings, description: BehaviorDescription) -> Self {
		Self {
			id: id.into(),
			name: name.map_or_else(|| id.into(), Into::into),
			state: BehaviorState::default(),
			last_error: None,
			remappings,
			description,
		}
	}

	/// The stable node id.
	#[must_use]
	pub const fn id(&self) -> &ConstString {
		&self.id
	}

	/// The display name.
	#[must_use]
	pub const fn name(&self) -> &ConstString {
		&self.name
	}

	/// The current state.
	#[must_use]
	pub const fn state(&self) -> BehaviorState {
		self.state
	}

	/// Set the current state.
	pub const fn set_state(&mut self, state: BehaviorState) {
		self.state = state;
	}

	/// Whether the node is currently running.
	#[must_use]
	pub fn is_active(&self) -> bool {
		self.state == BehaviorState::Running
	}

	/// The most recent error message, if any.
	#[must_use]
	pub const fn last_error(&self) -> Option<&ConstString> {
		self.last_error.as_ref()
	}

	/// Record or clear the most recent error message.
	pub fn set_last_error(&mut self, message: Option<ConstString>) {
		self.last_error = message;
	}

	/// The behavior type description.
	#[must_use]
	pub const fn description(&self) -> &BehaviorDescription {
		&self.description
	}

	/// The configuration map.
	#[must_use]
	pub const fn remappings(&self) -> &Remappings {
		&self.remappings
	}

	/// A copy with pristine execution state.
	#[must_use]
	pub(crate) fn clone_reset(&self) -> Self {
		Self {
			id: self.id.clone(),
			name: self.name.clone(),
			state: BehaviorState::default(),
			last_error: None,
			remappings: self.remappings.clone(),
			description: self.description.clone(),
		}
	}

	/// Whether the port resolves to a value, either configured or via
	/// the blackboard.
	#[must_use]
	pub fn contains(&self, ctx: &TickContext, key: &str) -> bool {
		self.input(ctx, key).is_ok()
	}

	/// Read an input port.
	///
	/// A configured `{key}` pointer is followed into the blackboard, a
	/// configured literal is returned as is. An unconfigured port falls
	/// through to the blackboard under the port name.
	/// # Errors
	/// - if neither configuration nor blackboard yield a value
	pub fn input(&self, ctx: &TickContext, key: &str) -> Result<Value, Error> {
		if let Some(configured) = self.remappings.find(key) {
			if let Value::Str(s) = configured {
				if let Some(pointer) = strip_pointer(s) {
					return ctx
						.blackboard()
						.get(pointer)
						.ok_or_else(|| Error::EntryNotFound { key: pointer.into() });
				}
			}
			return Ok(configured.clone());
		}
		ctx.blackboard()
			.get(key)
			.ok_or_else(|| Error::EntryNotFound { key: key.into() })
	}

	/// Read an input port, falling back to a default.
	#[must_use]
	pub fn input_or(&self, ctx: &TickContext, key: &str, default: Value) -> Value {
		self.input(ctx, key).unwrap_or(default)
	}

	/// Read a boolean input port.
	/// # Errors
	pub fn input_bool(&self, ctx: &TickContext, key: &str) -> Result<bool, Error> {
		self.input(ctx, key)?.as_bool().ok_or_else(|| Error::PortType {
			port: key.into(),
			expected: "bool".into(),
		})
	}

	/// Read an integer input port.
	/// # Errors
	pub fn input_int(&self, ctx: &TickContext, key: &str) -> Result<i64, Error> {
		self.input(ctx, key)?.as_int().ok_or_else(|| Error::PortType {
			port: key.into(),
			expected: "int".into(),
		})
	}

	/// Read a non negative integer input port.
	/// # Errors
	pub fn input_u64(&self, ctx: &TickContext, key: &str) -> Result<u64, Error> {
		u64::try_from(self.input_int(ctx, key)?).map_err(|_| Error::PortType {
			port: key.into(),
			expected: "non negative int".into(),
		})
	}

	/// Read a string input port.
	/// # Errors
	pub fn input_str(&self, ctx: &TickContext, key: &str) -> Result<ConstString, Error> {
		match self.input(ctx, key)? {
			Value::Str(s) => Ok(s),
			_ => Err(Error::PortType {
				port: key.into(),
				expected: "string".into(),
			}),
		}
	}

	/// Write an output port.
	///
	/// A configured string remaps the write to that blackboard key,
	/// otherwise the port name is used.
	pub fn set_output(&self, ctx: &TickContext, key: &str, value: Value) {
		let target: ConstString = match self.remappings.find(key) {
			Some(Value::Str(s)) => strip_pointer(s).unwrap_or(s).into(),
			_ => key.into(),
		};
		ctx.blackboard().set(&target, value);
	}
}
// endregion:	--- NodeData
