// Copyright © 2025 Stephan Kunz

//! [`PortDefinition`] implementation.

// region:      --- modules
use crate::ConstString;
use crate::blackboard::{Value, ValueKind};

use super::error::Error;
use super::port_direction::PortDirection;
// endregion:   --- modules

// region:		--- PortDefinition
/// The declaration of a single configuration port of a behavior.
#[derive(Clone, Debug)]
pub struct PortDefinition {
	/// Direction of the port.
	direction: PortDirection,
	/// Name of the port.
	name: ConstString,
	/// The kind of [`Value`] the port accepts.
	value_kind: ValueKind,
	/// Optional default used when the configuration omits the port.
	default: Option<Value>,
	/// Human readable description.
	description: ConstString,
}

impl PortDefinition {
	/// Create a [`PortDefinition`].
	/// # Errors
	/// - if the declared default does not match the declared kind.
	pub fn new(
		direction: PortDirection,
		name: &str,
		value_kind: ValueKind,
		default: Option<Value>,
		description: &str,
	) -> Result<Self, Error> {
		if let Some(value) = &default {
			if !value_kind.matches(value) {
				return Err(Error::DefaultTypeMismatch {
					port: name.into(),
					expected: value_kind,
				});
			}
		}
		Ok(Self {
			direction,
			name: name.into(),
			value_kind,
			default,
			description: description.into(),
		})
	}

	/// The direction.
	#[must_use]
	pub const fn direction(&self) -> PortDirection {
		self.direction
	}

	/// The name.
	#[must_use]
	pub const fn name(&self) -> &ConstString {
		&self.name
	}

	/// The accepted [`ValueKind`].
	#[must_use]
	pub const fn value_kind(&self) -> ValueKind {
		self.value_kind
	}

	/// The declared default, if any.
	#[must_use]
	pub const fn default(&self) -> Option<&Value> {
		self.default.as_ref()
	}

	/// The description.
	#[must_use]
	pub const fn description(&self) -> &ConstString {
		&self.description
	}

	/// An input port without default must be configured explicitly.
	#[must_use]
	pub const fn is_required(&self) -> bool {
		matches!(self.direction, PortDirection::In | PortDirection::InOut) && self.default.is_none()
	}
}
// endregion:	--- PortDefinition
