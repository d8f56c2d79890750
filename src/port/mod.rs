// Copyright © 2025 Stephan Kunz

//! [`ticktree`](crate) port module.
//!
//! Ports are the configuration schema a behavior advertises. They are
//! validated at node creation time, not at tick time.

pub mod error;
mod port_definition;
mod port_direction;
mod port_list;
mod remappings;

// flatten
pub use port_definition::PortDefinition;
pub use port_direction::PortDirection;
pub use port_list::PortList;
pub use remappings::{Remappings, strip_pointer};

use crate::blackboard::{Value, ValueKind};
use error::Error;

// forbidden port names
const FORBIDDEN_PORT_NAMES: &[&str] = &["id", "name", "type"];

// region:   	--- helper
/// Create a [`PortDefinition`]
/// # Errors
/// - if the name violates the conventions.
/// - if the default value does not match the declared kind.
pub fn create_port(
	direction: PortDirection,
	value_kind: ValueKind,
	name: &'static str,
	default: Option<Value>,
	description: &'static str,
) -> Result<PortDefinition, Error> {
	if is_allowed_port_name(name) {
		PortDefinition::new(direction, name, value_kind, default, description)
	} else {
		Err(Error::NameNotAllowed { port: name.into() })
	}
}

/// Check a name to be allowed for ports.
#[must_use]
pub fn is_allowed_port_name(name: &str) -> bool {
	let Some(first) = name.chars().next() else {
		// it is an empty name
		return false;
	};
	if !first.is_alphabetic() {
		return false;
	}
	!FORBIDDEN_PORT_NAMES.contains(&name)
}
// endregion:   --- helper

// region:		---macros
/// macro for creation of an input port definition
#[macro_export]
macro_rules! input_port {
	// 2 elements
	($kind:expr, $name:expr $(,)?) => {{
		$crate::port::create_port($crate::port::PortDirection::In, $kind, $name, None, $crate::EMPTY_STR)
			.expect("macro input_port case 1 failed")
	}};
	// 3 elements
	($kind:expr, $name:expr, $default:expr $(,)?) => {{
		$crate::port::create_port(
			$crate::port::PortDirection::In,
			$kind,
			$name,
			Some($crate::blackboard::Value::from($default)),
			$crate::EMPTY_STR,
		)
		.expect("macro input_port case 2 failed")
	}};
	// 4 elements
	($kind:expr, $name:expr, $default:expr, $desc:literal $(,)?) => {{
		$crate::port::create_port(
			$crate::port::PortDirection::In,
			$kind,
			$name,
			Some($crate::blackboard::Value::from($default)),
			$desc,
		)
		.expect("macro input_port case 3 failed")
	}};
}

/// macro for creation of an output port definition
#[macro_export]
macro_rules! output_port {
	// 2 elements
	($kind:expr, $name:expr $(,)?) => {{
		$crate::port::create_port($crate::port::PortDirection::Out, $kind, $name, None, $crate::EMPTY_STR)
			.expect("macro output_port case 1 failed")
	}};
	// 3 elements
	($kind:expr, $name:expr, $desc:literal $(,)?) => {{
		$crate::port::create_port($crate::port::PortDirection::Out, $kind, $name, None, $desc)
			.expect("macro output_port case 2 failed")
	}};
}

/// macro for creation of a port list
#[macro_export]
macro_rules! port_list {
	($($port:expr),* $(,)?) => {{
		$crate::port::PortList::from(vec![$($port),*])
	}};
}
// endregion:	---macros
