// Copyright © 2025 Stephan Kunz
//! `ticktree` port errors

// region		--- modules
use crate::ConstString;
use crate::blackboard::ValueKind;
// endregion:	--- modules

/// Port errors.
#[non_exhaustive]
pub enum Error {
	/// The port name violates the naming conventions
	NameNotAllowed {
		/// Name of the port
		port: ConstString,
	},
	/// The declared default value does not match the declared kind
	DefaultTypeMismatch {
		/// Name of the port
		port: ConstString,
		/// The declared kind
		expected: ValueKind,
	},
}

/// Only default implementation needed.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::NameNotAllowed { port } => write!(f, "NameNotAllowed(port: {port})"),
			Self::DefaultTypeMismatch { port, expected } => {
				write!(f, "DefaultTypeMismatch(port: {port}, expected: {expected})")
			}
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::NameNotAllowed { port } => write!(f, "the name '{port}' is not allowed for ports"),
			Self::DefaultTypeMismatch { port, expected } => {
				write!(f, "the default value of port '{port}' is no {expected}")
			}
		}
	}
}
