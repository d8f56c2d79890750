// Copyright © 2025 Stephan Kunz
//! `ticktree` factory errors

// region		--- modules
use crate::ConstString;
// endregion:	--- modules

/// Factory errors.
#[non_exhaustive]
pub enum Error {
	/// A behavior with that name is already registered
	AlreadyRegistered {
		/// Name of the behavior
		name: ConstString,
	},
	/// A node specification violates the schema of its behavior type
	Configuration {
		/// The behavior type tag
		behavior: ConstString,
		/// Id of the offending node
		id: ConstString,
		/// The offending field
		field: ConstString,
		/// A human readable hint
		hint: ConstString,
	},
	/// No behavior with that name is registered
	NotRegistered {
		/// Name of the behavior
		name: ConstString,
	},
	/// Pass through from the tree registry
	Tree {
		/// The source error
		source: crate::tree::error::Error,
	},
}

/// Only default implementation needed.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::AlreadyRegistered { name } => write!(f, "AlreadyRegistered(name: {name})"),
			Self::Configuration {
				behavior,
				id,
				field,
				hint,
			} => {
				write!(f, "Configuration(behavior: {behavior}, id: {id}, field: {field}, hint: {hint})")
			}
			Self::NotRegistered { name } => write!(f, "NotRegistered(name: {name})"),
			Self::Tree { source } => write!(f, "Tree({source:?})"),
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::AlreadyRegistered { name } => write!(f, "a behavior named '{name}' is already registered"),
			Self::Configuration {
				behavior,
				id,
				field,
				hint,
			} => {
				write!(f, "invalid configuration of {behavior} node '{id}', field '{field}': {hint}")
			}
			Self::NotRegistered { name } => write!(f, "no behavior named '{name}' is registered"),
			Self::Tree { source } => write!(f, "{source}"),
		}
	}
}

impl From<crate::tree::error::Error> for Error {
	fn from(source: crate::tree::error::Error) -> Self {
		Self::Tree { source }
	}
}
