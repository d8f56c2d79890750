// Copyright © 2025 Stephan Kunz
//! `ticktree` behavior errors

// region		--- modules
use super::BehaviorState;
use crate::ConstString;
// endregion:	--- modules

/// Behavior errors.
#[non_exhaustive]
pub enum Error {
	/// The cancellation token has been signalled
	Cancelled,
	/// Error in structural composition of a behaviors children
	Composition {
		/// The textual error message.
		txt: ConstString,
	},
	/// A blackboard entry is missing
	EntryNotFound {
		/// The key of the entry
		key: ConstString,
	},
	/// A failure reported by the node itself
	Execution {
		/// The textual error message.
		txt: ConstString,
	},
	/// Port has not been declared in behavior
	PortNotDeclared {
		/// Name of the port
		port: ConstString,
		/// Affected behavior
		behavior: ConstString,
	},
	/// Type mismatch between port definition and found value
	PortType {
		/// The ports name
		port: ConstString,
		/// The wanted data type
		expected: ConstString,
	},
	/// An invalid [`BehaviorState`] is reached
	State {
		/// The affected behavior
		behavior: ConstString,
		/// The invalid state
		state: BehaviorState,
	},
	/// A subtree is not present in the tree registry
	SubTreeNotFound {
		/// The requested tree id
		id: ConstString,
	},
}

impl Error {
	/// Whether the error must bypass the error-to-failure conversion
	/// of the tick envelope.
	///
	/// Configuration kind errors indicate a broken tree, cancellation
	/// must unwind the whole tick. Both are re-raised to the caller.
	#[must_use]
	pub const fn must_propagate(&self) -> bool {
		matches!(
			self,
			Self::Cancelled
				| Self::Composition { .. }
				| Self::PortNotDeclared { .. }
				| Self::State { .. }
				| Self::SubTreeNotFound { .. }
		)
	}

	/// Whether this is the cancellation error kind.
	#[must_use]
	pub const fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}
}

/// Only default implementation needed.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Cancelled => write!(f, "Cancelled"),
			Self::Composition { txt } => write!(f, "Composition({txt})"),
			Self::EntryNotFound { key } => write!(f, "EntryNotFound(key: {key})"),
			Self::Execution { txt } => write!(f, "Execution({txt})"),
			Self::PortNotDeclared { port, behavior } => {
				write!(f, "PortNotDeclared(port: {port}, behavior: {behavior})")
			}
			Self::PortType { port, expected } => write!(f, "PortType(port: {port}, expected: {expected})"),
			Self::State { behavior, state } => write!(f, "State(behavior: {behavior}, state: {state})"),
			Self::SubTreeNotFound { id } => write!(f, "SubTreeNotFound(id: {id})"),
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Cancelled => write!(f, "the operation has been cancelled"),
			Self::Composition { txt } => write!(f, "behavior composition error: {txt}"),
			Self::EntryNotFound { key } => write!(f, "no blackboard entry for key '{key}'"),
			Self::Execution { txt } => write!(f, "behavior execution failed: {txt}"),
			Self::PortNotDeclared { port, behavior } => {
				write!(f, "port {port} is not declared in behavior {behavior}")
			}
			Self::PortType { port, expected } => {
				write!(f, "could not read value for port {port} as {expected}")
			}
			Self::State { behavior, state } => {
				write!(f, "child node of {behavior} returned state {state} when not allowed")
			}
			Self::SubTreeNotFound { id } => write!(f, "no subtree registered with id '{id}'"),
		}
	}
}
