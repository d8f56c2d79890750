// Copyright © 2025 Stephan Kunz
//! `ticktree` tree and engine errors

// region		--- modules
use crate::ConstString;
use crate::behavior::error::Error as BehaviorError;
// endregion:	--- modules

/// Tree and engine errors.
#[non_exhaustive]
pub enum Error {
	/// A tick has been requested while another one is in flight
	AlreadyRunning,
	/// A tree template with that id is already registered
	AlreadyRegistered {
		/// The tree id
		id: ConstString,
	},
	/// Pass through from behavior execution
	Behavior {
		/// The source error
		source: BehaviorError,
	},
	/// No tree template with that id is registered
	NotRegistered {
		/// The tree id
		id: ConstString,
	},
	/// The per tick timeout expired, the tree is in an unknown state
	/// and should be halted before further ticking
	TickTimeout {
		/// The configured timeout in milliseconds
		millis: u64,
	},
}

impl Error {
	/// Whether this error reports cooperative cancellation.
	#[must_use]
	pub const fn is_cancellation(&self) -> bool {
		matches!(
			self,
			Self::Behavior {
				source: BehaviorError::Cancelled
			}
		)
	}
}

/// Only default implementation needed.
impl core::error::Error for Error {}

impl core::fmt::Debug for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::AlreadyRunning => write!(f, "AlreadyRunning"),
			Self::AlreadyRegistered { id } => write!(f, "AlreadyRegistered(id: {id})"),
			Self::Behavior { source } => write!(f, "Behavior({source:?})"),
			Self::NotRegistered { id } => write!(f, "NotRegistered(id: {id})"),
			Self::TickTimeout { millis } => write!(f, "TickTimeout({millis}ms)"),
		}
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::AlreadyRunning => write!(f, "the tree is already running"),
			Self::AlreadyRegistered { id } => write!(f, "a tree with id '{id}' is already registered"),
			Self::Behavior { source } => write!(f, "{source}"),
			Self::NotRegistered { id } => write!(f, "no tree with id '{id}' is registered"),
			Self::TickTimeout { millis } => write!(f, "the tick did not finish within {millis}ms"),
		}
	}
}

impl From<BehaviorError> for Error {
	fn from(source: BehaviorError) -> Self {
		Self::Behavior { source }
	}
}
