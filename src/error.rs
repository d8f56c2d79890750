// Copyright © 2025 Stephan Kunz

//! [`ticktree`](crate) errors.

// region		--- modules
use thiserror::Error as ThisError;
// endregion:	--- modules

// region:		--- types
/// Result type definition for tick operations.
pub type TickResult<Output = crate::behavior::BehaviorState> = Result<Output, Error>;
// endregion:   --- types

// region:		--- Error
/// `ticktree` error type
#[derive(ThisError, Debug)]
pub enum Error {
	/// Pass through from `crate::behavior::error::Error`
	#[error("{0}")]
	Behavior(#[from] crate::behavior::error::Error),
	/// Pass through from `crate::factory::error::Error`
	#[error("{0}")]
	Factory(#[from] crate::factory::error::Error),
	/// Pass through from `crate::port::error::Error`
	#[error("{0}")]
	Port(#[from] crate::port::error::Error),
	/// Pass through from `std::io::Error`
	#[error("{0}")]
	StdIo(#[from] std::io::Error),
	/// Pass through from `crate::tree::error::Error`
	#[error("{0}")]
	Tree(#[from] crate::tree::error::Error),
}
// region:		--- Error
