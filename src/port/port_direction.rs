// Copyright © 2025 Stephan Kunz

//! [`PortDirection`] implementation.

// region:		--- PortDirection
/// The direction of a [`PortDefinition`](crate::port::PortDefinition).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortDirection {
	/// The port reads configuration or blackboard content.
	#[default]
	In,
	/// The port writes blackboard content.
	Out,
	/// The port does both.
	InOut,
}

impl core::fmt::Display for PortDirection {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::In => write!(f, "input"),
			Self::Out => write!(f, "output"),
			Self::InOut => write!(f, "inout"),
		}
	}
}
// endregion:	--- PortDirection
