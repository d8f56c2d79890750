// Copyright © 2025 Stephan Kunz

//! [`BehaviorDescription`] implementation.

// region:      --- modules
use crate::ConstString;
use crate::port::PortList;

use super::{BehaviorKind, ChildExpectation};
// endregion:   --- modules

// region:		--- BehaviorDescription
/// The static description of a registered behavior type.
#[derive(Clone, Debug)]
pub struct BehaviorDescription {
	/// The registration name, used as type tag in node specifications.
	name: ConstString,
	/// The Rust type name.
	type_name: ConstString,
	/// The structural kind.
	kind: BehaviorKind,
	/// The advertised configuration schema.
	ports: PortList,
	/// Override of the child count rule implied by the kind.
	children: Option<ChildExpectation>,
}

impl BehaviorDescription {
	/// Constructor.
	#[must_use]
	pub fn new(
		name: &str,
		type_name: &str,
		kind: BehaviorKind,
		ports: PortList,
		children: Option<ChildExpectation>,
	) -> Self {
		Self {
			name: name.into(),
			type_name: type_name.into(),
			kind,
			ports,
			children,
		}
	}

	/// The registration name.
	#[must_use]
	pub const fn name(&self) -> &ConstString {
		&self.name
	}

	/// The Rust type name.
	#[must_use]
	pub const fn type_name(&self) -> &ConstString {
		&self.type_name
	}

	/// The structural kind.
	#[must_use]
	pub const fn kind(&self) -> BehaviorKind {
		self.kind
	}

	/// The advertised ports.
	#[must_use]
	pub const fn ports(&self) -> &PortList {
		&self.ports
	}

	/// The effective child count rule.
	#[must_use]
	pub const fn expected_children(&self) -> ChildExpectation {
		match self.children {
			Some(expectation) => expectation,
			None => ChildExpectation::for_kind(self.kind),
		}
	}
}
// endregion:	--- BehaviorDescription
