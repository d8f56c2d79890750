// Copyright © 2025 Stephan Kunz

//! [`PortList`] implementation.

// region:      --- modules
use super::port_definition::PortDefinition;
// endregion:   --- modules

// region:		--- PortList
/// The ordered list of ports a behavior advertises.
#[derive(Clone, Debug, Default)]
pub struct PortList(Vec<PortDefinition>);

impl core::ops::Deref for PortList {
	type Target = [PortDefinition];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<PortDefinition>> for PortList {
	fn from(list: Vec<PortDefinition>) -> Self {
		Self(list)
	}
}

impl PortList {
	/// Add a port definition.
	pub fn push(&mut self, definition: PortDefinition) {
		self.0.push(definition);
	}

	/// Find a port definition by name.
	#[must_use]
	pub fn find(&self, name: &str) -> Option<&PortDefinition> {
		self.0.iter().find(|port| port.name().as_ref() == name)
	}

	/// Whether a port with the given name is declared.
	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.find(name).is_some()
	}
}
// endregion:	--- PortList
