// Copyright © 2025 Stephan Kunz
//! [`BehaviorFactory`] implementation.

// region:      --- modules
use std::collections::{BTreeMap, BTreeSet};

use crate::ConstString;
use crate::behavior::{
	Behavior, BehaviorDescription, BehaviorPtr, BehaviorStatic, MockBehavior, MockBehaviorConfig, NodeData, action,
	condition, control, decorator,
};
use crate::blackboard::Value;
use crate::port::{PortDirection, Remappings, strip_pointer};
use crate::tree::{BehaviorTree, TreeNode, TreeRegistry};

use super::error::Error;
use super::registry::BehaviorRegistry;
// endregion:   --- modules

// region:		--- NodeSpec
/// The declarative specification of a tree node: a type tag, an id, an
/// optional display name, a free form configuration map and the ordered
/// child specifications.
#[derive(Clone, Debug)]
pub struct NodeSpec {
	/// The registered behavior type tag, e.g. `"Sequence"`.
	pub kind: ConstString,
	/// Stable id of the node, non empty and unique within its tree.
	pub id: ConstString,
	/// Optional display name, defaults to the id.
	pub name: Option<ConstString>,
	/// The configuration map, validated against the behaviors ports.
	pub config: BTreeMap<ConstString, Value>,
	/// The ordered child specifications.
	pub children: Vec<NodeSpec>,
}

impl NodeSpec {
	/// Create a specification for a behavior type tag and node id.
	#[must_use]
	pub fn new(kind: &str, id: &str) -> Self {
		Self {
			kind: kind.into(),
			id: id.into(),
			name: None,
			config: BTreeMap::new(),
			children: Vec::new(),
		}
	}

	/// Set the display name.
	#[must_use]
	pub fn with_name(mut self, name: &str) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Add a configuration entry.
	#[must_use]
	pub fn with_config(mut self, key: &str, value: impl Into<Value>) -> Self {
		self.config.insert(key.into(), value.into());
		self
	}

	/// Add a child specification.
	#[must_use]
	pub fn with_child(mut self, child: Self) -> Self {
		self.children.push(child);
		self
	}

	/// Add several child specifications.
	#[must_use]
	pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
		self.children.extend(children);
		self
	}
}
// endregion:	--- NodeSpec

// region:     --- BehaviorFactory
/// Creates [`BehaviorTree`]s from [`NodeSpec`]s.
///
/// Validation happens here, at node creation time: child count rules,
/// required ports, literal port types and undeclared configuration keys
/// all fail the build with a [`Error::Configuration`].
#[derive(Default)]
pub struct BehaviorFactory {
	registry: BehaviorRegistry,
	trees: TreeRegistry,
}

impl BehaviorFactory {
	/// Create a factory without any registered behaviors.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a factory with all built-in behaviors registered.
	/// # Errors
	/// - if a registration fails
	pub fn with_core_behaviors() -> Result<Self, Error> {
		let mut factory = Self::new();
		let registry = factory.registry_mut();

		// controls
		registry.register_type::<control::Sequence>("Sequence")?;
		registry.register_type::<control::Selector>("Selector")?;
		registry.register_type::<control::MemorySequence>("MemorySequence")?;
		registry.register_type::<control::ReactiveSequence>("ReactiveSequence")?;
		registry.register_type::<control::Parallel>("Parallel")?;
		registry.register_type::<control::Conditional>("Conditional")?;
		registry.register_type::<control::While>("While")?;
		registry.register_type::<control::ForEach>("ForEach")?;
		registry.register_type::<control::Recovery>("Recovery")?;
		registry.register_type::<control::SubTree>("SubTree")?;

		// decorators
		registry.register_type::<decorator::Inverter>("Inverter")?;
		registry.register_type::<decorator::ForceSuccess>("ForceSuccess")?;
		registry.register_type::<decorator::ForceFailure>("ForceFailure")?;
		registry.register_type::<decorator::Repeat>("Repeat")?;
		registry.register_type::<decorator::Retry>("Retry")?;
		registry.register_type::<decorator::RunOnce>("RunOnce")?;
		registry.register_type::<decorator::KeepRunningUntilFailure>("KeepRunningUntilFailure")?;
		registry.register_type::<decorator::Timeout>("Timeout")?;
		registry.register_type::<decorator::Delay>("Delay")?;
		registry.register_type::<decorator::Precondition>("Precondition")?;
		registry.register_type::<decorator::SoftAssert>("SoftAssert")?;

		// leaves
		registry.register_type::<action::SetBlackboard>("SetBlackboard")?;
		registry.register_type::<action::UnsetBlackboard>("UnsetBlackboard")?;
		registry.register_type::<action::Sleep>("Sleep")?;
		registry.register_type::<action::LogMessage>("LogMessage")?;
		registry.register_type::<condition::EntryExists>("EntryExists")?;
		registry.register_type::<condition::CheckEntry>("CheckEntry")?;

		// mock variants for testing and substitution
		factory.register_mock("AlwaysSuccess", crate::BehaviorState::Success)?;
		factory.register_mock("AlwaysFailure", crate::BehaviorState::Failure)?;
		factory.register_mock("AlwaysRunning", crate::BehaviorState::Running)?;

		Ok(factory)
	}

	fn register_mock(&mut self, name: &str, state: crate::BehaviorState) -> Result<(), Error> {
		let description = BehaviorDescription::new(
			name,
			"MockBehavior",
			<MockBehavior as BehaviorStatic>::kind(),
			<MockBehavior as Behavior>::provided_ports(),
			<MockBehavior as Behavior>::expected_children(),
		);
		self.registry.add_behavior(description, move || -> BehaviorPtr {
			Box::new(MockBehavior::new(MockBehaviorConfig::new(state)))
		})
	}

	/// The behavior registry.
	#[must_use]
	pub const fn registry(&self) -> &BehaviorRegistry {
		&self.registry
	}

	/// The behavior registry, mutable.
	#[must_use]
	pub const fn registry_mut(&mut self) -> &mut BehaviorRegistry {
		&mut self.registry
	}

	/// Register a behavior type under the given name.
	/// # Errors
	/// - if the name is already registered
	pub fn register_behavior_type<T>(&mut self, name: &str) -> Result<(), Error>
	where
		T: Behavior + BehaviorStatic + 'static,
	{
		self.registry.register_type::<T>(name)
	}

	/// A handle to the tree registry used for subtrees.
	#[must_use]
	pub fn tree_registry(&self) -> TreeRegistry {
		self.trees.clone()
	}

	/// Build a tree template and register it for use by `SubTree` nodes.
	/// # Errors
	/// - if the build fails
	/// - if a template with that id is already registered
	pub fn register_tree(&mut self, id: &str, spec: &NodeSpec) -> Result<(), Error> {
		let template = self.build_node(spec)?;
		self.trees.register(id, template).map_err(Error::from)
	}

	/// Build a [`BehaviorTree`] from a specification.
	/// # Errors
	/// - if the specification violates a schema
	pub fn build(&self, spec: &NodeSpec) -> Result<BehaviorTree, Error> {
		let mut seen = BTreeSet::new();
		check_unique_ids(spec, &mut seen)?;
		let root = self.build_node(spec)?;
		Ok(BehaviorTree::new(root, self.trees.clone()))
	}

	/// Build a single node (and its children) from a specification.
	/// # Errors
	/// - if the specification violates a schema
	pub fn build_node(&self, spec: &NodeSpec) -> Result<TreeNode, Error> {
		if spec.id.is_empty() {
			return Err(Error::Configuration {
				behavior: spec.kind.clone(),
				id: spec.id.clone(),
				field: "id".into(),
				hint: "node ids must be non empty".into(),
			});
		}

		let (description, behavior) = self.registry.fetch(&spec.kind)?;

		// child count rule
		let expectation = description.expected_children();
		if !expectation.accepts(spec.children.len()) {
			return Err(Error::Configuration {
				behavior: spec.kind.clone(),
				id: spec.id.clone(),
				field: "children".into(),
				hint: format!("expects {expectation} children, found {}", spec.children.len()).into(),
			});
		}

		let remappings = self.validate_config(spec, &description)?;

		let mut children = Vec::with_capacity(spec.children.len());
		for child in &spec.children {
			children.push(self.build_node(child)?);
		}

		let data = NodeData::new(&spec.id, spec.name.as_deref(), remappings, description);
		Ok(TreeNode::new(behavior, data, children.into()))
	}

	/// Validate the configuration map against the advertised ports and
	/// bake in the defaults of unconfigured ports.
	fn validate_config(&self, spec: &NodeSpec, description: &BehaviorDescription) -> Result<Remappings, Error> {
		let ports = description.ports();
		let mut remappings = Remappings::default();

		for (key, value) in &spec.config {
			let Some(port) = ports.find(key) else {
				return Err(Error::Configuration {
					behavior: spec.kind.clone(),
					id: spec.id.clone(),
					field: key.clone(),
					hint: "port is not declared by this behavior".into(),
				});
			};
			// `{key}` pointers resolve at tick time, only literals are
			// type checked here
			let is_pointer = matches!(value, Value::Str(s) if strip_pointer(s).is_some());
			if !is_pointer && !port.value_kind().matches(value) {
				return Err(Error::Configuration {
					behavior: spec.kind.clone(),
					id: spec.id.clone(),
					field: key.clone(),
					hint: format!("expected a {} value, found {}", port.value_kind(), value.kind()).into(),
				});
			}
			remappings.insert(key, value.clone());
		}

		for port in ports.iter() {
			if port.direction() == PortDirection::Out || remappings.contains(port.name()) {
				continue;
			}
			if let Some(default) = port.default() {
				remappings.insert(port.name(), default.clone());
			} else if port.is_required() {
				return Err(Error::Configuration {
					behavior: spec.kind.clone(),
					id: spec.id.clone(),
					field: port.name().clone(),
					hint: "required port is not configured".into(),
				});
			}
		}

		Ok(remappings)
	}
}

/// Node ids must be unique within one tree, resume points and snapshots
/// address nodes by id.
fn check_unique_ids(spec: &NodeSpec, seen: &mut BTreeSet<ConstString>) -> Result<(), Error> {
	if !seen.insert(spec.id.clone()) {
		return Err(Error::Configuration {
			behavior: spec.kind.clone(),
			id: spec.id.clone(),
			field: "id".into(),
			hint: "node ids must be unique within a tree".into(),
		});
	}
	for child in &spec.children {
		check_unique_ids(child, seen)?;
	}
	Ok(())
}
// endregion:   --- BehaviorFactory
