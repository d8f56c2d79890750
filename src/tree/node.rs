// Copyright © 2025 Stephan Kunz

//! [`TreeNode`] and [`TreeNodeList`], the structural elements of a
//! [`BehaviorTree`](crate::tree::BehaviorTree).

// region:      --- modules
use crate::ConstString;
use crate::behavior::{BehaviorKind, BehaviorPtr, BehaviorResult, BehaviorState, NodeData};
use crate::blackboard::Value;

use super::context::TickContext;
use super::observer::{Event, EventEmitter, EventKind};
// endregion:   --- modules

// region:		--- TreeNodeList
/// The ordered, exclusively owned children of a [`TreeNode`].
#[derive(Default)]
pub struct TreeNodeList(Vec<TreeNode>);

impl core::ops::Deref for TreeNodeList {
	type Target = Vec<TreeNode>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl core::ops::DerefMut for TreeNodeList {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl From<Vec<TreeNode>> for TreeNodeList {
	fn from(list: Vec<TreeNode>) -> Self {
		Self(list)
	}
}

impl Clone for TreeNodeList {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl TreeNodeList {
	/// Halt all children.
	pub fn halt(&mut self, emitter: &EventEmitter) {
		for child in &mut self.0 {
			child.halt(emitter);
		}
	}

	/// Halt the child at `index`, ignoring an index out of bounds.
	pub fn halt_at(&mut self, index: usize, emitter: &EventEmitter) {
		if let Some(child) = self.0.get_mut(index) {
			child.halt(emitter);
		}
	}

	/// Halt all children at and beyond `index`.
	pub fn halt_from(&mut self, index: usize, emitter: &EventEmitter) {
		for child in self.0.iter_mut().skip(index) {
			child.halt(emitter);
		}
	}

	/// Reset all children to pristine state.
	pub fn reset(&mut self, emitter: &EventEmitter) {
		for child in &mut self.0 {
			child.reset(emitter);
		}
	}

	/// Reset the child at `index`, ignoring an index out of bounds.
	pub fn reset_at(&mut self, index: usize, emitter: &EventEmitter) {
		if let Some(child) = self.0.get_mut(index) {
			child.reset(emitter);
		}
	}
}
// endregion:	--- TreeNodeList

// region:		--- TreeNode
/// A tree node: a behavior plus identity, state and children.
///
/// The node runs its behavior inside the universal tick envelope which
/// emits the lifecycle events, applies the resumable-execution rule and
/// converts non propagating errors into [`BehaviorState::Failure`].
pub struct TreeNode {
	/// The structural kind, copied from the behavior description.
	kind: BehaviorKind,
	/// The behavior of this node.
	behavior: BehaviorPtr,
	/// Identity and execution state.
	data: NodeData,
	/// Children of the node.
	children: TreeNodeList,
}

impl core::fmt::Debug for TreeNode {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TreeNode")
			.field("id", &self.data.id())
			.field("type", &self.data.description().name())
			.field("state", &self.data.state())
			.field("children", &self.children.len())
			.finish_non_exhaustive()
	}
}

impl Clone for TreeNode {
	/// Deep copy of the node and its subtree with pristine state.
	///
	/// A `SubTree` node does not copy its lazily instantiated children,
	/// each copy loads its own instance from the registry.
	fn clone(&self) -> Self {
		let children = if matches!(self.kind, BehaviorKind::SubTree) {
			TreeNodeList::default()
		} else {
			self.children.clone()
		};
		let mut behavior = self.behavior.clone_boxed();
		if let Err(error) = behavior.on_reset() {
			tracing::warn!(node = self.data.id().as_ref(), %error, "reset of cloned behavior failed");
		}
		Self {
			kind: self.kind,
			behavior,
			data: self.data.clone_reset(),
			children,
		}
	}
}

impl TreeNode {
	/// Construct a [`TreeNode`].
	/// Non public to enforce creation through the factory.
	#[must_use]
	pub(crate) fn new(behavior: BehaviorPtr, data: NodeData, children: TreeNodeList) -> Self {
		Self {
			kind: data.description().kind(),
			behavior,
			data,
			children,
		}
	}

	/// The stable node id.
	#[must_use]
	pub const fn id(&self) -> &ConstString {
		self.data.id()
	}

	/// The display name.
	#[must_use]
	pub const fn name(&self) -> &ConstString {
		self.data.name()
	}

	/// The structural kind.
	#[must_use]
	pub const fn kind(&self) -> BehaviorKind {
		self.kind
	}

	/// The current state.
	#[must_use]
	pub const fn state(&self) -> BehaviorState {
		self.data.state()
	}

	/// Get a reference to the [`NodeData`].
	#[must_use]
	pub const fn data(&self) -> &NodeData {
		&self.data
	}

	/// Get a mutable reference to the [`NodeData`].
	#[must_use]
	pub const fn data_mut(&mut self) -> &mut NodeData {
		&mut self.data
	}

	/// Get a reference to the behavior.
	#[must_use]
	pub const fn behavior(&self) -> &BehaviorPtr {
		&self.behavior
	}

	/// Get a mutable reference to the behavior.
	#[must_use]
	pub const fn behavior_mut(&mut self) -> &mut BehaviorPtr {
		&mut self.behavior
	}

	/// The children.
	#[must_use]
	pub const fn children(&self) -> &TreeNodeList {
		&self.children
	}

	/// The children, mutable.
	#[must_use]
	pub const fn children_mut(&mut self) -> &mut TreeNodeList {
		&mut self.children
	}

	/// Tick the node inside the universal envelope.
	///
	/// Cancellation and configuration kind errors are re-raised, every
	/// other error is recorded on the node and converted into
	/// [`BehaviorState::Failure`].
	/// # Errors
	pub async fn tick(&mut self, ctx: &mut TickContext) -> BehaviorResult {
		ctx.emit(&Event::for_node(EventKind::TickStart, &self.data, None));

		// resumable execution: leaves before the resume point are skipped,
		// inner nodes always execute so they can traverse to the target
		if let Some(resume_id) = ctx.resume_from() {
			if !ctx.reached_resume() {
				if self.data.id() == &resume_id {
					ctx.set_reached_resume();
				} else if matches!(self.kind, BehaviorKind::Action | BehaviorKind::Condition) {
					self.data.set_state(BehaviorState::Skipped);
					ctx.emit(&Event::tick_end(&self.data, BehaviorState::Skipped));
					return Ok(BehaviorState::Skipped);
				}
			}
		}

		let result = if self.data.state() == BehaviorState::Idle {
			match self.behavior.on_start(&mut self.data, &mut self.children, ctx).await {
				Ok(()) => self.behavior.tick(&mut self.data, &mut self.children, ctx).await,
				Err(error) => Err(error),
			}
		} else {
			self.behavior.tick(&mut self.data, &mut self.children, ctx).await
		};

		match result {
			Ok(state) => {
				self.data.set_state(state);
				ctx.emit(&Event::tick_end(&self.data, state));
				Ok(state)
			}
			Err(error) => {
				self.data.set_last_error(Some(error.to_string().into()));
				self.data.set_state(BehaviorState::Failure);
				ctx.emit(&Event::for_node(
					EventKind::Error,
					&self.data,
					Some(Value::from(error.to_string())),
				));
				ctx.emit(&Event::tick_end(&self.data, BehaviorState::Failure));
				if error.must_propagate() {
					Err(error)
				} else {
					Ok(BehaviorState::Failure)
				}
			}
		}
	}

	/// Halt the node and all its running children, resetting their state
	/// to [`BehaviorState::Idle`]. Never fails, errors raised by behavior
	/// halt hooks are logged and swallowed.
	pub fn halt(&mut self, emitter: &EventEmitter) {
		if self.data.state() == BehaviorState::Running {
			if let Err(error) = self.behavior.on_halt() {
				tracing::warn!(node = self.data.id().as_ref(), %error, "halt hook failed");
			}
			self.children.halt(emitter);
			self.data.set_state(BehaviorState::Idle);
			emitter.emit(&Event::for_node(EventKind::Halt, &self.data, None));
		}
	}

	/// Unconditionally reset the node and its subtree to pristine state.
	pub fn reset(&mut self, emitter: &EventEmitter) {
		if let Err(error) = self.behavior.on_reset() {
			tracing::warn!(node = self.data.id().as_ref(), %error, "reset hook failed");
		}
		self.children.reset(emitter);
		self.data.set_state(BehaviorState::Idle);
		self.data.set_last_error(None);
		emitter.emit(&Event::for_node(EventKind::Reset, &self.data, None));
	}

	/// Visit the node and its subtree in pre-order.
	pub fn visit(&self, f: &mut impl FnMut(&Self)) {
		f(self);
		for child in self.children.iter() {
			child.visit(f);
		}
	}

	/// Mutably visit the node and its subtree in pre-order.
	pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Self)) {
		f(self);
		for child in self.children.iter_mut() {
			child.visit_mut(f);
		}
	}

	/// Find a node by id within this subtree.
	#[must_use]
	pub fn find(&self, id: &str) -> Option<&Self> {
		if self.data.id().as_ref() == id {
			return Some(self);
		}
		self.children.iter().find_map(|child| child.find(id))
	}

	/// Mutably find a node by id within this subtree.
	#[must_use]
	pub fn find_mut(&mut self, id: &str) -> Option<&mut Self> {
		if self.data.id().as_ref() == id {
			return Some(self);
		}
		self.children.iter_mut().find_map(|child| child.find_mut(id))
	}

	/// Number of nodes in this subtree including the node itself.
	#[must_use]
	pub fn size(&self) -> usize {
		let mut count = 0;
		self.visit(&mut |_| count += 1);
		count
	}
}
// endregion:	--- TreeNode
