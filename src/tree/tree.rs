// Copyright © 2025 Stephan Kunz

//! [`BehaviorTree`] implementation.

// region:      --- modules
use uuid::Uuid;

use super::node::TreeNode;
use super::registry::TreeRegistry;
// endregion:   --- modules

// region:		--- helper
/// Recursion function to print a (sub)tree recursively
fn print_recursively(level: usize, node: &TreeNode) {
	let mut indentation = String::new();
	for _ in 0..level {
		indentation.push_str("  ");
	}

	println!("{indentation}{}", node.name());
	for child in node.children().iter() {
		print_recursively(level + 1, child);
	}
}
// endregion:	--- helper

// region:		--- BehaviorTree
/// A built tree: the root node plus the registry its subtrees load from.
pub struct BehaviorTree {
	/// The trees unique id
	uuid: Uuid,
	/// The root node
	root: TreeNode,
	/// The registry shared with `SubTree` nodes
	registry: TreeRegistry,
}

impl core::fmt::Debug for BehaviorTree {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("BehaviorTree")
			.field("uuid", &self.uuid)
			.field("root", &self.root)
			.finish_non_exhaustive()
	}
}

impl BehaviorTree {
	/// Create a tree from a built root.
	#[must_use]
	pub(crate) fn new(root: TreeNode, registry: TreeRegistry) -> Self {
		Self {
			uuid: Uuid::new_v4(),
			root,
			registry,
		}
	}

	/// The trees uuid.
	#[must_use]
	pub const fn uuid(&self) -> Uuid {
		self.uuid
	}

	/// The root node.
	#[must_use]
	pub const fn root(&self) -> &TreeNode {
		&self.root
	}

	/// The root node, mutable.
	#[must_use]
	pub const fn root_mut(&mut self) -> &mut TreeNode {
		&mut self.root
	}

	/// The tree registry.
	#[must_use]
	pub const fn registry(&self) -> &TreeRegistry {
		&self.registry
	}

	/// The trees total number of nodes.
	#[must_use]
	pub fn size(&self) -> usize {
		self.root.size()
	}

	/// Pretty print the tree.
	pub fn print(&self) {
		print_recursively(0, &self.root);
	}

	/// Visit all nodes in pre-order.
	pub fn visit(&self, f: &mut impl FnMut(&TreeNode)) {
		self.root.visit(f);
	}

	/// Mutably visit all nodes in pre-order.
	pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut TreeNode)) {
		self.root.visit_mut(f);
	}

	/// Find a node by id.
	#[must_use]
	pub fn find(&self, id: &str) -> Option<&TreeNode> {
		self.root.find(id)
	}

	/// Mutably find a node by id.
	#[must_use]
	pub fn find_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
		self.root.find_mut(id)
	}
}
// endregion:	--- BehaviorTree
