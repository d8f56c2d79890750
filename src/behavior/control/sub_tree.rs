// Copyright © 2025 Stephan Kunz
//! [`SubTree`] behavior implementation.

// region:      --- modules
use std::any::Any;

use crate::{
	TREE_ID,
	behavior::{
		Behavior, BehaviorCreationFn, BehaviorExecution, BehaviorKind, BehaviorPtr, BehaviorResult, BehaviorState,
		BehaviorStatic, NodeData, error::Error as BehaviorError,
	},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- SubTree
/// A `SubTree` executes a tree template registered under the id given by
/// the `tree_id` port.
///
/// The template is cloned lazily on the first tick. The instance runs in
/// a child blackboard scope named `subtree_<node id>`, so its entries
/// stay invisible to siblings and the parent scope. Cloning a subtree
/// node does not copy the instance, each clone lazy-loads its own.
#[derive(Clone, Debug, Default)]
pub struct SubTree;

#[async_trait::async_trait]
impl Behavior for SubTree {
	fn provided_ports() -> PortList {
		port_list![input_port!(ValueKind::Str, TREE_ID)]
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		if children.is_empty() {
			let tree_id = data.input_str(ctx, TREE_ID)?;
			let instance = ctx
				.registry()
				.instantiate(&tree_id)
				.map_err(|_| BehaviorError::SubTreeNotFound { id: tree_id.clone() })?;
			children.push(instance);
		}
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		ctx.check_cancellation()?;

		let scope = ctx.blackboard().create_scope(&format!("subtree_{}", data.id()));
		let outer = ctx.swap_blackboard(scope);
		let result = children[0].tick(ctx).await;
		let _ = ctx.swap_blackboard(outer);

		match result? {
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "SubTree".into(),
				state: BehaviorState::Idle,
			}),
			state => Ok(state),
		}
	}
}

impl BehaviorStatic for SubTree {
	fn kind() -> BehaviorKind {
		BehaviorKind::SubTree
	}

	fn creation_fn() -> Box<BehaviorCreationFn> {
		Box::new(|| Box::new(Self))
	}
}

impl BehaviorExecution for SubTree {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn clone_boxed(&self) -> BehaviorPtr {
		Box::new(self.clone())
	}

	fn static_kind(&self) -> BehaviorKind {
		Self::kind()
	}

	fn static_provided_ports(&self) -> PortList {
		Self::provided_ports()
	}
}
// endregion:   --- SubTree
