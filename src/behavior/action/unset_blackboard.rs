// Copyright © 2025 Stephan Kunz
//! [`UnsetBlackboard`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Action, KEY,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- UnsetBlackboard
/// The `UnsetBlackboard` action deletes the entry with the key given by
/// the `key` port from the local blackboard scope. Deleting a missing
/// entry succeeds as well.
#[derive(Action, Clone, Debug, Default)]
pub struct UnsetBlackboard;

#[async_trait::async_trait]
impl Behavior for UnsetBlackboard {
	fn provided_ports() -> PortList {
		port_list![input_port!(ValueKind::Str, KEY)]
	}

	async fn tick(&mut self, data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		let key = data.input_str(ctx, KEY)?;
		ctx.blackboard().delete(&key);
		Ok(BehaviorState::Success)
	}
}
// endregion:   --- UnsetBlackboard
