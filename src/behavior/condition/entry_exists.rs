// Copyright © 2025 Stephan Kunz
//! [`EntryExists`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Condition, KEY,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- EntryExists
/// The `EntryExists` condition succeeds when the blackboard entry with
/// the key given by the `key` port is visible from the current scope.
#[derive(Clone, Condition, Debug, Default)]
pub struct EntryExists;

#[async_trait::async_trait]
impl Behavior for EntryExists {
	fn provided_ports() -> PortList {
		port_list![input_port!(ValueKind::Str, KEY)]
	}

	async fn tick(&mut self, data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		let key = data.input_str(ctx, KEY)?;
		if ctx.blackboard().contains(&key) {
			Ok(BehaviorState::Success)
		} else {
			Ok(BehaviorState::Failure)
		}
	}
}
// endregion:   --- EntryExists
