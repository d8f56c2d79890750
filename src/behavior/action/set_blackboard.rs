// Copyright © 2025 Stephan Kunz
//! [`SetBlackboard`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Action, KEY, VALUE,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- SetBlackboard
/// The `SetBlackboard` action writes the value of the `value` port into
/// the blackboard under the key given by the `key` port.
#[derive(Action, Clone, Debug, Default)]
pub struct SetBlackboard;

#[async_trait::async_trait]
impl Behavior for SetBlackboard {
	fn provided_ports() -> PortList {
		port_list![
			input_port!(ValueKind::Str, KEY),
			input_port!(ValueKind::Any, VALUE),
		]
	}

	async fn tick(&mut self, data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		let key = data.input_str(ctx, KEY)?;
		let value = data.input(ctx, VALUE)?;
		ctx.blackboard().set(&key, value);
		Ok(BehaviorState::Success)
	}
}
// endregion:   --- SetBlackboard
