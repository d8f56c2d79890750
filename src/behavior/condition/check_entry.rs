// Copyright © 2025 Stephan Kunz
//! [`CheckEntry`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Condition, EXPECTED, KEY,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- CheckEntry
/// The `CheckEntry` condition compares the blackboard entry with the key
/// given by the `key` port against the value of the `expected` port.
///
/// A key missing in the blackboard falls back to the contexts test
/// fixtures before the condition fails.
#[derive(Clone, Condition, Debug, Default)]
pub struct CheckEntry;

#[async_trait::async_trait]
impl Behavior for CheckEntry {
	fn provided_ports() -> PortList {
		port_list![
			input_port!(ValueKind::Str, KEY),
			input_port!(ValueKind::Any, EXPECTED),
		]
	}

	async fn tick(&mut self, data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		let key = data.input_str(ctx, KEY)?;
		let expected = data.input(ctx, EXPECTED)?;
		let found = ctx.blackboard().get(&key).or_else(|| ctx.test_data(&key));
		if found == Some(expected) {
			Ok(BehaviorState::Success)
		} else {
			Ok(BehaviorState::Failure)
		}
	}
}
// endregion:   --- CheckEntry
