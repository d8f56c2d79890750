// Copyright © 2025 Stephan Kunz
//! [`Sleep`] behavior implementation.

// region:      --- modules
use std::time::Duration;

use crate::{
	self as ticktree, Action, MSEC,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- Sleep
/// The `Sleep` action waits for `msec` milliseconds without blocking the
/// tick.
///
/// The timer runs as a fire-and-forget task registered in the running
/// operations table; each tick polls the completion flag in O(1) and
/// returns [`BehaviorState::Running`] until the timer fired.
#[derive(Action, Clone, Debug, Default)]
pub struct Sleep;

#[async_trait::async_trait]
impl Behavior for Sleep {
	fn provided_ports() -> PortList {
		port_list![input_port!(ValueKind::Int, MSEC)]
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		let millis = data.input_u64(ctx, MSEC)?;
		let operations = ctx.running_ops().clone();
		let node_id = data.id().clone();
		operations.begin(&node_id);
		tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(millis)).await;
			operations.complete(&node_id, BehaviorState::Success);
		});
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		ctx.check_cancellation()?;
		match ctx.running_ops().poll(data.id()) {
			Some(operation) if operation.completed => {
				ctx.running_ops().remove(data.id());
				operation.error.map_or_else(
					|| Ok(operation.result.unwrap_or(BehaviorState::Success)),
					|message| Err(BehaviorError::Execution { txt: message }),
				)
			}
			Some(_) => Ok(BehaviorState::Running),
			// the table has been cleared underneath us, e.g. by a halt
			None => Ok(BehaviorState::Failure),
		}
	}
}
// endregion:   --- Sleep
