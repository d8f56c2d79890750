// Copyright © 2025 Stephan Kunz
//! [`Delay`] behavior implementation.

// region:      --- modules
use std::time::Duration;

use crate::{
	self as ticktree, DELAY_MSEC, Decorator,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:		--- Delay
/// The `Delay` decorator waits for `delay_msec` on the first tick of an
/// activation, then delegates to its child. The wait is a suspension
/// point and races against the cancellation token.
///
/// Consider also using the [`Sleep`](crate::behavior::action::Sleep)
/// action, which does not block the tick while waiting.
#[derive(Clone, Debug, Decorator, Default)]
pub struct Delay {
	delayed: bool,
}

#[async_trait::async_trait]
impl Behavior for Delay {
	fn provided_ports() -> PortList {
		port_list![input_port!(ValueKind::Int, DELAY_MSEC)]
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.delayed = false;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		let millis = data.input_u64(ctx, DELAY_MSEC)?;
		tokio::select! {
			() = tokio::time::sleep(Duration::from_millis(millis)) => {}
			() = ctx.cancellation().cancelled() => return Err(BehaviorError::Cancelled),
		}
		self.delayed = true;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		if !self.delayed {
			return Ok(BehaviorState::Failure);
		}

		let child_state = children[0].tick(ctx).await?;
		match child_state {
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "Delay".into(),
				state: child_state,
			}),
			state => Ok(state),
		}
	}
}
// endregion:	--- Delay
