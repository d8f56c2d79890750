// Copyright © 2025 Stephan Kunz
//! [`Timeout`] behavior implementation.

// region:      --- modules
use std::time::{Duration, Instant};

use crate::{
	self as ticktree, Decorator, MSEC,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:		--- Timeout
/// The `Timeout` decorator starts a deadline on the first tick of an
/// activation. A tick after the deadline halts the child and returns
/// [`BehaviorState::Failure`], otherwise the child is delegated to.
#[derive(Clone, Debug, Decorator, Default)]
pub struct Timeout {
	deadline: Option<Instant>,
}

#[async_trait::async_trait]
impl Behavior for Timeout {
	fn provided_ports() -> PortList {
		port_list![input_port!(ValueKind::Int, MSEC)]
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.deadline = None;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		let millis = data.input_u64(ctx, MSEC)?;
		self.deadline = Some(Instant::now() + Duration::from_millis(millis));
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let Some(deadline) = self.deadline else {
			return Ok(BehaviorState::Failure);
		};

		if Instant::now() >= deadline {
			self.deadline = None;
			children.halt(ctx.emitter());
			return Ok(BehaviorState::Failure);
		}

		let child_state = children[0].tick(ctx).await?;
		if child_state.is_completed() {
			self.deadline = None;
		}
		match child_state {
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "Timeout".into(),
				state: child_state,
			}),
			state => Ok(state),
		}
	}
}
// endregion:	--- Timeout
