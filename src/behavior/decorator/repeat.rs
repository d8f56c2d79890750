// Copyright © 2025 Stephan Kunz
//! [`Repeat`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Decorator, NUM_CYCLES,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- Repeat
/// The `Repeat` decorator executes its child several times as long as it
/// succeeds. Reaching `num_cycles` successes completes with
/// [`BehaviorState::Success`], a failing child fails the decorator.
#[derive(Clone, Debug, Decorator)]
pub struct Repeat {
	/// Defaults to `-1`
	num_cycles: i64,
	/// Defaults to `0`
	repeat_count: i64,
}

impl Default for Repeat {
	fn default() -> Self {
		Self {
			num_cycles: -1,
			repeat_count: 0,
		}
	}
}

#[async_trait::async_trait]
impl Behavior for Repeat {
	fn provided_ports() -> PortList {
		port_list![input_port!(
			ValueKind::Int,
			NUM_CYCLES,
			-1,
			"Repeat a successful child up to N times. Use -1 to create an infinite loop."
		)]
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.repeat_count = 0;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		self.num_cycles = data.input_int(ctx, NUM_CYCLES)?;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		if self.num_cycles == -1 || self.repeat_count < self.num_cycles {
			ctx.check_cancellation()?;
			let child_state = children[0].tick(ctx).await?;

			match child_state {
				BehaviorState::Failure => {
					self.repeat_count = 0;
					children.reset(ctx.emitter());
					Ok(BehaviorState::Failure)
				}
				BehaviorState::Idle => Err(BehaviorError::State {
					behavior: "Repeat".into(),
					state: child_state,
				}),
				BehaviorState::Running => Ok(BehaviorState::Running),
				BehaviorState::Skipped => {
					children.reset(ctx.emitter());
					Ok(BehaviorState::Skipped)
				}
				BehaviorState::Success => {
					self.repeat_count += 1;
					children.reset(ctx.emitter());
					if self.num_cycles != -1 && self.repeat_count >= self.num_cycles {
						self.repeat_count = 0;
						Ok(BehaviorState::Success)
					} else {
						Ok(BehaviorState::Running)
					}
				}
			}
		} else {
			Ok(BehaviorState::Success)
		}
	}
}
// endregion:   --- Repeat
