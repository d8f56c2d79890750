// Copyright © 2025 Stephan Kunz
//! [`Retry`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Decorator, NUM_ATTEMPTS,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- Retry
/// The `Retry` decorator re-executes a failing child until it succeeds
/// or `num_attempts` attempts are used up.
#[derive(Clone, Debug, Decorator)]
pub struct Retry {
	/// Defaults to `-1`
	num_attempts: i64,
	/// Defaults to `0`
	try_count: i64,
}

impl Default for Retry {
	fn default() -> Self {
		Self {
			num_attempts: -1,
			try_count: 0,
		}
	}
}

#[async_trait::async_trait]
impl Behavior for Retry {
	fn provided_ports() -> PortList {
		port_list![input_port!(
			ValueKind::Int,
			NUM_ATTEMPTS,
			-1,
			"Retry a failing child up to N times. Use -1 to retry forever."
		)]
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.try_count = 0;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		self.num_attempts = data.input_int(ctx, NUM_ATTEMPTS)?;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		ctx.check_cancellation()?;
		let child_state = children[0].tick(ctx).await?;

		match child_state {
			BehaviorState::Success => {
				self.try_count = 0;
				children.reset(ctx.emitter());
				Ok(BehaviorState::Success)
			}
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "Retry".into(),
				state: child_state,
			}),
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Skipped => {
				children.reset(ctx.emitter());
				Ok(BehaviorState::Skipped)
			}
			BehaviorState::Failure => {
				self.try_count += 1;
				children.reset(ctx.emitter());
				if self.num_attempts != -1 && self.try_count >= self.num_attempts {
					self.try_count = 0;
					Ok(BehaviorState::Failure)
				} else {
					Ok(BehaviorState::Running)
				}
			}
		}
	}
}
// endregion:   --- Retry
