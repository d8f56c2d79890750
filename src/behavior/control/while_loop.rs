// Copyright © 2025 Stephan Kunz
//! [`While`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Control, MAX_ITERATIONS,
	behavior::{Behavior, BehaviorResult, BehaviorState, ChildExpectation, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- While
/// A `While` loops its body as long as its condition succeeds.
/// Exactly 2 children: condition and body.
///
/// - A failing condition terminates the loop with [`BehaviorState::Success`].
/// - A failing body fails the loop.
/// - While the body is running the condition is NOT re-checked, only after
///   the body completed an iteration.
/// - Reaching `max_iterations` fails the loop.
#[derive(Clone, Control, Debug, Default)]
pub struct While {
	/// Whether the current iteration entered the body already.
	in_body: bool,
	/// Completed iterations of the current activation.
	iterations: u64,
	/// Upper bound read from the `max_iterations` port.
	max_iterations: u64,
}

#[async_trait::async_trait]
impl Behavior for While {
	fn provided_ports() -> PortList {
		port_list![input_port!(
			ValueKind::Int,
			MAX_ITERATIONS,
			1000,
			"Fail the loop after this many iterations."
		)]
	}

	fn expected_children() -> Option<ChildExpectation> {
		Some(ChildExpectation::Exactly(2))
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.in_body = false;
		self.iterations = 0;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		self.max_iterations = data.input_u64(ctx, MAX_ITERATIONS)?;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);

		loop {
			ctx.check_cancellation()?;

			if !self.in_body {
				let condition_state = children[0].tick(ctx).await?;
				match condition_state {
					BehaviorState::Running => return Ok(BehaviorState::Running),
					BehaviorState::Idle => {
						return Err(BehaviorError::State {
							behavior: "While".into(),
							state: condition_state,
						});
					}
					BehaviorState::Failure | BehaviorState::Skipped => {
						self.iterations = 0;
						children.reset(ctx.emitter());
						return Ok(BehaviorState::Success);
					}
					BehaviorState::Success => {
						self.in_body = true;
					}
				}
			}

			let body_state = children[1].tick(ctx).await?;
			match body_state {
				BehaviorState::Running => return Ok(BehaviorState::Running),
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "While".into(),
						state: body_state,
					});
				}
				BehaviorState::Failure => {
					self.in_body = false;
					self.iterations = 0;
					children.reset(ctx.emitter());
					return Ok(BehaviorState::Failure);
				}
				BehaviorState::Success | BehaviorState::Skipped => {
					self.in_body = false;
					self.iterations += 1;
					if self.iterations >= self.max_iterations {
						self.iterations = 0;
						children.reset(ctx.emitter());
						return Ok(BehaviorState::Failure);
					}
					// fresh states for the next iteration
					children.reset(ctx.emitter());
				}
			}
		}
	}
}
// endregion:   --- While
