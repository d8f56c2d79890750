// Copyright © 2025 Stephan Kunz
//! [`ReactiveSequence`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Control,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- ReactiveSequence
/// A `ReactiveSequence` re-evaluates its children from the first one on
/// every tick. Conditions ahead of a running child are re-checked, and if
/// one of them now fails, the running child gets halted.
///
/// IMPORTANT: to work properly, this node should not have more than a
/// single asynchronous child.
#[derive(Clone, Control, Debug, Default)]
pub struct ReactiveSequence {
	/// Index of the currently running child, if any.
	running_child: Option<usize>,
}

#[async_trait::async_trait]
impl Behavior for ReactiveSequence {
	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.running_child = None;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);

		let mut all_skipped = true;
		let children_count = children.len();
		for child_idx in 0..children_count {
			ctx.check_cancellation()?;
			let child = &mut children[child_idx];
			let child_state = child.tick(ctx).await?;

			all_skipped &= child_state == BehaviorState::Skipped;

			match child_state {
				BehaviorState::Failure => {
					// a failing condition halts everything behind it
					children.halt(ctx.emitter());
					self.running_child = None;
					return Ok(BehaviorState::Failure);
				}
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "ReactiveSequence".into(),
						state: child_state,
					});
				}
				BehaviorState::Running => {
					// halt a child that was running further down the line
					if let Some(previous) = self.running_child {
						if previous != child_idx {
							children.halt_at(previous, ctx.emitter());
						}
					}
					self.running_child = Some(child_idx);
					return Ok(BehaviorState::Running);
				}
				BehaviorState::Skipped | BehaviorState::Success => {
					self.running_child = None;
				}
			}
		}

		children.reset(ctx.emitter());
		self.running_child = None;
		if children_count > 0 && all_skipped {
			Ok(BehaviorState::Skipped)
		} else {
			Ok(BehaviorState::Success)
		}
	}
}
// endregion:   --- ReactiveSequence
