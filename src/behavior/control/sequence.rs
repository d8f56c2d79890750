// Copyright © 2025 Stephan Kunz
//! [`Sequence`] behavior implementation.

use crate::{
	self as ticktree, Control,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};

/// A `Sequence` ticks its children in an ordered sequence from first to last (AND).
/// If any child returns [`BehaviorState::Running`], previous children will NOT be ticked again.
/// - If any child returns [`BehaviorState::Failure`] the sequence returns [`BehaviorState::Failure`].
/// - If all children return [`BehaviorState::Success`] the sequence returns [`BehaviorState::Success`].
/// - While any child returns [`BehaviorState::Running`] the sequence returns [`BehaviorState::Running`].
///
/// While running, the loop is not restarted, first the running child will be ticked again.
/// An empty sequence returns [`BehaviorState::Success`].
#[derive(Clone, Control, Debug, Default)]
pub struct Sequence {
	/// Defaults to '0'
	child_idx: usize,
	/// Defaults to '0'
	skipped: usize,
}

#[async_trait::async_trait]
impl Behavior for Sequence {
	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.child_idx = 0;
		self.skipped = 0;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		if !data.is_active() {
			self.skipped = 0;
		}
		data.set_state(BehaviorState::Running);

		let children_count = children.len();
		while self.child_idx < children_count {
			ctx.check_cancellation()?;
			let child = &mut children[self.child_idx];
			let child_state = child.tick(ctx).await?;

			match child_state {
				BehaviorState::Failure => {
					children.reset(ctx.emitter());
					self.child_idx = 0;
					self.skipped = 0;
					return Ok(BehaviorState::Failure);
				}
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "Sequence".into(),
						state: child_state,
					});
				}
				BehaviorState::Running => return Ok(BehaviorState::Running),
				BehaviorState::Skipped => {
					self.child_idx += 1;
					self.skipped += 1;
				}
				BehaviorState::Success => {
					self.child_idx += 1;
				}
			}
		}

		// All children returned success or were skipped
		let all_skipped = children_count > 0 && self.skipped == children_count;
		children.reset(ctx.emitter());
		self.child_idx = 0;
		self.skipped = 0;
		if all_skipped {
			Ok(BehaviorState::Skipped)
		} else {
			Ok(BehaviorState::Success)
		}
	}
}
