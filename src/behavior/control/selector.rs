// Copyright © 2025 Stephan Kunz
//! [`Selector`] behavior implementation.

use crate::{
	self as ticktree, Control,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};

/// A `Selector` ticks its children in an ordered sequence from first to last (OR),
/// also known as fallback.
/// - If a child returns [`BehaviorState::Success`] the selector returns [`BehaviorState::Success`].
/// - If all children return [`BehaviorState::Failure`] the selector returns [`BehaviorState::Failure`].
/// - While a child returns [`BehaviorState::Running`] the selector returns [`BehaviorState::Running`]
///   and resumes at that child on the next tick.
///
/// An empty selector returns [`BehaviorState::Failure`].
#[derive(Clone, Control, Debug, Default)]
pub struct Selector {
	/// Defaults to '0'
	child_idx: usize,
	/// Defaults to '0'
	skipped: usize,
}

#[async_trait::async_trait]
impl Behavior for Selector {
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
				BehaviorState::Success => {
					children.reset(ctx.emitter());
					self.child_idx = 0;
					self.skipped = 0;
					return Ok(BehaviorState::Success);
				}
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "Selector".into(),
						state: child_state,
					});
				}
				BehaviorState::Running => return Ok(BehaviorState::Running),
				BehaviorState::Skipped => {
					self.child_idx += 1;
					self.skipped += 1;
				}
				BehaviorState::Failure => {
					self.child_idx += 1;
				}
			}
		}

		// All children returned failure or were skipped
		let all_skipped = children_count > 0 && self.skipped == children_count;
		children.reset(ctx.emitter());
		self.child_idx = 0;
		self.skipped = 0;
		if all_skipped {
			Ok(BehaviorState::Skipped)
		} else {
			Ok(BehaviorState::Failure)
		}
	}
}
