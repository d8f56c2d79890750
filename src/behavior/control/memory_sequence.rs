// Copyright © 2025 Stephan Kunz
//! [`MemorySequence`] behavior implementation.

// region:      --- modules
use std::collections::BTreeSet;

use crate::{
	self as ticktree, Control,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- MemorySequence
/// A `MemorySequence` behaves like a [`Sequence`](crate::behavior::control::Sequence)
/// but records the children that already returned [`BehaviorState::Success`].
/// Those children are skipped entirely on subsequent activations, including a
/// retry after a failure.
///
/// A halt does NOT clear the memory, this supports resuming after an
/// interruption. Only a reset starts over.
#[derive(Clone, Control, Debug, Default)]
pub struct MemorySequence {
	/// Defaults to '0'
	child_idx: usize,
	/// Indices of children that returned success in this or a prior activation.
	succeeded: BTreeSet<usize>,
}

#[async_trait::async_trait]
impl Behavior for MemorySequence {
	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		// keep the success memory
		self.child_idx = 0;
		Ok(())
	}

	#[inline]
	fn on_reset(&mut self) -> Result<(), BehaviorError> {
		self.child_idx = 0;
		self.succeeded.clear();
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);

		let children_count = children.len();
		let mut skipped = 0_usize;
		while self.child_idx < children_count {
			if self.succeeded.contains(&self.child_idx) {
				self.child_idx += 1;
				continue;
			}
			ctx.check_cancellation()?;
			let child = &mut children[self.child_idx];
			let child_state = child.tick(ctx).await?;

			match child_state {
				BehaviorState::Failure => {
					// do NOT clear the memory, halt children at and after
					// the current index
					children.halt_from(self.child_idx, ctx.emitter());
					self.child_idx = 0;
					return Ok(BehaviorState::Failure);
				}
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "MemorySequence".into(),
						state: child_state,
					});
				}
				BehaviorState::Running => return Ok(BehaviorState::Running),
				BehaviorState::Skipped => {
					self.child_idx += 1;
					skipped += 1;
				}
				BehaviorState::Success => {
					self.succeeded.insert(self.child_idx);
					self.child_idx += 1;
				}
			}
		}

		self.child_idx = 0;
		let all_skipped = children_count > 0 && skipped == children_count;
		if all_skipped {
			Ok(BehaviorState::Skipped)
		} else {
			Ok(BehaviorState::Success)
		}
	}
}
// endregion:   --- MemorySequence
