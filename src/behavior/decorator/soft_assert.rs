// Copyright © 2025 Stephan Kunz
//! [`SoftAssert`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, ConstString, Decorator,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- SoftAssert
/// The `SoftAssert` decorator converts a failing child into
/// [`BehaviorState::Success`] and records the failure instead.
///
/// Recorded failures survive a halt and are accessible through
/// [`failures`](SoftAssert::failures) via behavior downcast; a reset
/// clears them.
#[derive(Clone, Debug, Decorator, Default)]
pub struct SoftAssert {
	failures: Vec<ConstString>,
}

#[async_trait::async_trait]
impl Behavior for SoftAssert {
	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		// the failure record survives a halt
		Ok(())
	}

	#[inline]
	fn on_reset(&mut self) -> Result<(), BehaviorError> {
		self.failures.clear();
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let child_state = children[0].tick(ctx).await?;
		match child_state {
			BehaviorState::Failure => {
				let child = &children[0];
				let record = child.data().last_error().map_or_else(
					|| child.id().clone(),
					|error| format!("{}: {error}", child.id()).into(),
				);
				self.failures.push(record);
				Ok(BehaviorState::Success)
			}
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "SoftAssert".into(),
				state: child_state,
			}),
			state => Ok(state),
		}
	}
}

impl SoftAssert {
	/// The recorded failures.
	#[must_use]
	pub fn failures(&self) -> &[ConstString] {
		&self.failures
	}

	/// Whether any failure has been recorded.
	#[must_use]
	pub fn has_failures(&self) -> bool {
		!self.failures.is_empty()
	}
}
// endregion:   --- SoftAssert
