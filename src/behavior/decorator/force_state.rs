// Copyright © 2025 Stephan Kunz
//! [`ForceSuccess`] and [`ForceFailure`] behavior implementations.

// region:      --- modules
use crate::{
	self as ticktree, Decorator,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- ForceSuccess
/// The `ForceSuccess` decorator maps any terminal result of its child to
/// [`BehaviorState::Success`]. Running and skipped pass through.
#[derive(Clone, Debug, Decorator, Default)]
pub struct ForceSuccess;

#[async_trait::async_trait]
impl Behavior for ForceSuccess {
	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let child_state = children[0].tick(ctx).await?;
		match child_state {
			BehaviorState::Success | BehaviorState::Failure => Ok(BehaviorState::Success),
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Skipped => Ok(BehaviorState::Skipped),
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "ForceSuccess".into(),
				state: child_state,
			}),
		}
	}
}
// endregion:   --- ForceSuccess

// region:      --- ForceFailure
/// The `ForceFailure` decorator maps any terminal result of its child to
/// [`BehaviorState::Failure`]. Running and skipped pass through.
#[derive(Clone, Debug, Decorator, Default)]
pub struct ForceFailure;

#[async_trait::async_trait]
impl Behavior for ForceFailure {
	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let child_state = children[0].tick(ctx).await?;
		match child_state {
			BehaviorState::Success | BehaviorState::Failure => Ok(BehaviorState::Failure),
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Skipped => Ok(BehaviorState::Skipped),
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "ForceFailure".into(),
				state: child_state,
			}),
		}
	}
}
// endregion:   --- ForceFailure
