// Copyright © 2025 Stephan Kunz
//! [`KeepRunningUntilFailure`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Decorator,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- KeepRunningUntilFailure
/// The `KeepRunningUntilFailure` decorator converts a succeeding child
/// into [`BehaviorState::Running`] and restarts it; only a failure
/// passes through.
#[derive(Clone, Debug, Decorator, Default)]
pub struct KeepRunningUntilFailure;

#[async_trait::async_trait]
impl Behavior for KeepRunningUntilFailure {
	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		ctx.check_cancellation()?;
		let child_state = children[0].tick(ctx).await?;
		match child_state {
			BehaviorState::Success | BehaviorState::Skipped => {
				children.reset(ctx.emitter());
				Ok(BehaviorState::Running)
			}
			BehaviorState::Failure => Ok(BehaviorState::Failure),
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "KeepRunningUntilFailure".into(),
				state: child_state,
			}),
		}
	}
}
// endregion:   --- KeepRunningUntilFailure
