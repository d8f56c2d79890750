// Copyright © 2025 Stephan Kunz
//! [`Inverter`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Decorator,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- Inverter
/// The `Inverter` decorator swaps [`BehaviorState::Success`] and
/// [`BehaviorState::Failure`] of its child; running and skipped pass
/// through unchanged.
#[derive(Clone, Debug, Decorator, Default)]
pub struct Inverter;

#[async_trait::async_trait]
impl Behavior for Inverter {
	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let child_state = children[0].tick(ctx).await?;
		match child_state {
			BehaviorState::Success => Ok(BehaviorState::Failure),
			BehaviorState::Failure => Ok(BehaviorState::Success),
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Skipped => Ok(BehaviorState::Skipped),
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "Inverter".into(),
				state: child_state,
			}),
		}
	}
}
// endregion:   --- Inverter
