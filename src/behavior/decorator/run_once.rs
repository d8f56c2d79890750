// Copyright © 2025 Stephan Kunz
//! [`RunOnce`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Decorator,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- RunOnce
/// The `RunOnce` decorator ticks its child until the first terminal
/// state and afterwards keeps returning that remembered state without
/// re-ticking the child. Only a reset forgets the memory.
#[derive(Clone, Debug, Decorator, Default)]
pub struct RunOnce {
	already_ticked: bool,
	state: BehaviorState,
}

#[async_trait::async_trait]
impl Behavior for RunOnce {
	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		// the memory survives a halt
		Ok(())
	}

	#[inline]
	fn on_reset(&mut self) -> Result<(), BehaviorError> {
		self.already_ticked = false;
		self.state = BehaviorState::Idle;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		if self.already_ticked {
			return Ok(self.state);
		}

		let child_state = children[0].tick(ctx).await?;
		if child_state.is_completed() {
			self.already_ticked = true;
			self.state = child_state;
			children.reset(ctx.emitter());
		} else if child_state == BehaviorState::Idle {
			return Err(BehaviorError::State {
				behavior: "RunOnce".into(),
				state: child_state,
			});
		}
		Ok(child_state)
	}
}
// endregion:   --- RunOnce
