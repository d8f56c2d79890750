// Copyright © 2025 Stephan Kunz
//! [`Conditional`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Control,
	behavior::{Behavior, BehaviorResult, BehaviorState, ChildExpectation, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- Conditional
/// A `Conditional` has a condition, a then branch and an optional else
/// branch (if/then\[/else\]).
///
/// The condition is evaluated once per activation. Once a branch is
/// chosen, the condition is NOT re-evaluated while the branch is running;
/// the choice persists until the branch reaches a terminal state.
///
/// Without an else branch a failing condition fails the node.
#[derive(Clone, Control, Debug, Default)]
pub struct Conditional {
	/// Child index of the chosen branch.
	branch: Option<usize>,
}

#[async_trait::async_trait]
impl Behavior for Conditional {
	fn expected_children() -> Option<ChildExpectation> {
		Some(ChildExpectation::Range(2, 3))
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.branch = None;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);

		if self.branch.is_none() {
			ctx.check_cancellation()?;
			let condition_state = children[0].tick(ctx).await?;
			match condition_state {
				BehaviorState::Running => return Ok(BehaviorState::Running),
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "Conditional".into(),
						state: condition_state,
					});
				}
				BehaviorState::Skipped => return Ok(BehaviorState::Skipped),
				BehaviorState::Success => self.branch = Some(1),
				BehaviorState::Failure => {
					if children.len() == 3 {
						self.branch = Some(2);
					} else {
						children.reset(ctx.emitter());
						return Ok(BehaviorState::Failure);
					}
				}
			}
		}

		let Some(branch) = self.branch else {
			return Err(BehaviorError::Composition {
				txt: "Conditional lost its branch".into(),
			});
		};

		ctx.check_cancellation()?;
		let branch_state = children[branch].tick(ctx).await?;
		match branch_state {
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "Conditional".into(),
				state: branch_state,
			}),
			state => {
				self.branch = None;
				children.reset(ctx.emitter());
				Ok(state)
			}
		}
	}
}
// endregion:   --- Conditional
