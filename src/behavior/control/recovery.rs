// Copyright © 2025 Stephan Kunz
//! [`Recovery`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Control,
	behavior::{Behavior, BehaviorResult, BehaviorState, ChildExpectation, NodeData, error::Error as BehaviorError},
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:		--- RecoveryPhase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RecoveryPhase {
	#[default]
	Try,
	Catch,
	Finally,
}
// endregion:	--- RecoveryPhase

// region:      --- Recovery
/// A `Recovery` executes a try child with an optional catch and an
/// optional finally child (try/catch\[/finally\]).
///
/// - With 2 children the second one is the catch branch, with 3 the
///   third one is the finally branch.
/// - A failing try enters catch, whose result becomes the main result.
/// - A finally branch runs after the main result is determined; its
///   state is ignored.
/// - Configuration and cancellation errors bypass BOTH catch and finally
///   and propagate; a broken tree must not be "recovered" and
///   cancellation must unwind.
#[derive(Clone, Control, Debug, Default)]
pub struct Recovery {
	phase: RecoveryPhase,
	/// The result to report once finally completed.
	main: Option<BehaviorState>,
}

#[async_trait::async_trait]
impl Behavior for Recovery {
	fn expected_children() -> Option<ChildExpectation> {
		Some(ChildExpectation::Range(1, 3))
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.phase = RecoveryPhase::Try;
		self.main = None;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let children_count = children.len();

		loop {
			ctx.check_cancellation()?;
			match self.phase {
				RecoveryPhase::Try => {
					// propagating errors raised in here bypass catch and finally
					let try_state = children[0].tick(ctx).await?;
					match try_state {
						BehaviorState::Running => return Ok(BehaviorState::Running),
						BehaviorState::Idle => {
							return Err(BehaviorError::State {
								behavior: "Recovery".into(),
								state: try_state,
							});
						}
						BehaviorState::Failure if children_count >= 2 => {
							self.phase = RecoveryPhase::Catch;
						}
						state => {
							self.main = Some(state);
							if children_count == 3 {
								self.phase = RecoveryPhase::Finally;
							} else {
								return Ok(self.finish(children, ctx));
							}
						}
					}
				}
				RecoveryPhase::Catch => {
					let catch_state = children[1].tick(ctx).await?;
					match catch_state {
						BehaviorState::Running => return Ok(BehaviorState::Running),
						BehaviorState::Idle => {
							return Err(BehaviorError::State {
								behavior: "Recovery".into(),
								state: catch_state,
							});
						}
						state => {
							self.main = Some(state);
							if children_count == 3 {
								self.phase = RecoveryPhase::Finally;
							} else {
								return Ok(self.finish(children, ctx));
							}
						}
					}
				}
				RecoveryPhase::Finally => {
					let finally_state = children[2].tick(ctx).await?;
					match finally_state {
						BehaviorState::Running => return Ok(BehaviorState::Running),
						BehaviorState::Idle => {
							return Err(BehaviorError::State {
								behavior: "Recovery".into(),
								state: finally_state,
							});
						}
						// the finally state is ignored
						_ => return Ok(self.finish(children, ctx)),
					}
				}
			}
		}
	}
}

impl Recovery {
	fn finish(&mut self, children: &mut TreeNodeList, ctx: &TickContext) -> BehaviorState {
		let state = self.main.take().unwrap_or(BehaviorState::Failure);
		self.phase = RecoveryPhase::Try;
		children.reset(ctx.emitter());
		state
	}
}
// endregion:   --- Recovery
