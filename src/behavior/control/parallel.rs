// Copyright © 2025 Stephan Kunz
//! [`Parallel`] behavior implementation.

// region:      --- modules
use std::collections::BTreeMap;

use crate::{
	self as ticktree, ANY, Control, STRATEGY, STRICT,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData, error::Error as BehaviorError},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:		--- ParallelStrategy
/// Completion strategy of a [`Parallel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ParallelStrategy {
	/// All children must succeed.
	#[default]
	Strict,
	/// One succeeding child is enough.
	Any,
}
// endregion:	--- ParallelStrategy

// region:      --- Parallel
/// A `Parallel` ticks all children within one engine tick. Children that
/// reached a terminal state keep it and are not re-ticked; only still
/// running children make further progress on subsequent ticks.
///
/// The node waits until every child is terminal, then folds:
/// - strategy `strict` (default): success only if no child failed.
/// - strategy `any`: success if at least one child succeeded.
///
/// On completion all child cursors are reset.
#[derive(Clone, Control, Debug, Default)]
pub struct Parallel {
	/// The completion strategy, read from the `strategy` port.
	strategy: ParallelStrategy,
	/// Terminal results of completed children by index.
	completed: BTreeMap<usize, BehaviorState>,
}

#[async_trait::async_trait]
impl Behavior for Parallel {
	fn provided_ports() -> PortList {
		port_list![input_port!(
			ValueKind::Str,
			STRATEGY,
			STRICT,
			"Completion strategy: 'strict' needs all children to succeed, 'any' a single one."
		)]
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.completed.clear();
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		let strategy = data.input_str(ctx, STRATEGY)?;
		self.strategy = match strategy.as_ref() {
			STRICT => ParallelStrategy::Strict,
			ANY => ParallelStrategy::Any,
			other => {
				return Err(BehaviorError::Composition {
					txt: format!("'{other}' is no parallel strategy").into(),
				});
			}
		};
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);

		let children_count = children.len();
		for child_idx in 0..children_count {
			if self.completed.contains_key(&child_idx) {
				continue;
			}
			ctx.check_cancellation()?;
			let child = &mut children[child_idx];
			let child_state = child.tick(ctx).await?;

			match child_state {
				BehaviorState::Running => {}
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "Parallel".into(),
						state: child_state,
					});
				}
				terminal => {
					self.completed.insert(child_idx, terminal);
				}
			}
		}

		if self.completed.len() < children_count {
			return Ok(BehaviorState::Running);
		}

		let failures = self
			.completed
			.values()
			.filter(|state| **state == BehaviorState::Failure)
			.count();
		let successes = self
			.completed
			.values()
			.filter(|state| **state == BehaviorState::Success)
			.count();
		let all_skipped =
			children_count > 0 && self.completed.values().all(|state| *state == BehaviorState::Skipped);

		let state = if all_skipped {
			BehaviorState::Skipped
		} else {
			match self.strategy {
				ParallelStrategy::Strict => {
					if failures == 0 {
						BehaviorState::Success
					} else {
						BehaviorState::Failure
					}
				}
				ParallelStrategy::Any => {
					if successes > 0 {
						BehaviorState::Success
					} else {
						BehaviorState::Failure
					}
				}
			}
		};

		self.completed.clear();
		children.reset(ctx.emitter());
		Ok(state)
	}
}
// endregion:   --- Parallel
