// Copyright © 2025 Stephan Kunz
//! [`ForEach`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, COLLECTION, Control, VARIABLE,
	behavior::{Behavior, BehaviorResult, BehaviorState, ChildExpectation, NodeData, error::Error as BehaviorError},
	blackboard::{Value, ValueKind},
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- ForEach
/// A `ForEach` iterates a blackboard collection, assigning the current
/// element to the loop variable before ticking its single body child.
///
/// The collection is read once at the start of an activation. A running
/// body suspends the iteration, a failing body fails the loop, an
/// exhausted collection completes it with [`BehaviorState::Success`].
#[derive(Clone, Control, Debug, Default)]
pub struct ForEach {
	/// The snapshot of the iterated collection.
	items: Vec<Value>,
	/// Cursor into `items`.
	index: usize,
}

#[async_trait::async_trait]
impl Behavior for ForEach {
	fn provided_ports() -> PortList {
		port_list![
			input_port!(ValueKind::List, COLLECTION),
			input_port!(ValueKind::Str, VARIABLE),
		]
	}

	fn expected_children() -> Option<ChildExpectation> {
		Some(ChildExpectation::Exactly(1))
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.items.clear();
		self.index = 0;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		_children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		let collection = data.input(ctx, COLLECTION)?;
		self.items = collection
			.as_list()
			.cloned()
			.ok_or_else(|| BehaviorError::PortType {
				port: COLLECTION.into(),
				expected: "list".into(),
			})?;
		self.index = 0;
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);
		let variable = data.input_str(ctx, VARIABLE)?;

		while self.index < self.items.len() {
			ctx.check_cancellation()?;
			// assign the loop variable at the start of an iteration only,
			// a running body must not see it re-written
			if children[0].state() == BehaviorState::Idle {
				ctx.blackboard().set(&variable, self.items[self.index].clone());
			}
			let body_state = children[0].tick(ctx).await?;
			match body_state {
				BehaviorState::Running => return Ok(BehaviorState::Running),
				BehaviorState::Idle => {
					return Err(BehaviorError::State {
						behavior: "ForEach".into(),
						state: body_state,
					});
				}
				BehaviorState::Failure => {
					self.items.clear();
					self.index = 0;
					children.reset(ctx.emitter());
					return Ok(BehaviorState::Failure);
				}
				BehaviorState::Success | BehaviorState::Skipped => {
					self.index += 1;
					children.reset_at(0, ctx.emitter());
				}
			}
		}

		self.items.clear();
		self.index = 0;
		Ok(BehaviorState::Success)
	}
}
// endregion:   --- ForEach
