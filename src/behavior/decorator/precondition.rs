// Copyright © 2025 Stephan Kunz
//! [`Precondition`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Decorator, ENTRIES,
	behavior::{Behavior, BehaviorResult, BehaviorState, ChildExpectation, NodeData, error::Error as BehaviorError},
	blackboard::{Value, ValueKind},
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:		--- globals
/// Entry map keys
const REQUIRED: &str = "required";
const RESOLVER: &str = "resolver";
// endregion:	--- globals

// region:		--- PreconditionEntry
/// One gate: a condition child, an optional resolver child and whether a
/// still failing condition is fatal.
#[derive(Clone, Debug)]
struct PreconditionEntry {
	condition: usize,
	resolver: Option<usize>,
	required: bool,
}
// endregion:	--- PreconditionEntry

// region:      --- Precondition
/// The `Precondition` decorator guards its final child with an ordered
/// list of condition children.
///
/// The child layout is described by the `entries` port, a list of maps
/// with the optional boolean keys `resolver` and `required` (default
/// `true`). For each entry the condition child comes first, followed by
/// its resolver child when `resolver` is set; the guarded child is the
/// last one.
///
/// Per activation each condition is ticked in order. A failing condition
/// with a resolver gets one more check after the resolver completed. A
/// still failing required condition fails the decorator, an optional one
/// is passed over. Once all gates passed the guarded child executes and
/// the gates are NOT re-evaluated while it is running.
#[derive(Clone, Debug, Decorator, Default)]
pub struct Precondition {
	entries: Vec<PreconditionEntry>,
	entry_idx: usize,
	resolving: bool,
	rechecked: bool,
	gate_passed: bool,
}

#[async_trait::async_trait]
impl Behavior for Precondition {
	fn provided_ports() -> PortList {
		port_list![input_port!(
			ValueKind::List,
			ENTRIES,
			Value::List(Vec::new()),
			"Gate layout: one map per gate with optional keys 'resolver' and 'required'."
		)]
	}

	fn expected_children() -> Option<ChildExpectation> {
		Some(ChildExpectation::AtLeast(1))
	}

	#[inline]
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.entry_idx = 0;
		self.resolving = false;
		self.rechecked = false;
		self.gate_passed = false;
		Ok(())
	}

	async fn on_start(
		&mut self,
		data: &mut NodeData,
		children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		let entries = data.input(ctx, ENTRIES)?;
		let entries = entries.as_list().ok_or_else(|| BehaviorError::PortType {
			port: ENTRIES.into(),
			expected: "list".into(),
		})?;

		self.entries.clear();
		let mut cursor = 0_usize;
		for entry in entries {
			let map = entry.as_map().ok_or_else(|| BehaviorError::PortType {
				port: ENTRIES.into(),
				expected: "list of maps".into(),
			})?;
			let has_resolver = map.get(RESOLVER).and_then(Value::as_bool).unwrap_or(false);
			let required = map.get(REQUIRED).and_then(Value::as_bool).unwrap_or(true);
			let condition = cursor;
			cursor += 1;
			let resolver = if has_resolver {
				cursor += 1;
				Some(cursor - 1)
			} else {
				None
			};
			self.entries.push(PreconditionEntry {
				condition,
				resolver,
				required,
			});
		}

		// all gate children plus the guarded child
		if cursor + 1 != children.len() {
			return Err(BehaviorError::Composition {
				txt: format!(
					"Precondition entries describe {} children, found {}",
					cursor + 1,
					children.len()
				)
				.into(),
			});
		}
		Ok(())
	}

	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		data.set_state(BehaviorState::Running);

		if !self.gate_passed {
			while self.entry_idx < self.entries.len() {
				ctx.check_cancellation()?;
				let entry = self.entries[self.entry_idx].clone();

				if self.resolving {
					if let Some(resolver) = entry.resolver {
						let resolver_state = children[resolver].tick(ctx).await?;
						match resolver_state {
							BehaviorState::Running => return Ok(BehaviorState::Running),
							BehaviorState::Idle => {
								return Err(BehaviorError::State {
									behavior: "Precondition".into(),
									state: resolver_state,
								});
							}
							_ => {
								self.resolving = false;
								self.rechecked = true;
								children.reset_at(entry.condition, ctx.emitter());
							}
						}
					} else {
						self.resolving = false;
					}
				}

				let condition_state = children[entry.condition].tick(ctx).await?;
				match condition_state {
					BehaviorState::Running => return Ok(BehaviorState::Running),
					BehaviorState::Idle => {
						return Err(BehaviorError::State {
							behavior: "Precondition".into(),
							state: condition_state,
						});
					}
					BehaviorState::Success | BehaviorState::Skipped => {
						self.entry_idx += 1;
						self.rechecked = false;
					}
					BehaviorState::Failure => {
						if entry.resolver.is_some() && !self.rechecked {
							self.resolving = true;
						} else if entry.required {
							self.reset_gate();
							children.reset(ctx.emitter());
							return Ok(BehaviorState::Failure);
						} else {
							self.entry_idx += 1;
							self.rechecked = false;
						}
					}
				}
			}
			self.gate_passed = true;
		}

		ctx.check_cancellation()?;
		let guarded = children.len() - 1;
		let child_state = children[guarded].tick(ctx).await?;
		match child_state {
			BehaviorState::Running => Ok(BehaviorState::Running),
			BehaviorState::Idle => Err(BehaviorError::State {
				behavior: "Precondition".into(),
				state: child_state,
			}),
			state => {
				self.reset_gate();
				children.reset(ctx.emitter());
				Ok(state)
			}
		}
	}
}

impl Precondition {
	const fn reset_gate(&mut self) {
		self.entry_idx = 0;
		self.resolving = false;
		self.rechecked = false;
		self.gate_passed = false;
	}
}
// endregion:   --- Precondition
