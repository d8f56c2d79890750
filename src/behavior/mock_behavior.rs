// Copyright © 2025 Stephan Kunz
//! [`MockBehavior`] implementation.

// region:      --- modules
use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::port::PortList;
use crate::tree::{TickContext, TreeNodeList};

use super::error::Error as BehaviorError;
use super::{
	Behavior, BehaviorCreationFn, BehaviorExecution, BehaviorKind, BehaviorPtr, BehaviorResult, BehaviorState,
	BehaviorStatic, NodeData,
};
// endregion:   --- modules

// region:		--- MockBehaviorConfig
/// Configuration for the [`MockBehavior`].
#[derive(Clone, Default)]
pub struct MockBehaviorConfig {
	/// The [`BehaviorState`] that will be returned when `states` is empty
	/// and no `complete_func` is set.
	pub return_state: BehaviorState,
	/// Scripted results: activation `n` completes with `states[n]`,
	/// saturating at the last element.
	pub states: Vec<BehaviorState>,
	/// If set, the behavior becomes asynchronous and returns
	/// [`BehaviorState::Running`] until the delay elapsed.
	pub async_delay: Option<Duration>,
	/// Function invoked to determine the completion state.
	/// Takes precedence over `states` and `return_state`.
	pub complete_func: Option<Arc<dyn Fn() -> BehaviorState + Send + Sync>>,
}

impl core::fmt::Debug for MockBehaviorConfig {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("MockBehaviorConfig")
			.field("return_state", &self.return_state)
			.field("states", &self.states)
			.field("async_delay", &self.async_delay)
			.finish_non_exhaustive()
	}
}

impl MockBehaviorConfig {
	/// Creates a configuration with the given return state.
	#[must_use]
	pub fn new(return_state: BehaviorState) -> Self {
		Self {
			return_state,
			..Default::default()
		}
	}

	/// Creates a configuration returning the scripted states, one per
	/// activation, saturating at the last one.
	#[must_use]
	pub fn with_states(states: Vec<BehaviorState>) -> Self {
		Self {
			states,
			..Default::default()
		}
	}
}
// endregion:	--- MockBehaviorConfig

// region:		--- MockBehavior
/// A configurable behavior usable for mocking and substitution.
///
/// Counts its ticks; tests read the count back through the behavior
/// downcast of the owning node.
#[derive(Clone, Debug, Default)]
pub struct MockBehavior {
	config: MockBehaviorConfig,
	ports: PortList,
	start_time: Option<Instant>,
	/// Completed activations, indexes the scripted states.
	activations: usize,
	tick_count: usize,
}

impl MockBehavior {
	/// Creates a mock with the given configuration.
	#[must_use]
	pub fn new(config: MockBehaviorConfig) -> Self {
		Self {
			config,
			..Default::default()
		}
	}

	/// Creates a mock advertising the given ports.
	#[must_use]
	pub fn with_ports(config: MockBehaviorConfig, ports: PortList) -> Self {
		Self {
			config,
			ports,
			..Default::default()
		}
	}

	/// Number of ticks this behavior received.
	#[must_use]
	pub const fn tick_count(&self) -> usize {
		self.tick_count
	}

	/// Modify the completion state.
	pub fn set_state(&mut self, state: BehaviorState) {
		self.config.return_state = state;
		self.config.states.clear();
	}

	fn completed(&mut self) -> BehaviorResult {
		let state = if let Some(complete_func) = &self.config.complete_func {
			complete_func()
		} else if self.config.states.is_empty() {
			self.config.return_state
		} else {
			let index = self.activations.min(self.config.states.len() - 1);
			self.config.states[index]
		};
		if state == BehaviorState::Idle {
			return Err(BehaviorError::Composition {
				txt: "MockBehavior may not return Idle".into(),
			});
		}
		if state.is_completed() {
			self.activations += 1;
		}
		Ok(state)
	}
}

#[async_trait::async_trait]
impl Behavior for MockBehavior {
	fn on_halt(&mut self) -> Result<(), BehaviorError> {
		self.start_time = None;
		Ok(())
	}

	async fn on_start(
		&mut self,
		_data: &mut NodeData,
		_children: &mut TreeNodeList,
		_ctx: &mut TickContext,
	) -> Result<(), BehaviorError> {
		if self.config.async_delay.is_some() {
			self.start_time = Some(Instant::now());
		}
		Ok(())
	}

	async fn tick(&mut self, _data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		ctx.check_cancellation()?;
		self.tick_count += 1;
		if let Some(delay) = self.config.async_delay {
			if let Some(start) = self.start_time {
				if start.elapsed() >= delay {
					self.start_time = None;
					return self.completed();
				}
				return Ok(BehaviorState::Running);
			}
		}
		self.completed()
	}
}

impl BehaviorStatic for MockBehavior {
	fn kind() -> BehaviorKind {
		BehaviorKind::Action
	}

	fn creation_fn() -> Box<BehaviorCreationFn> {
		Box::new(|| Box::new(Self::default()))
	}
}

impl BehaviorExecution for MockBehavior {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn clone_boxed(&self) -> BehaviorPtr {
		Box::new(self.clone())
	}

	fn static_kind(&self) -> BehaviorKind {
		Self::kind()
	}

	fn static_provided_ports(&self) -> PortList {
		self.ports.clone()
	}
}
// endregion:	--- MockBehavior
