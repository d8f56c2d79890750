// Copyright © 2025 Stephan Kunz

//! The [`TickContext`] passed down every tick and the
//! [`RunningOperations`] table for fire-and-forget async work.

// region:      --- modules
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use spin::Mutex;

use crate::ConstString;
use crate::behavior::{BehaviorState, NodeData, error::Error as BehaviorError};
use crate::blackboard::{Blackboard, Value};
use crate::{LEVEL, MESSAGE};

use super::cancellation::CancellationToken;
use super::observer::{Event, EventEmitter, EventKind};
use super::registry::TreeRegistry;
// endregion:   --- modules

// region:		--- RunningOperation
/// Completion state of one asynchronous leaf operation.
#[derive(Clone, Debug, Default)]
pub struct RunningOperation {
	/// Whether the operation has finished.
	pub completed: bool,
	/// The resulting state of a finished operation.
	pub result: Option<BehaviorState>,
	/// The error message of a failed operation.
	pub error: Option<ConstString>,
}
// endregion:	--- RunningOperation

// region:		--- RunningOperations
/// Shared table mapping node id to [`RunningOperation`].
///
/// A leaf that cannot finish synchronously registers an operation on its
/// first tick, lets a spawned task complete it, and polls the completion
/// flag in O(1) on subsequent ticks. Cleanup of a drained entry is the
/// responsibility of the leaf.
#[derive(Clone, Default)]
pub struct RunningOperations(Arc<Mutex<BTreeMap<ConstString, RunningOperation>>>);

impl core::fmt::Debug for RunningOperations {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("RunningOperations").field(&self.0.lock().len()).finish()
	}
}

impl RunningOperations {
	/// Register a pending operation for a node.
	pub fn begin(&self, node_id: &str) {
		self.0.lock().insert(node_id.into(), RunningOperation::default());
	}

	/// Mark the operation of a node as completed with a result.
	pub fn complete(&self, node_id: &str, result: BehaviorState) {
		if let Some(operation) = self.0.lock().get_mut(node_id) {
			operation.completed = true;
			operation.result = Some(result);
		}
	}

	/// Mark the operation of a node as failed.
	pub fn fail(&self, node_id: &str, message: &str) {
		if let Some(operation) = self.0.lock().get_mut(node_id) {
			operation.completed = true;
			operation.error = Some(message.into());
		}
	}

	/// Read the operation state of a node.
	#[must_use]
	pub fn poll(&self, node_id: &str) -> Option<RunningOperation> {
		self.0.lock().get(node_id).cloned()
	}

	/// Remove and return the operation of a node.
	pub fn remove(&self, node_id: &str) -> Option<RunningOperation> {
		self.0.lock().remove(node_id)
	}

	/// Drop all registered operations.
	pub fn clear(&self) {
		self.0.lock().clear();
	}

	/// Number of registered operations.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.lock().len()
	}

	/// Whether no operation is registered.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.lock().is_empty()
	}
}
// endregion:	--- RunningOperations

// region:		--- TickContext
/// Everything a node may touch during a tick, passed by reference down
/// the recursive descent.
pub struct TickContext {
	/// The current blackboard scope.
	blackboard: Blackboard,
	/// Read-only handle for subtree lookup and cloning.
	registry: TreeRegistry,
	/// The cooperative cancellation token.
	cancellation: CancellationToken,
	/// The lifecycle event sink.
	emitter: EventEmitter,
	/// Table of fire-and-forget async operations.
	running_ops: RunningOperations,
	/// Monotonic time since the previous tick, informational.
	delta_time: Duration,
	/// Monotonic time since the engine epoch, informational.
	elapsed: Duration,
	/// Optional fixture values consulted by test oriented behaviors.
	test_data: Option<Arc<BTreeMap<ConstString, Value>>>,
	/// Resume point for resumable execution, if any.
	resume_from: Option<ConstString>,
	/// Whether the resume point has been passed.
	reached_resume: bool,
}

impl TickContext {
	/// Create a context for a blackboard with default collaborators.
	#[must_use]
	pub fn new(blackboard: Blackboard) -> Self {
		Self {
			blackboard,
			registry: TreeRegistry::default(),
			cancellation: CancellationToken::default(),
			emitter: EventEmitter::default(),
			running_ops: RunningOperations::default(),
			delta_time: Duration::ZERO,
			elapsed: Duration::ZERO,
			test_data: None,
			resume_from: None,
			reached_resume: false,
		}
	}

	/// Use the given tree registry.
	#[must_use]
	pub fn with_registry(mut self, registry: TreeRegistry) -> Self {
		self.registry = registry;
		self
	}

	/// Use the given cancellation token.
	#[must_use]
	pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
		self.cancellation = cancellation;
		self
	}

	/// Use the given event emitter.
	#[must_use]
	pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
		self.emitter = emitter;
		self
	}

	/// Use the given running operations table.
	#[must_use]
	pub fn with_running_ops(mut self, running_ops: RunningOperations) -> Self {
		self.running_ops = running_ops;
		self
	}

	/// Use the given test fixture values.
	#[must_use]
	pub fn with_test_data(mut self, test_data: Arc<BTreeMap<ConstString, Value>>) -> Self {
		self.test_data = Some(test_data);
		self
	}

	/// Start resumable execution at the given node id.
	#[must_use]
	pub fn with_resume_from(mut self, node_id: &str) -> Self {
		self.resume_from = Some(node_id.into());
		self.reached_resume = false;
		self
	}

	/// Set the timing information.
	#[must_use]
	pub const fn with_timing(mut self, delta_time: Duration, elapsed: Duration) -> Self {
		self.delta_time = delta_time;
		self.elapsed = elapsed;
		self
	}

	/// The current blackboard scope.
	#[must_use]
	pub const fn blackboard(&self) -> &Blackboard {
		&self.blackboard
	}

	/// Replace the blackboard scope, returning the previous one.
	/// Used by subtrees to run their children in an isolated scope.
	pub fn swap_blackboard(&mut self, blackboard: Blackboard) -> Blackboard {
		core::mem::replace(&mut self.blackboard, blackboard)
	}

	/// The tree registry.
	#[must_use]
	pub const fn registry(&self) -> &TreeRegistry {
		&self.registry
	}

	/// The cancellation token.
	#[must_use]
	pub const fn cancellation(&self) -> &CancellationToken {
		&self.cancellation
	}

	/// Fail with the cancellation error kind when cancelled.
	/// # Errors
	/// - [`BehaviorError::Cancelled`] once the token has been signalled.
	pub fn check_cancellation(&self) -> Result<(), BehaviorError> {
		self.cancellation.check()
	}

	/// The event emitter.
	#[must_use]
	pub const fn emitter(&self) -> &EventEmitter {
		&self.emitter
	}

	/// Emit a lifecycle event.
	pub fn emit(&self, event: &Event) {
		self.emitter.emit(event);
	}

	/// Emit a log event for a node.
	pub fn emit_log(&self, data: &NodeData, level: &str, message: &str) {
		let mut payload = BTreeMap::new();
		payload.insert(LEVEL.into(), Value::from(level));
		payload.insert(MESSAGE.into(), Value::from(message));
		self.emitter
			.emit(&Event::for_node(EventKind::Log, data, Some(Value::Map(payload))));
	}

	/// The running operations table.
	#[must_use]
	pub const fn running_ops(&self) -> &RunningOperations {
		&self.running_ops
	}

	/// Monotonic time since the previous tick.
	#[must_use]
	pub const fn delta_time(&self) -> Duration {
		self.delta_time
	}

	/// Monotonic time since the engine epoch.
	#[must_use]
	pub const fn elapsed(&self) -> Duration {
		self.elapsed
	}

	/// Read a test fixture value.
	#[must_use]
	pub fn test_data(&self, key: &str) -> Option<Value> {
		self.test_data.as_ref().and_then(|data| data.get(key).cloned())
	}

	/// The resume point, if resumable execution is active.
	#[must_use]
	pub fn resume_from(&self) -> Option<ConstString> {
		self.resume_from.clone()
	}

	/// Whether the resume point has been passed.
	#[must_use]
	pub const fn reached_resume(&self) -> bool {
		self.reached_resume
	}

	/// Mark the resume point as passed.
	pub const fn set_reached_resume(&mut self) {
		self.reached_resume = true;
	}
}
// endregion:	--- TickContext
