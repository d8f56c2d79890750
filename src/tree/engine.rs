// Copyright © 2025 Stephan Kunz

//! [`TickEngine`], the outer driver around a tree root.
//!
//! The engine repeats ticks until a terminal state, applies adaptive
//! back-off, enforces per tick timeouts, propagates cancellation,
//! captures execution snapshots and observes its own lifecycle events.

// region:      --- modules
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use spin::Mutex;

use crate::ConstString;
use crate::behavior::BehaviorState;
use crate::blackboard::{Blackboard, BlackboardDiff, Value};
use crate::{LEVEL, MESSAGE};

use super::backoff::{TickDelayMode, TickDelayStrategy};
use super::cancellation::CancellationToken;
use super::context::{RunningOperations, TickContext};
use super::error::Error;
use super::observer::{Event, EventEmitter, EventKind, now_millis};
use super::snapshot::{ExecutionSnapshot, TraceEntry};
use super::tree::BehaviorTree;
// endregion:   --- modules

// region:		--- EngineConfig
/// Static configuration of a [`TickEngine`].
#[derive(Clone, Debug)]
pub struct EngineConfig {
	/// Reset a terminal root before the next tick.
	pub auto_reset: bool,
	/// Race every tick against this timeout.
	pub tick_timeout: Option<Duration>,
	/// Record an [`ExecutionSnapshot`] after every tick that changed
	/// the blackboard.
	pub capture_snapshots: bool,
	/// Upper bound of ticks per run-to-completion call.
	pub max_ticks: u64,
	/// Back-off mode between ticks of a run-to-completion call.
	pub delay: TickDelayMode,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			auto_reset: true,
			tick_timeout: None,
			capture_snapshots: false,
			max_ticks: 10_000,
			delay: TickDelayMode::Auto,
		}
	}
}
// endregion:	--- EngineConfig

// region:		--- RunOutcome
/// A log record collected during a run-to-completion call.
#[derive(Clone, Debug)]
pub struct LogRecord {
	/// Id of the originating node.
	pub node_id: ConstString,
	/// The log level.
	pub level: ConstString,
	/// The log message.
	pub message: ConstString,
	/// Wall clock milliseconds since the unix epoch.
	pub timestamp_ms: u64,
}

/// The result of a run-to-completion call.
#[derive(Debug)]
pub struct RunOutcome {
	/// The final state.
	pub state: BehaviorState,
	/// Number of ticks spent.
	pub ticks: u64,
	/// The buffered log records.
	pub logs: Vec<LogRecord>,
	/// Id of the most recent node that finished a tick with failure.
	pub last_failure: Option<ConstString>,
	/// Whether the run ended through cooperative cancellation.
	pub cancelled: bool,
}
// endregion:	--- RunOutcome

// region:		--- TickEngine
/// The outer loop around a [`BehaviorTree`].
pub struct TickEngine {
	tree: BehaviorTree,
	config: EngineConfig,
	emitter: EventEmitter,
	cancellation: CancellationToken,
	running_ops: RunningOperations,
	delay: TickDelayStrategy,
	/// Single-activation lock. Stays held across a timed out tick until
	/// [`halt`](TickEngine::halt) cleaned up.
	running: Arc<AtomicBool>,
	tick_count: u64,
	last_tick: Option<Instant>,
	epoch: Instant,
	/// Optional fixture values handed to every tick context.
	test_data: Option<Arc<BTreeMap<ConstString, Value>>>,
	/// Snapshot capture state.
	snapshots: Vec<ExecutionSnapshot>,
	last_committed: BTreeMap<ConstString, Value>,
	/// Buffers fed by the engines own event subscriptions.
	tick_events: Arc<Mutex<Vec<Event>>>,
	logs: Arc<Mutex<Vec<LogRecord>>>,
	last_failure: Arc<Mutex<Option<ConstString>>>,
}

impl core::fmt::Debug for TickEngine {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TickEngine")
			.field("tree", &self.tree.uuid())
			.field("tick_count", &self.tick_count)
			.field("running", &self.running.load(Ordering::SeqCst))
			.finish_non_exhaustive()
	}
}

impl TickEngine {
	/// Create an engine with default configuration.
	#[must_use]
	pub fn new(tree: BehaviorTree) -> Self {
		Self::with_config(tree, EngineConfig::default())
	}

	/// Create an engine with the given configuration.
	#[must_use]
	pub fn with_config(tree: BehaviorTree, config: EngineConfig) -> Self {
		let emitter = EventEmitter::new();

		let tick_events: Arc<Mutex<Vec<Event>>> = Arc::default();
		let event_buffer = tick_events.clone();
		emitter.subscribe_all(move |event| {
			event_buffer.lock().push(event.clone());
		});

		let logs: Arc<Mutex<Vec<LogRecord>>> = Arc::default();
		let log_buffer = logs.clone();
		emitter.subscribe(EventKind::Log, move |event| {
			let Some(Value::Map(payload)) = &event.data else { return };
			let field = |key: &str| -> ConstString { payload.get(key).and_then(Value::as_str).unwrap_or("").into() };
			log_buffer.lock().push(LogRecord {
				node_id: event.node_id.clone(),
				level: field(LEVEL),
				message: field(MESSAGE),
				timestamp_ms: event.timestamp_ms,
			});
		});

		let last_failure: Arc<Mutex<Option<ConstString>>> = Arc::default();
		let failure_buffer = last_failure.clone();
		emitter.subscribe(EventKind::TickEnd, move |event| {
			if event.state() == Some(BehaviorState::Failure) {
				*failure_buffer.lock() = Some(event.node_id.clone());
			}
		});

		let delay = TickDelayStrategy::new(config.delay);
		Self {
			tree,
			config,
			emitter,
			cancellation: CancellationToken::new(),
			running_ops: RunningOperations::default(),
			delay,
			running: Arc::new(AtomicBool::new(false)),
			tick_count: 0,
			last_tick: None,
			epoch: Instant::now(),
			test_data: None,
			snapshots: Vec::new(),
			last_committed: BTreeMap::new(),
			tick_events,
			logs,
			last_failure,
		}
	}

	/// The wrapped tree.
	#[must_use]
	pub const fn tree(&self) -> &BehaviorTree {
		&self.tree
	}

	/// The wrapped tree, mutable.
	#[must_use]
	pub const fn tree_mut(&mut self) -> &mut BehaviorTree {
		&mut self.tree
	}

	/// The configuration.
	#[must_use]
	pub const fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// The lifecycle event emitter of this engine.
	#[must_use]
	pub const fn emitter(&self) -> &EventEmitter {
		&self.emitter
	}

	/// The cancellation token of the current activation.
	#[must_use]
	pub const fn cancellation(&self) -> &CancellationToken {
		&self.cancellation
	}

	/// The running operations table.
	#[must_use]
	pub const fn running_ops(&self) -> &RunningOperations {
		&self.running_ops
	}

	/// Number of started ticks.
	#[must_use]
	pub const fn tick_count(&self) -> u64 {
		self.tick_count
	}

	/// The captured snapshots.
	#[must_use]
	pub fn snapshots(&self) -> &[ExecutionSnapshot] {
		&self.snapshots
	}

	/// Remove and return the captured snapshots.
	pub fn take_snapshots(&mut self) -> Vec<ExecutionSnapshot> {
		core::mem::take(&mut self.snapshots)
	}

	/// Hand fixture values to every tick context.
	pub fn set_test_data(&mut self, test_data: BTreeMap<ConstString, Value>) {
		self.test_data = Some(Arc::new(test_data));
	}

	/// A context seed for resuming execution at the given node.
	#[must_use]
	pub fn resume_context(&self, blackboard: &Blackboard, node_id: &str) -> TickContext {
		self.context(blackboard, Some(node_id.into()), Duration::ZERO)
	}

	fn context(&self, blackboard: &Blackboard, resume_from: Option<ConstString>, delta: Duration) -> TickContext {
		let mut ctx = TickContext::new(blackboard.clone())
			.with_registry(self.tree.registry().clone())
			.with_cancellation(self.cancellation.clone())
			.with_emitter(self.emitter.clone())
			.with_running_ops(self.running_ops.clone())
			.with_timing(delta, self.epoch.elapsed());
		if let Some(test_data) = &self.test_data {
			ctx = ctx.with_test_data(test_data.clone());
		}
		if let Some(resume) = resume_from {
			ctx = ctx.with_resume_from(&resume);
		}
		ctx
	}

	/// Tick the tree exactly once.
	/// # Errors
	/// - [`Error::AlreadyRunning`] while another tick is in flight
	/// - [`Error::TickTimeout`] when the configured timeout expires;
	///   the tree is then in an unknown state, call
	///   [`halt`](TickEngine::halt) before ticking again
	/// - behavior errors of the configuration or cancellation kind
	pub async fn tick(&mut self, blackboard: &Blackboard) -> Result<BehaviorState, Error> {
		self.tick_inner(blackboard, None).await
	}

	#[allow(clippy::cast_possible_truncation)]
	async fn tick_inner(
		&mut self,
		blackboard: &Blackboard,
		resume_from: Option<ConstString>,
	) -> Result<BehaviorState, Error> {
		if self.running.swap(true, Ordering::SeqCst) {
			return Err(Error::AlreadyRunning);
		}

		self.tick_count += 1;
		let now = Instant::now();
		let delta = self.last_tick.map_or(Duration::ZERO, |last| now.duration_since(last));
		self.last_tick = Some(now);

		if self.config.auto_reset && self.tree.root().state().is_completed() {
			self.tree.root_mut().reset(&self.emitter);
		}

		let mut ctx = self.context(blackboard, resume_from, delta);
		let result = if let Some(timeout) = self.config.tick_timeout {
			match tokio::time::timeout(timeout, self.tree.root_mut().tick(&mut ctx)).await {
				Ok(result) => result,
				Err(_) => {
					// the lock stays held until halt() cleaned up
					return Err(Error::TickTimeout {
						millis: timeout.as_millis() as u64,
					});
				}
			}
		} else {
			self.tree.root_mut().tick(&mut ctx).await
		};

		self.running.store(false, Ordering::SeqCst);
		let state = result?;
		self.capture(blackboard, state);
		Ok(state)
	}

	/// Capture a snapshot when the blackboard changed during the tick.
	fn capture(&mut self, blackboard: &Blackboard, state: BehaviorState) {
		// the trace buffer is drained every tick to stay bounded
		let events: Vec<Event> = core::mem::take(&mut *self.tick_events.lock());
		if !self.config.capture_snapshots {
			return;
		}
		let current = blackboard.snapshot();
		let diff = BlackboardDiff::between(&self.last_committed, &current);
		if diff.is_empty() {
			return;
		}
		let snapshot = ExecutionSnapshot {
			tick_number: self.tick_count,
			timestamp_ms: now_millis(),
			root_node_id: self.tree.root().id().clone(),
			root_state: state,
			blackboard: current.clone(),
			diff,
			trace: events.iter().map(TraceEntry::from).collect(),
		};
		self.last_committed = current;
		self.snapshots.push(snapshot);
	}

	/// Tick the tree until it finishes with a state other than
	/// [`BehaviorState::Running`] or the configured tick limit is hit.
	/// # Errors
	pub async fn tick_while_running(&mut self, blackboard: &Blackboard) -> Result<RunOutcome, Error> {
		self.tick_while_running_from(blackboard, None).await
	}

	/// Like [`tick_while_running`](TickEngine::tick_while_running), with a
	/// resume point injected into the first tick only.
	/// # Errors
	pub async fn tick_while_running_from(
		&mut self,
		blackboard: &Blackboard,
		resume_from: Option<&str>,
	) -> Result<RunOutcome, Error> {
		self.logs.lock().clear();
		*self.last_failure.lock() = None;
		self.delay.reset();

		let mut resume: Option<ConstString> = resume_from.map(Into::into);
		let mut ticks: u64 = 0;
		let mut cancelled = false;
		let mut state = BehaviorState::Running;

		while ticks < self.config.max_ticks {
			let result = self.tick_inner(blackboard, resume.take()).await;
			ticks += 1;
			match result {
				Ok(new_state) => {
					state = new_state;
					if new_state != BehaviorState::Running {
						self.delay.reset();
						break;
					}
				}
				Err(error) if error.is_cancellation() => {
					self.halt();
					state = BehaviorState::Failure;
					cancelled = true;
					break;
				}
				Err(error) => return Err(error),
			}
			if ticks >= self.config.max_ticks {
				break;
			}
			let delay = self.delay.next_delay();
			if !delay.is_zero() {
				tokio::time::sleep(delay).await;
			}
		}

		// be cooperative & allow pending tasks to catch up
		tokio::task::yield_now().await;

		let logs = core::mem::take(&mut *self.logs.lock());
		let last_failure = self.last_failure.lock().clone();
		Ok(RunOutcome {
			state,
			ticks,
			logs,
			last_failure,
			cancelled,
		})
	}

	/// Halt the engine and its tree.
	///
	/// Signals the cancellation token, recursively halts the root,
	/// clears the running operations and releases the activation lock.
	/// Afterwards a fresh cancellation token is armed.
	pub fn halt(&mut self) {
		self.cancellation.cancel();
		self.tree.root_mut().halt(&self.emitter);
		self.running_ops.clear();
		self.running.store(false, Ordering::SeqCst);
		self.cancellation = CancellationToken::new();
	}

	/// Reset the tree and the back-off strategy.
	pub fn reset(&mut self) {
		self.tree.root_mut().reset(&self.emitter);
		self.delay.reset();
	}
}
// endregion:	--- TickEngine
