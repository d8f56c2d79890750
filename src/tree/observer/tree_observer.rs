// Copyright © 2025 Stephan Kunz

//! [`TreeObserver`] implementation.

// region:      --- modules
use std::collections::BTreeMap;
use std::sync::Arc;

use spin::Mutex;

use crate::ConstString;
use crate::behavior::BehaviorState;

use super::event::EventKind;
use super::event_emitter::{EventEmitter, SubscriptionId};
// endregion:   --- modules

// region:		--- NodeStatistics
/// Per node execution statistics collected by a [`TreeObserver`].
#[derive(Clone, Debug, Default)]
pub struct NodeStatistics {
	/// Number of completed ticks.
	pub tick_count: u64,
	/// Number of ticks that ended in [`BehaviorState::Success`].
	pub success_count: u64,
	/// Number of ticks that ended in [`BehaviorState::Failure`].
	pub failure_count: u64,
	/// Number of ticks that ended in [`BehaviorState::Skipped`].
	pub skip_count: u64,
	/// The most recent resulting state.
	pub last_state: BehaviorState,
}
// endregion:	--- NodeStatistics

// region:		--- TreeObserver
/// Collects per node statistics from the tick end events of an
/// [`EventEmitter`].
pub struct TreeObserver {
	statistics: Arc<Mutex<BTreeMap<ConstString, NodeStatistics>>>,
	emitter: EventEmitter,
	subscription: SubscriptionId,
}

impl core::fmt::Debug for TreeObserver {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TreeObserver")
			.field("nodes", &self.statistics.lock().len())
			.finish_non_exhaustive()
	}
}

impl TreeObserver {
	/// Attach an observer to an emitter.
	#[must_use]
	pub fn attach(emitter: &EventEmitter) -> Self {
		let statistics: Arc<Mutex<BTreeMap<ConstString, NodeStatistics>>> = Arc::default();
		let collected = statistics.clone();
		let subscription = emitter.subscribe(EventKind::TickEnd, move |event| {
			let Some(state) = event.state() else { return };
			let mut guard = collected.lock();
			let entry = guard.entry(event.node_id.clone()).or_default();
			entry.tick_count += 1;
			entry.last_state = state;
			match state {
				BehaviorState::Success => entry.success_count += 1,
				BehaviorState::Failure => entry.failure_count += 1,
				BehaviorState::Skipped => entry.skip_count += 1,
				BehaviorState::Idle | BehaviorState::Running => {}
			}
		});
		Self {
			statistics,
			emitter: emitter.clone(),
			subscription,
		}
	}

	/// The statistics of a single node.
	#[must_use]
	pub fn statistics(&self, node_id: &str) -> Option<NodeStatistics> {
		self.statistics.lock().get(node_id).cloned()
	}

	/// The number of completed ticks of a single node.
	#[must_use]
	pub fn tick_count(&self, node_id: &str) -> u64 {
		self.statistics.lock().get(node_id).map_or(0, |stats| stats.tick_count)
	}

	/// Drop all collected statistics.
	pub fn clear(&self) {
		self.statistics.lock().clear();
	}
}

impl Drop for TreeObserver {
	fn drop(&mut self) {
		self.emitter.unsubscribe(self.subscription);
	}
}
// endregion:	--- TreeObserver
