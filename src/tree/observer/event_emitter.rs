// Copyright © 2025 Stephan Kunz

//! [`EventEmitter`] implementation.

// region:      --- modules
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use spin::RwLock;

use super::event::{Event, EventKind};
// endregion:   --- modules

// region:		--- types
/// Handle returned by a subscription, used to unsubscribe.
pub type SubscriptionId = u64;

/// Signature of an event subscriber callback.
pub type EventCallback = dyn Fn(&Event) + Send + Sync;
// endregion:	--- types

// region:		--- EventEmitter
struct Subscriber {
	id: SubscriptionId,
	/// `None` subscribes to every event kind.
	filter: Option<EventKind>,
	callback: Arc<EventCallback>,
}

#[derive(Default)]
struct Subscribers {
	next_id: SubscriptionId,
	list: Vec<Subscriber>,
}

/// Fan-out of lifecycle events to registered subscribers.
///
/// A panicking subscriber is isolated: the panic is caught and logged,
/// remaining subscribers and the tick continue undisturbed.
#[derive(Clone, Default)]
pub struct EventEmitter(Arc<RwLock<Subscribers>>);

impl core::fmt::Debug for EventEmitter {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("EventEmitter")
			.field("subscribers", &self.0.read().list.len())
			.finish()
	}
}

impl EventEmitter {
	/// Constructor.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Subscribe to a single event kind.
	pub fn subscribe<F>(&self, kind: EventKind, callback: F) -> SubscriptionId
	where
		F: Fn(&Event) + Send + Sync + 'static,
	{
		self.add(Some(kind), Arc::new(callback))
	}

	/// Subscribe to every event kind.
	pub fn subscribe_all<F>(&self, callback: F) -> SubscriptionId
	where
		F: Fn(&Event) + Send + Sync + 'static,
	{
		self.add(None, Arc::new(callback))
	}

	fn add(&self, filter: Option<EventKind>, callback: Arc<EventCallback>) -> SubscriptionId {
		let mut guard = self.0.write();
		let id = guard.next_id;
		guard.next_id += 1;
		guard.list.push(Subscriber { id, filter, callback });
		id
	}

	/// Remove a subscription.
	pub fn unsubscribe(&self, id: SubscriptionId) {
		self.0.write().list.retain(|subscriber| subscriber.id != id);
	}

	/// Number of registered subscribers.
	#[must_use]
	pub fn subscriber_count(&self) -> usize {
		self.0.read().list.len()
	}

	/// Emit an event to all matching subscribers.
	pub fn emit(&self, event: &Event) {
		// collect the matching callbacks first, the subscriber table
		// must not stay locked while callbacks run
		let callbacks: Vec<Arc<EventCallback>> = {
			let guard = self.0.read();
			guard
				.list
				.iter()
				.filter(|subscriber| subscriber.filter.is_none_or(|kind| kind == event.kind))
				.map(|subscriber| subscriber.callback.clone())
				.collect()
		};
		for callback in callbacks {
			if catch_unwind(AssertUnwindSafe(|| callback(event))).is_err() {
				tracing::warn!(
					node = event.node_id.as_ref(),
					kind = %event.kind,
					"event subscriber panicked"
				);
			}
		}
	}
}
// endregion:	--- EventEmitter
