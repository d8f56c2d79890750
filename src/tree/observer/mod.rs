// Copyright © 2025 Stephan Kunz

//! Observation of [`ticktree`](crate) tree execution.

mod event;
mod event_emitter;
mod tree_observer;

// flatten
pub use event::{Event, EventKind, now_millis};
pub use event_emitter::{EventCallback, EventEmitter, SubscriptionId};
pub use tree_observer::{NodeStatistics, TreeObserver};
