// Copyright © 2025 Stephan Kunz

//! Tree structure, tick engine and observation of [`ticktree`](crate).

mod backoff;
mod cancellation;
mod context;
mod engine;
pub mod error;
mod node;
pub mod observer;
mod registry;
mod snapshot;
#[allow(clippy::module_inception)]
mod tree;

// flatten
pub use backoff::{TickDelayMode, TickDelayStrategy};
pub use cancellation::CancellationToken;
pub use context::{RunningOperation, RunningOperations, TickContext};
pub use engine::{EngineConfig, LogRecord, RunOutcome, TickEngine};
pub use node::{TreeNode, TreeNodeList};
pub use registry::TreeRegistry;
pub use snapshot::{ExecutionSnapshot, TraceEntry};
pub use tree::BehaviorTree;
