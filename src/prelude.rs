// Copyright © 2025 Stephan Kunz

//! Most commonly used interface of `ticktree`.
//!
//! Typically it is sufficient to include the prelude with
//!
//! ```use ticktree::prelude::*;```

// re-exports
pub use ticktree_derive::{Action, Condition, Control, Decorator};

// public exports
// error handling
pub use crate::error::{Error, TickResult};
// behavior macros
pub use crate::register_behavior;
// port macros
pub use crate::{input_port, output_port, port_list};
// behavior
pub use crate::behavior::{
	BehaviorDescription, BehaviorError, BehaviorKind, BehaviorResult, BehaviorState, ChildExpectation, MockBehavior,
	MockBehaviorConfig, NodeData,
};
// behavior traits
pub use crate::behavior::{Behavior, BehaviorExecution, BehaviorStatic};
// blackboard
pub use crate::blackboard::{Blackboard, BlackboardDiff, Value, ValueKind};
// factory
pub use crate::factory::{BehaviorFactory, NodeSpec};
// port
pub use crate::port::PortList;
// tree
pub use crate::tree::{
	BehaviorTree, CancellationToken, EngineConfig, ExecutionSnapshot, RunOutcome, TickContext, TickDelayMode,
	TickEngine, TreeNode, TreeNodeList, TreeRegistry,
};
// observation
pub use crate::tree::observer::{Event, EventEmitter, EventKind, TreeObserver};
