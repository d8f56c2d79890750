// Copyright © 2025 Stephan Kunz
#![doc = include_str!("../README.md")]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// mostly needed stuff
pub mod prelude;

// modules
pub mod behavior; // due to macros!!
pub mod blackboard;
mod error;
pub mod factory; // due to macros!!
pub mod port; // due to macros!!
pub mod tree;

// flatten:
pub use behavior::{Behavior, BehaviorExecution, BehaviorStatic};
pub use behavior::{BehaviorDescription, BehaviorError, BehaviorKind, BehaviorResult, BehaviorState, NodeData};
pub use blackboard::{Blackboard, BlackboardDiff, Value};
pub use error::{Error, TickResult};
pub use factory::{BehaviorFactory, NodeSpec};
pub use tree::observer::{Event, EventEmitter, EventKind, TreeObserver};
pub use tree::{
	BehaviorTree, CancellationToken, ExecutionSnapshot, RunOutcome, TickContext, TickDelayStrategy, TickEngine,
	TreeNode, TreeNodeList, TreeRegistry,
};

// re-exports:
pub use ticktree_derive::{Action, Condition, Control, Decorator};

// region:		--- modules
use std::sync::Arc;
// endregion:	--- modules

// region		--- types
/// An immutable thread safe `String` type
/// see: [Logan Smith](https://www.youtube.com/watch?v=A4cKi7PTJSs).
pub type ConstString = Arc<str>;
// endregion:   --- types

// region:		--- literal constants
/// Port names
const COLLECTION: &str = "collection";
const DELAY_MSEC: &str = "delay_msec";
const ENTRIES: &str = "entries";
const EXPECTED: &str = "expected";
const KEY: &str = "key";
const LEVEL: &str = "level";
const MAX_ITERATIONS: &str = "max_iterations";
const MESSAGE: &str = "message";
const MSEC: &str = "msec";
const NUM_ATTEMPTS: &str = "num_attempts";
const NUM_CYCLES: &str = "num_cycles";
const STRATEGY: &str = "strategy";
const TREE_ID: &str = "tree_id";
const VALUE: &str = "value";
const VARIABLE: &str = "variable";

/// Parallel strategies
const ANY: &str = "any";
const STRICT: &str = "strict";

/// Behavior states
const IDLE: &str = "Idle";
const RUNNING: &str = "Running";
const SUCCESS: &str = "Success";
const FAILURE: &str = "Failure";
const SKIPPED: &str = "Skipped";

/// An empty string
pub const EMPTY_STR: &str = "";
// endregion:	--- literal constants

// region:		---macros
/// Macro to register a behavior, optionally with additional arguments.
///
/// # Usage:
///
/// Register a Behavior:
/// ```no-test
/// register_behavior!(<mutable (reference to) behavior factory>, <struct to register>, <"identifying name">)
/// ```
///
/// Register a Behavior with additional arguments for construction:
/// ```no-test
/// register_behavior!(<mutable (reference to) behavior factory>, <struct to register>, <"identifying name">, <arg1>, <arg2>, ...)
/// ```
///
/// # Example:
///
/// ```no-test
/// let mut factory = BehaviorFactory::with_core_behaviors()?;
///
/// register_behavior!(factory, ActionA, "Action_A", 42, "hello world".into())?;
/// ```
#[macro_export]
macro_rules! register_behavior {
	// a behavior struct
	($factory:expr, $tp:ty, $name:literal $(,)?) => {{
		$factory.register_behavior_type::<$tp>($name)
	}};
	// a behavior struct with arguments for construction
	($factory:expr, $tp:ty, $name:literal, $($arg:expr),* $(,)?) => {{
		let bhvr_desc = $crate::behavior::BehaviorDescription::new(
			$name,
			stringify!($tp),
			<$tp as $crate::behavior::BehaviorStatic>::kind(),
			<$tp as $crate::behavior::Behavior>::provided_ports(),
			<$tp as $crate::behavior::Behavior>::expected_children(),
		);
		let bhvr_creation_fn = move || -> ::std::boxed::Box<dyn $crate::behavior::BehaviorExecution> {
			::std::boxed::Box::new(<$tp>::new($($arg),*))
		};
		$factory
			.registry_mut()
			.add_behavior(bhvr_desc, bhvr_creation_fn)
	}};
}
// endregion:	---macros
