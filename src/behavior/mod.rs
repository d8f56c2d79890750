// Copyright © 2025 Stephan Kunz
//! Behavior model of [`ticktree`](crate).
//!
//! A behavior is the algorithm of a tree node. The surrounding
//! [`TreeNode`](crate::tree::TreeNode) owns identity, state and children
//! and runs the behavior inside the universal tick envelope.

pub mod action;
mod behavior_data;
mod behavior_description;
pub mod condition;
pub mod control;
pub mod decorator;
pub mod error;
mod mock_behavior;

// flatten
pub use behavior_data::NodeData;
pub use behavior_description::BehaviorDescription;
pub use error::Error as BehaviorError;
pub use mock_behavior::{MockBehavior, MockBehaviorConfig};

// region:      --- modules
use std::any::Any;

use crate::port::PortList;
use crate::tree::{TickContext, TreeNodeList};
use crate::{FAILURE, IDLE, RUNNING, SKIPPED, SUCCESS};
// endregion:   --- modules

// region:		--- types
/// Result type for a tick operation.
pub type BehaviorResult = Result<BehaviorState, error::Error>;

/// A boxed behavior.
pub type BehaviorPtr = Box<dyn BehaviorExecution>;

/// Signature of a behavior creation function.
pub type BehaviorCreationFn = dyn Fn() -> BehaviorPtr + Send + Sync;
// endregion:	--- types

// region:		--- BehaviorState
/// The five state status algebra every tick returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BehaviorState {
	/// Never ticked since construction or reset.
	#[default]
	Idle,
	/// Ticked but not yet complete, must be re-ticked.
	Running,
	/// Terminal for the current activation.
	Success,
	/// Terminal for the current activation.
	Failure,
	/// Produced during resumable execution for leaves before the
	/// resume point; composites treat it as neutral and advance.
	Skipped,
}

impl core::fmt::Display for BehaviorState {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Idle => write!(f, "{IDLE}"),
			Self::Running => write!(f, "{RUNNING}"),
			Self::Success => write!(f, "{SUCCESS}"),
			Self::Failure => write!(f, "{FAILURE}"),
			Self::Skipped => write!(f, "{SKIPPED}"),
		}
	}
}

impl core::str::FromStr for BehaviorState {
	type Err = error::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			IDLE => Ok(Self::Idle),
			RUNNING => Ok(Self::Running),
			SUCCESS => Ok(Self::Success),
			FAILURE => Ok(Self::Failure),
			SKIPPED => Ok(Self::Skipped),
			_ => Err(error::Error::Execution {
				txt: format!("'{s}' is no behavior state").into(),
			}),
		}
	}
}

impl BehaviorState {
	/// Whether the state terminates an activation.
	#[must_use]
	pub const fn is_completed(self) -> bool {
		matches!(self, Self::Success | Self::Failure)
	}
}
// endregion:	--- BehaviorState

// region:		--- BehaviorKind
/// The structural kind of a behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BehaviorKind {
	/// A leaf doing work.
	Action,
	/// A leaf checking a predicate.
	Condition,
	/// A node with multiple children encoding control flow.
	Control,
	/// A node with a single child modifying its result or invocation.
	Decorator,
	/// A placeholder executing a tree registered in the tree registry.
	SubTree,
}

impl core::fmt::Display for BehaviorKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Action => write!(f, "Action"),
			Self::Condition => write!(f, "Condition"),
			Self::Control => write!(f, "Control"),
			Self::Decorator => write!(f, "Decorator"),
			Self::SubTree => write!(f, "SubTree"),
		}
	}
}
// endregion:	--- BehaviorKind

// region:		--- ChildExpectation
/// The number of children a behavior accepts, enforced at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildExpectation {
	/// Exactly this many children.
	Exactly(usize),
	/// At least this many children.
	AtLeast(usize),
	/// An inclusive range of children.
	Range(usize, usize),
}

impl core::fmt::Display for ChildExpectation {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Exactly(n) => write!(f, "exactly {n}"),
			Self::AtLeast(n) => write!(f, "at least {n}"),
			Self::Range(min, max) => write!(f, "{min} to {max}"),
		}
	}
}

impl ChildExpectation {
	/// The default expectation implied by a [`BehaviorKind`].
	#[must_use]
	pub const fn for_kind(kind: BehaviorKind) -> Self {
		match kind {
			BehaviorKind::Action | BehaviorKind::Condition | BehaviorKind::SubTree => Self::Exactly(0),
			BehaviorKind::Control => Self::AtLeast(0),
			BehaviorKind::Decorator => Self::Exactly(1),
		}
	}

	/// Whether a concrete child count satisfies the expectation.
	#[must_use]
	pub const fn accepts(self, count: usize) -> bool {
		match self {
			Self::Exactly(n) => count == n,
			Self::AtLeast(n) => count >= n,
			Self::Range(min, max) => count >= min && count <= max,
		}
	}
}
// endregion:	--- ChildExpectation

// region:		--- Behavior
/// The algorithm of a tree node.
///
/// Implementations keep only their own cursors and counters; identity,
/// status and children live in the surrounding
/// [`TreeNode`](crate::tree::TreeNode).
#[async_trait::async_trait]
pub trait Behavior: Send + Sync {
	/// The configuration schema this behavior advertises.
	#[must_use]
	fn provided_ports() -> PortList
	where
		Self: Sized,
	{
		PortList::default()
	}

	/// Override of the child count rule implied by the behavior kind.
	#[must_use]
	fn expected_children() -> Option<ChildExpectation>
	where
		Self: Sized,
	{
		None
	}

	/// Reset the internal cursors when the behavior gets halted.
	/// # Errors
	fn on_halt(&mut self) -> Result<(), error::Error> {
		Ok(())
	}

	/// Reset to pristine state. Defaults to [`Behavior::on_halt`];
	/// behaviors with memory surviving a halt override this.
	/// # Errors
	fn on_reset(&mut self) -> Result<(), error::Error> {
		self.on_halt()
	}

	/// Called once at the first tick of an activation.
	/// # Errors
	async fn on_start(
		&mut self,
		data: &mut NodeData,
		children: &mut TreeNodeList,
		ctx: &mut TickContext,
	) -> Result<(), error::Error> {
		let _ = (data, children, ctx);
		Ok(())
	}

	/// Advance the behavior by one bounded step.
	/// # Errors
	async fn tick(&mut self, data: &mut NodeData, children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult;
}
// endregion:	--- Behavior

// region:		--- BehaviorStatic
/// Static creation information of a behavior type.
/// Usually provided by one of the derive macros.
pub trait BehaviorStatic {
	/// The structural kind.
	fn kind() -> BehaviorKind
	where
		Self: Sized;

	/// The function creating a default initialized instance.
	fn creation_fn() -> Box<BehaviorCreationFn>
	where
		Self: Sized;
}
// endregion:	--- BehaviorStatic

// region:		--- helper
/// Build the [`BehaviorDescription`] of a behavior type registered under
/// the given name.
#[must_use]
pub fn behavior_description_of<T>(name: &str) -> BehaviorDescription
where
	T: Behavior + BehaviorStatic,
{
	BehaviorDescription::new(
		name,
		core::any::type_name::<T>(),
		T::kind(),
		T::provided_ports(),
		T::expected_children(),
	)
}
// endregion:	--- helper

// region:		--- BehaviorExecution
/// Object safe plumbing of a behavior.
/// Usually provided by one of the derive macros.
pub trait BehaviorExecution: Behavior {
	/// Access to the concrete type.
	fn as_any(&self) -> &dyn Any;
	/// Mutable access to the concrete type.
	fn as_any_mut(&mut self) -> &mut dyn Any;
	/// Clone the behavior including its configuration.
	fn clone_boxed(&self) -> BehaviorPtr;
	/// The structural kind.
	fn static_kind(&self) -> BehaviorKind;
	/// The advertised ports.
	fn static_provided_ports(&self) -> PortList;
}
// endregion:	--- BehaviorExecution
