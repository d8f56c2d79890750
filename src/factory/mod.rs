// Copyright © 2025 Stephan Kunz

//! [`ticktree`](crate) factory module.

pub mod error;
#[allow(clippy::module_inception)]
mod factory;
mod registry;

// flatten
pub use factory::{BehaviorFactory, NodeSpec};
pub use registry::BehaviorRegistry;
