// Copyright © 2025 Stephan Kunz

//! Tests the [`RunOnce`](ticktree::behavior::decorator::RunOnce) behavior

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn child_is_ticked_exactly_once() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Flaky", vec![Failure, Success])?;

	let spec = NodeSpec::new("RunOnce", "root").with_child(NodeSpec::new("Flaky", "child"));
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(factory.build(&spec)?, config);
	let blackboard = Blackboard::default();

	// the first activation runs the child and remembers its failure
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	// later activations report the memory without re-ticking
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "child"), 1);
	Ok(())
}

#[tokio::test]
async fn reset_forgets_the_memory() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Flaky", vec![Failure, Success])?;

	let spec = NodeSpec::new("RunOnce", "root").with_child(NodeSpec::new("Flaky", "child"));
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(factory.build(&spec)?, config);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	engine.reset();
	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "child"), 2);
	Ok(())
}
