// Copyright © 2025 Stephan Kunz

//! Tests the [`MemorySequence`](ticktree::behavior::control::MemorySequence) behavior

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

fn flaky_tree() -> Result<BehaviorTree, Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Step", vec![Success])?;
	register_scripted(&mut factory, "Flaky", vec![Failure, Success])?;

	let spec = NodeSpec::new("MemorySequence", "root").with_children([
		NodeSpec::new("Step", "step1"),
		NodeSpec::new("Step", "step2"),
		NodeSpec::new("Flaky", "flaky"),
	]);
	factory.build(&spec).map_err(Error::from)
}

#[tokio::test]
async fn succeeded_children_are_not_retried() -> Result<(), Error> {
	let tree = flaky_tree()?;
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(tree, config);
	let blackboard = Blackboard::default();

	// first activation fails at the third child
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "step1"), 1);
	assert_eq!(mock_ticks(engine.tree(), "step2"), 1);
	assert_eq!(mock_ticks(engine.tree(), "flaky"), 1);

	// the retry skips the already succeeded children entirely
	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "step1"), 1);
	assert_eq!(mock_ticks(engine.tree(), "step2"), 1);
	assert_eq!(mock_ticks(engine.tree(), "flaky"), 2);
	Ok(())
}

#[tokio::test]
async fn halt_keeps_the_memory() -> Result<(), Error> {
	let tree = flaky_tree()?;
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(tree, config);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	engine.halt();

	// resume after interruption: succeeded children stay skipped
	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "step1"), 1);
	assert_eq!(mock_ticks(engine.tree(), "step2"), 1);
	Ok(())
}

#[tokio::test]
async fn reset_clears_the_memory() -> Result<(), Error> {
	let tree = flaky_tree()?;
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(tree, config);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	engine.reset();

	// after a reset everything runs again
	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "step1"), 2);
	assert_eq!(mock_ticks(engine.tree(), "step2"), 2);
	Ok(())
}
