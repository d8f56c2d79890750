// Copyright © 2025 Stephan Kunz

//! Tests the [`Repeat`](ticktree::behavior::decorator::Repeat) behavior

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn repeats_a_successful_child() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Repeat", "root")
		.with_config("num_cycles", 3)
		.with_child(NodeSpec::new("AlwaysSuccess", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Success);
	assert_eq!(mock_ticks(engine.tree(), "child"), 3);
	Ok(())
}

#[tokio::test]
async fn child_failure_stops_the_cycles() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Flaky", vec![Success, Failure])?;

	let spec = NodeSpec::new("Repeat", "root")
		.with_config("num_cycles", 5)
		.with_child(NodeSpec::new("Flaky", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Failure);
	assert_eq!(mock_ticks(engine.tree(), "child"), 2);
	Ok(())
}
