// Copyright © 2025 Stephan Kunz

//! Tests the [`Retry`](ticktree::behavior::decorator::Retry) behavior

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn retries_until_success() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Flaky", vec![Failure, Failure, Success])?;

	let spec = NodeSpec::new("Retry", "root")
		.with_config("num_attempts", 5)
		.with_child(NodeSpec::new("Flaky", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Success);
	assert_eq!(mock_ticks(engine.tree(), "child"), 3);
	Ok(())
}

#[tokio::test]
async fn gives_up_after_the_configured_attempts() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Retry", "root")
		.with_config("num_attempts", 2)
		.with_child(NodeSpec::new("AlwaysFailure", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Failure);
	assert_eq!(mock_ticks(engine.tree(), "child"), 2);
	Ok(())
}
