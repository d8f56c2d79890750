// Copyright © 2025 Stephan Kunz

//! Tests the [`Timeout`](ticktree::behavior::decorator::Timeout) behavior

use std::time::Instant;

use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn expired_deadline_halts_the_child() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Timeout", "root")
		.with_config("msec", 50)
		.with_child(NodeSpec::new("AlwaysRunning", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let started = Instant::now();
	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Failure);
	assert!(started.elapsed().as_millis() >= 50);

	// the endlessly running child has been halted
	let child_state = engine.tree().find("child").map(ticktree::TreeNode::state);
	assert_eq!(child_state, Some(Idle));
	Ok(())
}

#[tokio::test]
async fn fast_child_is_unaffected() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Timeout", "root")
		.with_config("msec", 10_000)
		.with_child(NodeSpec::new("AlwaysSuccess", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Success);
	Ok(())
}
