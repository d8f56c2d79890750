// Copyright © 2025 Stephan Kunz

//! Tests the [`Sleep`](ticktree::behavior::action::Sleep) behavior

use std::time::Instant;

use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn sleeps_without_blocking_the_tick() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Sleep", "nap").with_config("msec", 40);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	// the first tick starts the timer and suspends
	assert_eq!(engine.tick(&blackboard).await?, Running);

	let started = Instant::now();
	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Success);
	assert!(started.elapsed().as_millis() >= 20);

	// the drained operation has been cleaned up
	assert!(engine.running_ops().is_empty());
	Ok(())
}

#[tokio::test]
async fn halt_clears_the_pending_operation() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Sleep", "nap").with_config("msec", 60_000);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.running_ops().len(), 1);

	engine.halt();
	assert!(engine.running_ops().is_empty());

	// the halted node starts a fresh activation on the next tick
	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.running_ops().len(), 1);
	Ok(())
}
