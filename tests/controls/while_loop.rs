// Copyright © 2025 Stephan Kunz

//! Tests the [`While`](ticktree::behavior::control::While) behavior

use crate::utilities::{ChangeStateAfter, change_state_ticks, mock_ticks};
use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn loops_until_condition_fails() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	// two successful checks, then the loop ends
	ChangeStateAfter::register(&mut factory, "Twice", Success, Failure, 2)?;

	let spec = NodeSpec::new("While", "root").with_children([
		NodeSpec::new("Twice", "condition"),
		NodeSpec::new("AlwaysSuccess", "body"),
	]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(change_state_ticks(engine.tree(), "condition"), 3);
	assert_eq!(mock_ticks(engine.tree(), "body"), 2);
	Ok(())
}

#[tokio::test]
async fn failing_body_fails_the_loop() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("While", "root").with_children([
		NodeSpec::new("AlwaysSuccess", "condition"),
		NodeSpec::new("AlwaysFailure", "body"),
	]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "body"), 1);
	Ok(())
}

#[tokio::test]
async fn iteration_limit_fails_the_loop() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("While", "root")
		.with_config("max_iterations", 5)
		.with_children([
			NodeSpec::new("AlwaysSuccess", "condition"),
			NodeSpec::new("AlwaysSuccess", "body"),
		]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "body"), 5);
	Ok(())
}

#[tokio::test]
async fn condition_is_not_rechecked_while_body_runs() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	ChangeStateAfter::register(&mut factory, "Once", Success, Failure, 1)?;
	ChangeStateAfter::register(&mut factory, "SlowBody", Running, Success, 1)?;

	let spec = NodeSpec::new("While", "root").with_children([
		NodeSpec::new("Once", "condition"),
		NodeSpec::new("SlowBody", "body"),
	]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	// first tick enters the body which stays running
	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(change_state_ticks(engine.tree(), "condition"), 1);

	// the body completes, the condition now fails and ends the loop
	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(change_state_ticks(engine.tree(), "condition"), 2);
	Ok(())
}
