// Copyright © 2025 Stephan Kunz

//! Tests the [`Parallel`](ticktree::behavior::control::Parallel) behavior

use crate::utilities::{ChangeStateAfter, change_state_ticks};
use ticktree::{BehaviorState::*, prelude::*};

fn parallel_tree(strategy: &str) -> Result<BehaviorTree, Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	// succeeds on the third tick
	ChangeStateAfter::register(&mut factory, "SlowSuccess", Running, Success, 2)?;
	// fails immediately
	ChangeStateAfter::register(&mut factory, "FastFailure", Running, Failure, 0)?;

	let spec = NodeSpec::new("Parallel", "root")
		.with_config("strategy", strategy)
		.with_children([
			NodeSpec::new("SlowSuccess", "slow"),
			NodeSpec::new("FastFailure", "fast"),
		]);
	factory.build(&spec).map_err(Error::from)
}

#[tokio::test]
async fn any_waits_for_all_children() -> Result<(), Error> {
	let mut engine = TickEngine::new(parallel_tree("any")?);
	let blackboard = Blackboard::default();

	// the fast child failed on tick one, but the parallel stays running
	// until every child is terminal
	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Success);

	// the already failed child is not re-ticked
	assert_eq!(change_state_ticks(engine.tree(), "fast"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "slow"), 3);
	Ok(())
}

#[tokio::test]
async fn strict_fails_on_any_failure() -> Result<(), Error> {
	let mut engine = TickEngine::new(parallel_tree("strict")?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Running);
	// one child succeeded, one failed: strict folds to failure,
	// but only after every child is terminal
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	Ok(())
}

#[tokio::test]
async fn strict_succeeds_when_all_succeed() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	ChangeStateAfter::register(&mut factory, "SlowSuccess", Running, Success, 1)?;

	let spec = NodeSpec::new("Parallel", "root").with_children([
		NodeSpec::new("AlwaysSuccess", "first"),
		NodeSpec::new("SlowSuccess", "second"),
	]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}

#[tokio::test]
async fn unknown_strategy_is_a_configuration_error() -> Result<(), Error> {
	let mut engine = TickEngine::new(parallel_tree("magic")?);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await;
	assert!(result.is_err());
	Ok(())
}
