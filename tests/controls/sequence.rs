// Copyright © 2025 Stephan Kunz

//! Tests the [`Sequence`](ticktree::behavior::control::Sequence) behavior

use crate::utilities::{ChangeStateAfter, change_state_ticks};
use rstest::rstest;
use ticktree::{BehaviorState::*, prelude::*};

fn three_children(
	input1: BehaviorState,
	input2: BehaviorState,
	input3: BehaviorState,
) -> Result<BehaviorTree, Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	ChangeStateAfter::register(&mut factory, "Behavior1", Running, input1, 0)?;
	ChangeStateAfter::register(&mut factory, "Behavior2", Running, input2, 0)?;
	ChangeStateAfter::register(&mut factory, "Behavior3", Running, input3, 0)?;

	let spec = NodeSpec::new("Sequence", "root").with_children([
		NodeSpec::new("Behavior1", "step1"),
		NodeSpec::new("Behavior2", "step2"),
		NodeSpec::new("Behavior3", "step3"),
	]);
	factory.build(&spec).map_err(Error::from)
}

#[rstest]
#[case(Success, Success, Success, Success)]
#[case(Success, Skipped, Success, Success)]
#[case(Skipped, Skipped, Success, Success)]
#[case(Skipped, Skipped, Skipped, Skipped)]
#[case(Failure, Success, Success, Failure)]
#[case(Success, Failure, Success, Failure)]
#[case(Success, Success, Failure, Failure)]
#[case(Running, Success, Success, Running)]
#[case(Success, Running, Success, Running)]
#[tokio::test]
async fn simple_sequence(
	#[case] input1: BehaviorState,
	#[case] input2: BehaviorState,
	#[case] input3: BehaviorState,
	#[case] expected: BehaviorState,
) -> Result<(), Error> {
	let tree = three_children(input1, input2, input3)?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await?;
	assert_eq!(result, expected);
	Ok(())
}

#[tokio::test]
async fn failure_stops_execution() -> Result<(), Error> {
	// children after the first failure are not ticked
	let tree = three_children(Success, Failure, Success)?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await?;
	assert_eq!(result, Failure);
	assert_eq!(change_state_ticks(engine.tree(), "step1"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "step2"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "step3"), 0);
	Ok(())
}

#[tokio::test]
async fn empty_sequence_succeeds() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;
	let tree = factory.build(&NodeSpec::new("Sequence", "root"))?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}

#[tokio::test]
async fn resumes_at_running_child() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	ChangeStateAfter::register(&mut factory, "Fast", Running, Success, 0)?;
	ChangeStateAfter::register(&mut factory, "Slow", Running, Success, 2)?;

	let spec = NodeSpec::new("Sequence", "root").with_children([
		NodeSpec::new("Fast", "fast"),
		NodeSpec::new("Slow", "slow"),
	]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Success);
	// the already succeeded first child is not re-ticked while running
	assert_eq!(change_state_ticks(engine.tree(), "fast"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "slow"), 3);
	Ok(())
}
