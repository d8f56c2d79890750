// Copyright © 2025 Stephan Kunz

//! Tests the [`Selector`](ticktree::behavior::control::Selector) behavior

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

	let spec = NodeSpec::new("Selector", "root").with_children([
		NodeSpec::new("Behavior1", "step1"),
		NodeSpec::new("Behavior2", "step2"),
		NodeSpec::new("Behavior3", "step3"),
	]);
	factory.build(&spec).map_err(Error::from)
}

#[rstest]
#[case(Failure, Failure, Failure, Failure)]
#[case(Failure, Skipped, Failure, Failure)]
#[case(Skipped, Skipped, Skipped, Skipped)]
#[case(Success, Failure, Failure, Success)]
#[case(Failure, Success, Failure, Success)]
#[case(Failure, Failure, Success, Success)]
#[case(Running, Failure, Failure, Running)]
#[case(Failure, Running, Failure, Running)]
#[tokio::test]
async fn simple_selector(
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
async fn success_stops_execution() -> Result<(), Error> {
	// children after the first success are not ticked
	let tree = three_children(Failure, Success, Failure)?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await?;
	assert_eq!(result, Success);
	assert_eq!(change_state_ticks(engine.tree(), "step1"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "step2"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "step3"), 0);
	Ok(())
}

#[tokio::test]
async fn all_failing_children_are_ticked() -> Result<(), Error> {
	let tree = three_children(Failure, Failure, Success)?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await?;
	assert_eq!(result, Success);
	assert_eq!(change_state_ticks(engine.tree(), "step1"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "step2"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "step3"), 1);
	Ok(())
}

#[tokio::test]
async fn empty_selector_fails() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;
	let tree = factory.build(&NodeSpec::new("Selector", "root"))?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	Ok(())
}
