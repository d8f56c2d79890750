// Copyright © 2025 Stephan Kunz

//! Tests the [`Inverter`](ticktree::behavior::decorator::Inverter) behavior

use crate::utilities::ChangeStateAfter;
use rstest::rstest;
use ticktree::{BehaviorState::*, prelude::*};

#[rstest]
#[case(Success, Failure)]
#[case(Failure, Success)]
#[case(Running, Running)]
#[case(Skipped, Skipped)]
#[tokio::test]
async fn inverts_terminal_states(
	#[case] input: BehaviorState,
	#[case] expected: BehaviorState,
) -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	ChangeStateAfter::register(&mut factory, "Child", Running, input, 0)?;

	let spec = NodeSpec::new("Inverter", "root").with_child(NodeSpec::new("Child", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, expected);
	Ok(())
}
