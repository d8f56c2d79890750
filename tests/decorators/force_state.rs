// Copyright © 2025 Stephan Kunz

//! Tests the [`ForceSuccess`](ticktree::behavior::decorator::ForceSuccess) and
//! [`ForceFailure`](ticktree::behavior::decorator::ForceFailure) behaviors

use crate::utilities::ChangeStateAfter;
use rstest::rstest;
use ticktree::{BehaviorState::*, prelude::*};

#[rstest]
#[case("ForceSuccess", Success, Success)]
#[case("ForceSuccess", Failure, Success)]
#[case("ForceSuccess", Running, Running)]
#[case("ForceFailure", Success, Failure)]
#[case("ForceFailure", Failure, Failure)]
#[case("ForceFailure", Running, Running)]
#[tokio::test]
async fn forces_terminal_states(
	#[case] decorator: &str,
	#[case] input: BehaviorState,
	#[case] expected: BehaviorState,
) -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	ChangeStateAfter::register(&mut factory, "Child", Running, input, 0)?;

	let spec = NodeSpec::new(decorator, "root").with_child(NodeSpec::new("Child", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, expected);
	Ok(())
}
