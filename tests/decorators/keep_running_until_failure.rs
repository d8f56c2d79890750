// Copyright © 2025 Stephan Kunz

//! Tests the [`KeepRunningUntilFailure`](ticktree::behavior::decorator::KeepRunningUntilFailure) behavior

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn success_is_converted_into_running() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Flaky", vec![Success, Success, Failure])?;

	let spec =
		NodeSpec::new("KeepRunningUntilFailure", "root").with_child(NodeSpec::new("Flaky", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "child"), 3);
	Ok(())
}
