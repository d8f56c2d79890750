// Copyright © 2025 Stephan Kunz

//! Tests the [`LogMessage`](ticktree::behavior::action::LogMessage) behavior

use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn logs_are_buffered_by_the_engine() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Sequence", "root").with_children([
		NodeSpec::new("LogMessage", "announce")
			.with_config("level", "warn")
			.with_config("message", "about to fail"),
		NodeSpec::new("AlwaysFailure", "broken"),
	]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let outcome = engine.tick_while_running(&blackboard).await?;
	assert_eq!(outcome.state, Failure);

	assert_eq!(outcome.logs.len(), 1);
	assert_eq!(outcome.logs[0].level.as_ref(), "warn");
	assert_eq!(outcome.logs[0].message.as_ref(), "about to fail");
	assert_eq!(outcome.logs[0].node_id.as_ref(), "announce");
	Ok(())
}
