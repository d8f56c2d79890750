// Copyright © 2025 Stephan Kunz

//! Tests the [`SetBlackboard`](ticktree::behavior::action::SetBlackboard) and
//! [`UnsetBlackboard`](ticktree::behavior::action::UnsetBlackboard) behaviors

use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn set_writes_a_literal() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("SetBlackboard", "write")
		.with_config("key", "answer")
		.with_config("value", 42);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(blackboard.get("answer"), Some(Value::Int(42)));
	Ok(())
}

#[tokio::test]
async fn set_follows_a_pointer() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	// the value port remaps to another blackboard entry
	let spec = NodeSpec::new("SetBlackboard", "copy")
		.with_config("key", "target")
		.with_config("value", "{source}");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();
	blackboard.set("source", Value::from("payload"));

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(blackboard.get("target"), Some(Value::from("payload")));
	Ok(())
}

#[tokio::test]
async fn unset_removes_an_entry() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("UnsetBlackboard", "erase").with_config("key", "obsolete");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();
	blackboard.set("obsolete", Value::Bool(true));

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(blackboard.get("obsolete"), None);

	// removing a missing entry succeeds as well
	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}
