// Copyright © 2025 Stephan Kunz

//! Tests the [`EntryExists`](ticktree::behavior::condition::EntryExists) behavior

use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn succeeds_for_visible_entries() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("EntryExists", "check").with_config("key", "present");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);

	blackboard.set("present", Value::Bool(true));
	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}

#[tokio::test]
async fn sees_entries_of_parent_scopes() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("EntryExists", "check").with_config("key", "inherited");
	let mut engine = TickEngine::new(factory.build(&spec)?);

	let parent = Blackboard::default();
	parent.set("inherited", Value::Int(1));
	let child = parent.create_scope("nested");

	assert_eq!(engine.tick(&child).await?, Success);
	Ok(())
}
