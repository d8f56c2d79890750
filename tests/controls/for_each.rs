// Copyright © 2025 Stephan Kunz

//! Tests the [`ForEach`](ticktree::behavior::control::ForEach) behavior

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn iterates_the_whole_collection() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("ForEach", "root")
		.with_config("collection", "{numbers}")
		.with_config("variable", "current")
		.with_child(NodeSpec::new("AlwaysSuccess", "body"));
	let mut engine = TickEngine::new(factory.build(&spec)?);

	let blackboard = Blackboard::default();
	blackboard.set("numbers", Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "body"), 3);
	// the loop variable holds the last element
	assert_eq!(blackboard.get("current"), Some(Value::Int(3)));
	Ok(())
}

#[tokio::test]
async fn failing_body_stops_the_iteration() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Picky", vec![Success, Failure])?;

	let spec = NodeSpec::new("ForEach", "root")
		.with_config("collection", "{numbers}")
		.with_config("variable", "current")
		.with_child(NodeSpec::new("Picky", "body"));
	let mut engine = TickEngine::new(factory.build(&spec)?);

	let blackboard = Blackboard::default();
	blackboard.set("numbers", Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "body"), 2);
	assert_eq!(blackboard.get("current"), Some(Value::Int(2)));
	Ok(())
}

#[tokio::test]
async fn empty_collection_succeeds() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("ForEach", "root")
		.with_config("collection", "{numbers}")
		.with_config("variable", "current")
		.with_child(NodeSpec::new("AlwaysSuccess", "body"));
	let mut engine = TickEngine::new(factory.build(&spec)?);

	let blackboard = Blackboard::default();
	blackboard.set("numbers", Value::List(Vec::new()));

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "body"), 0);
	Ok(())
}

#[tokio::test]
async fn missing_collection_fails() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("ForEach", "root")
		.with_config("collection", "{numbers}")
		.with_config("variable", "current")
		.with_child(NodeSpec::new("AlwaysSuccess", "body"));
	let mut engine = TickEngine::new(factory.build(&spec)?);

	let blackboard = Blackboard::default();
	// nothing under "numbers": the node reports failure with an error record
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	let last_error = engine
		.tree()
		.find("root")
		.and_then(|node| node.data().last_error().cloned());
	assert!(last_error.is_some());
	Ok(())
}
