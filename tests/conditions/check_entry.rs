// Copyright © 2025 Stephan Kunz

//! Tests the [`CheckEntry`](ticktree::behavior::condition::CheckEntry) behavior

use std::collections::BTreeMap;

use ticktree::{BehaviorState::*, prelude::*};

#[tokio::test]
async fn compares_against_the_expected_value() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("CheckEntry", "check")
		.with_config("key", "mode")
		.with_config("expected", "fast");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	blackboard.set("mode", Value::from("slow"));
	assert_eq!(engine.tick(&blackboard).await?, Failure);

	blackboard.set("mode", Value::from("fast"));
	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}

#[tokio::test]
async fn falls_back_to_test_fixtures() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("CheckEntry", "check")
		.with_config("key", "simulated")
		.with_config("expected", 7);
	let mut engine = TickEngine::new(factory.build(&spec)?);

	let mut fixtures = BTreeMap::new();
	fixtures.insert("simulated".into(), Value::Int(7));
	engine.set_test_data(fixtures);

	let blackboard = Blackboard::default();
	assert_eq!(engine.tick(&blackboard).await?, Success);

	// a real blackboard entry shadows the fixture
	blackboard.set("simulated", Value::Int(8));
	assert_eq!(engine.tick(&blackboard).await?, Failure);
	Ok(())
}
