// Copyright © 2025 Stephan Kunz

//! Tests the [`Precondition`](ticktree::behavior::decorator::Precondition) behavior

use std::collections::BTreeMap;

use crate::utilities::{mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, prelude::*};

fn entry(resolver: bool, required: bool) -> Value {
	let mut map = BTreeMap::new();
	map.insert("resolver".into(), Value::Bool(resolver));
	map.insert("required".into(), Value::Bool(required));
	Value::Map(map)
}

#[tokio::test]
async fn passing_gate_runs_the_child() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Precondition", "root")
		.with_config("entries", Value::List(vec![entry(false, true)]))
		.with_children([
			NodeSpec::new("AlwaysSuccess", "condition"),
			NodeSpec::new("AlwaysSuccess", "guarded"),
		]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "guarded"), 1);
	Ok(())
}

#[tokio::test]
async fn failing_required_gate_blocks_the_child() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Precondition", "root")
		.with_config("entries", Value::List(vec![entry(false, true)]))
		.with_children([
			NodeSpec::new("AlwaysFailure", "condition"),
			NodeSpec::new("AlwaysSuccess", "guarded"),
		]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "guarded"), 0);
	Ok(())
}

#[tokio::test]
async fn failing_optional_gate_is_passed_over() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Precondition", "root")
		.with_config("entries", Value::List(vec![entry(false, false)]))
		.with_children([
			NodeSpec::new("AlwaysFailure", "condition"),
			NodeSpec::new("AlwaysSuccess", "guarded"),
		]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "guarded"), 1);
	Ok(())
}

#[tokio::test]
async fn resolver_repairs_a_failing_condition() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "FlakyCondition", vec![Failure, Success])?;

	let spec = NodeSpec::new("Precondition", "root")
		.with_config("entries", Value::List(vec![entry(true, true)]))
		.with_children([
			NodeSpec::new("FlakyCondition", "condition"),
			NodeSpec::new("AlwaysSuccess", "resolver"),
			NodeSpec::new("AlwaysSuccess", "guarded"),
		]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "condition"), 2);
	assert_eq!(mock_ticks(engine.tree(), "resolver"), 1);
	assert_eq!(mock_ticks(engine.tree(), "guarded"), 1);
	Ok(())
}

#[tokio::test]
async fn wrong_entry_layout_is_a_configuration_error() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	// two entries described but only one condition child present
	let spec = NodeSpec::new("Precondition", "root")
		.with_config(
			"entries",
			Value::List(vec![entry(false, true), entry(false, true)]),
		)
		.with_children([
			NodeSpec::new("AlwaysSuccess", "condition"),
			NodeSpec::new("AlwaysSuccess", "guarded"),
		]);
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await;
	assert!(result.is_err());
	Ok(())
}
