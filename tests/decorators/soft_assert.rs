// Copyright © 2025 Stephan Kunz

//! Tests the [`SoftAssert`](ticktree::behavior::decorator::SoftAssert) behavior

use ticktree::{BehaviorState::*, behavior::decorator::SoftAssert, prelude::*};

fn failures(tree: &BehaviorTree, id: &str) -> Vec<String> {
	tree.find(id)
		.and_then(|node| node.behavior().as_any().downcast_ref::<SoftAssert>())
		.map_or_else(Vec::new, |behavior| {
			behavior.failures().iter().map(|entry| entry.to_string()).collect()
		})
}

#[tokio::test]
async fn failures_are_recorded_and_converted() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("Sequence", "root").with_children([
		NodeSpec::new("SoftAssert", "assert")
			.with_child(NodeSpec::new("AlwaysFailure", "fragile")),
		NodeSpec::new("AlwaysSuccess", "after"),
	]);
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(factory.build(&spec)?, config);
	let blackboard = Blackboard::default();

	// the failing child does not stop the sequence
	assert_eq!(engine.tick(&blackboard).await?, Success);

	let recorded = failures(engine.tree(), "assert");
	assert_eq!(recorded.len(), 1);
	assert!(recorded[0].contains("fragile"));
	Ok(())
}

#[tokio::test]
async fn reset_clears_the_record() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("SoftAssert", "assert").with_child(NodeSpec::new("AlwaysFailure", "fragile"));
	let config = EngineConfig {
		auto_reset: false,
		..Default::default()
	};
	let mut engine = TickEngine::with_config(factory.build(&spec)?, config);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(failures(engine.tree(), "assert").len(), 1);

	engine.reset();
	assert!(failures(engine.tree(), "assert").is_empty());
	Ok(())
}

#[tokio::test]
async fn successful_children_leave_no_record() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("SoftAssert", "assert").with_child(NodeSpec::new("AlwaysSuccess", "stable"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert!(failures(engine.tree(), "assert").is_empty());
	Ok(())
}
