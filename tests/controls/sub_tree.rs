// Copyright © 2025 Stephan Kunz

//! Tests the [`SubTree`](ticktree::behavior::control::SubTree) behavior

use ticktree::{BehaviorState::*, prelude::*};

fn factory_with_child_tree() -> Result<BehaviorFactory, Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	let child = NodeSpec::new("Sequence", "child_root").with_children([
		NodeSpec::new("SetBlackboard", "write_local")
			.with_config("key", "local_key")
			.with_config("value", "local_value"),
		NodeSpec::new("EntryExists", "check_local").with_config("key", "local_key"),
	]);
	factory.register_tree("child", &child)?;
	Ok(factory)
}

#[tokio::test]
async fn executes_the_registered_template() -> Result<(), Error> {
	let factory = factory_with_child_tree()?;

	let spec = NodeSpec::new("Sequence", "root")
		.with_child(NodeSpec::new("SubTree", "sub").with_config("tree_id", "child"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}

#[tokio::test]
async fn subtree_scope_is_isolated() -> Result<(), Error> {
	let factory = factory_with_child_tree()?;

	let spec = NodeSpec::new("SubTree", "sub").with_config("tree_id", "child");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);

	// the write of the subtree is invisible to the parent scope but
	// present in the dedicated child scope
	assert_eq!(blackboard.get("local_key"), None);
	let scope = blackboard.scope("subtree_sub");
	assert!(scope.is_some());
	assert_eq!(
		scope.and_then(|scope| scope.get("local_key")),
		Some(Value::from("local_value"))
	);
	Ok(())
}

#[tokio::test]
async fn subtree_reads_fall_through_to_parent() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	let child =
		NodeSpec::new("EntryExists", "check_parent").with_config("key", "parent_key");
	factory.register_tree("reader", &child)?;

	let spec = NodeSpec::new("SubTree", "sub").with_config("tree_id", "reader");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();
	blackboard.set("parent_key", Value::Bool(true));

	assert_eq!(engine.tick(&blackboard).await?, Success);
	Ok(())
}

#[tokio::test]
async fn instances_are_independent_of_the_template() -> Result<(), Error> {
	let factory = factory_with_child_tree()?;
	let registry = factory.tree_registry();

	let first = registry.instantiate("child")?;
	let second = registry.instantiate("child")?;
	assert_eq!(first.state(), Idle);
	assert_eq!(second.state(), Idle);
	assert_eq!(first.size(), second.size());
	Ok(())
}

#[tokio::test]
async fn missing_template_is_a_configuration_error() -> Result<(), Error> {
	let factory = BehaviorFactory::with_core_behaviors()?;

	let spec = NodeSpec::new("SubTree", "sub").with_config("tree_id", "missing");
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	let result = engine.tick(&blackboard).await;
	assert!(result.is_err());
	Ok(())
}
