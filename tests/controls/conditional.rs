// Copyright © 2025 Stephan Kunz

//! Tests the [`Conditional`](ticktree::behavior::control::Conditional) behavior

use crate::utilities::{ChangeStateAfter, change_state_ticks, mock_ticks, register_scripted};
use ticktree::{BehaviorState::*, behavior::MockBehavior, prelude::*};

fn conditional_tree(
	condition: BehaviorState,
	then_state: BehaviorState,
	else_state: Option<BehaviorState>,
) -> Result<BehaviorTree, Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Cond", vec![condition])?;
	register_scripted(&mut factory, "Then", vec![then_state])?;

	let mut spec = NodeSpec::new("Conditional", "root")
		.with_child(NodeSpec::new("Cond", "condition"))
		.with_child(NodeSpec::new("Then", "then"));
	if let Some(state) = else_state {
		register_scripted(&mut factory, "Else", vec![state])?;
		spec = spec.with_child(NodeSpec::new("Else", "else"));
	}
	factory.build(&spec).map_err(Error::from)
}

#[tokio::test]
async fn then_branch_result_is_reported() -> Result<(), Error> {
	// condition success with a failing then branch reports failure,
	// the else branch is never entered
	let tree = conditional_tree(Success, Failure, Some(Success))?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	assert_eq!(mock_ticks(engine.tree(), "then"), 1);
	assert_eq!(mock_ticks(engine.tree(), "else"), 0);
	Ok(())
}

#[tokio::test]
async fn else_branch_on_failing_condition() -> Result<(), Error> {
	let tree = conditional_tree(Failure, Failure, Some(Success))?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "then"), 0);
	assert_eq!(mock_ticks(engine.tree(), "else"), 1);
	Ok(())
}

#[tokio::test]
async fn missing_else_fails() -> Result<(), Error> {
	let tree = conditional_tree(Failure, Success, None)?;
	let mut engine = TickEngine::new(tree);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Failure);
	Ok(())
}

#[tokio::test]
async fn condition_is_latched_while_branch_runs() -> Result<(), Error> {
	let mut factory = BehaviorFactory::with_core_behaviors()?;
	register_scripted(&mut factory, "Cond", vec![Success])?;
	ChangeStateAfter::register(&mut factory, "Slow", Running, Success, 2)?;

	let spec = NodeSpec::new("Conditional", "root")
		.with_child(NodeSpec::new("Cond", "condition"))
		.with_child(NodeSpec::new("Slow", "then"));
	let mut engine = TickEngine::new(factory.build(&spec)?);
	let blackboard = Blackboard::default();

	assert_eq!(engine.tick(&blackboard).await?, Running);

	// even a flipped condition must not abort the chosen branch
	if let Some(behavior) = engine
		.tree_mut()
		.find_mut("condition")
		.and_then(|node| node.behavior_mut().as_any_mut().downcast_mut::<MockBehavior>())
	{
		behavior.set_state(Failure);
	}

	assert_eq!(engine.tick(&blackboard).await?, Running);
	assert_eq!(engine.tick(&blackboard).await?, Success);
	assert_eq!(mock_ticks(engine.tree(), "condition"), 1);
	assert_eq!(change_state_ticks(engine.tree(), "then"), 3);
	Ok(())
}
