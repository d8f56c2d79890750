// Copyright © 2025 Stephan Kunz
//! [`LogMessage`] behavior implementation.

// region:      --- modules
use crate::{
	self as ticktree, Action, LEVEL, MESSAGE,
	behavior::{Behavior, BehaviorResult, BehaviorState, NodeData},
	blackboard::ValueKind,
	input_port,
	port::PortList,
	port_list,
	tree::{TickContext, TreeNodeList},
};
// endregion:   --- modules

// region:      --- LogMessage
/// The `LogMessage` action emits a `Log` event with the configured level
/// and message, and mirrors it to `tracing`.
#[derive(Action, Clone, Debug, Default)]
pub struct LogMessage;

#[async_trait::async_trait]
impl Behavior for LogMessage {
	fn provided_ports() -> PortList {
		port_list![
			input_port!(ValueKind::Str, LEVEL, "info"),
			input_port!(ValueKind::Str, MESSAGE),
		]
	}

	async fn tick(&mut self, data: &mut NodeData, _children: &mut TreeNodeList, ctx: &mut TickContext) -> BehaviorResult {
		let level = data.input_str(ctx, LEVEL)?;
		let message = data.input_str(ctx, MESSAGE)?;

		match level.as_ref() {
			"error" => tracing::error!(node = data.id().as_ref(), "{message}"),
			"warn" => tracing::warn!(node = data.id().as_ref(), "{message}"),
			"debug" => tracing::debug!(node = data.id().as_ref(), "{message}"),
			"trace" => tracing::trace!(node = data.id().as_ref(), "{message}"),
			_ => tracing::info!(node = data.id().as_ref(), "{message}"),
		}
		ctx.emit_log(data, &level, &message);
		Ok(BehaviorState::Success)
	}
}
// endregion:   --- LogMessage
