// Copyright © 2025 Stephan Kunz
//! Built-in `Action` behaviors of [`ticktree`](crate).

mod log_message;
mod set_blackboard;
mod sleep;
mod unset_blackboard;

// flatten
pub use log_message::LogMessage;
pub use set_blackboard::SetBlackboard;
pub use sleep::Sleep;
pub use unset_blackboard::UnsetBlackboard;
