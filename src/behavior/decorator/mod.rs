// Copyright © 2025 Stephan Kunz
//! Built-in `Decorator` behaviors of [`ticktree`](crate).

mod delay;
mod force_state;
mod inverter;
mod keep_running_until_failure;
mod precondition;
mod repeat;
mod retry;
mod run_once;
mod soft_assert;
mod timeout;

// flatten
pub use delay::Delay;
pub use force_state::{ForceFailure, ForceSuccess};
pub use inverter::Inverter;
pub use keep_running_until_failure::KeepRunningUntilFailure;
pub use precondition::Precondition;
pub use repeat::Repeat;
pub use retry::Retry;
pub use run_once::RunOnce;
pub use soft_assert::SoftAssert;
pub use timeout::Timeout;
