// Copyright © 2025 Stephan Kunz

//! Adaptive back-off between successive ticks of a run-to-completion call.

// region:      --- modules
use std::time::Duration;
// endregion:   --- modules

// region:		--- TickDelayMode
/// Selection of the delay behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickDelayMode {
	/// Adaptive: a burst of immediate ticks, then exponential delays
	/// capped at 16ms.
	#[default]
	Auto,
	/// The configured delay is used verbatim, including zero.
	Fixed(Duration),
}
// endregion:	--- TickDelayMode

// region:		--- TickDelayStrategy
/// Number of immediate ticks before the adaptive mode starts delaying.
const BURST_TICKS: u32 = 5;
/// Cap of the adaptive delay in milliseconds.
const MAX_DELAY_MS: u64 = 16;

/// Computes the delay before the next tick.
///
/// The engine resets the strategy whenever the root transitions away
/// from running, so every activation starts with the immediate burst.
#[derive(Debug, Default)]
pub struct TickDelayStrategy {
	mode: TickDelayMode,
	consecutive: u32,
}

impl TickDelayStrategy {
	/// Create a strategy with the given mode.
	#[must_use]
	pub const fn new(mode: TickDelayMode) -> Self {
		Self { mode, consecutive: 0 }
	}

	/// The delay to apply before the next tick.
	pub const fn next_delay(&mut self) -> Duration {
		match self.mode {
			TickDelayMode::Fixed(delay) => delay,
			TickDelayMode::Auto => {
				let tick = self.consecutive;
				self.consecutive = self.consecutive.saturating_add(1);
				if tick < BURST_TICKS {
					Duration::ZERO
				} else {
					let exponent = tick - BURST_TICKS;
					let millis = if exponent >= 4 { MAX_DELAY_MS } else { 1_u64 << exponent };
					Duration::from_millis(millis)
				}
			}
		}
	}

	/// Return to the first phase. A no-op in fixed mode.
	pub const fn reset(&mut self) {
		self.consecutive = 0;
	}
}
// endregion:	--- TickDelayStrategy
