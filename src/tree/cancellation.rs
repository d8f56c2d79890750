// Copyright © 2025 Stephan Kunz

//! Cooperative [`CancellationToken`] implementation.

// region:      --- modules
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::behavior::error::Error as BehaviorError;
// endregion:   --- modules

// region:		--- CancellationToken
/// A one-shot cancellation signal observable from every level of a tree.
///
/// Cancellation is cooperative: behaviors call
/// [`check`](CancellationToken::check) at their checkpoints, in-tick waits
/// race against [`cancelled`](CancellationToken::cancelled).
#[derive(Clone, Debug)]
pub struct CancellationToken {
	flag: Arc<AtomicBool>,
	sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
	fn default() -> Self {
		let (sender, _) = watch::channel(false);
		Self {
			flag: Arc::new(AtomicBool::new(false)),
			sender: Arc::new(sender),
		}
	}
}

impl CancellationToken {
	/// Constructor.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Signal the token. Irreversible.
	pub fn cancel(&self) {
		self.flag.store(true, Ordering::SeqCst);
		let _ = self.sender.send(true);
	}

	/// Whether the token has been signalled.
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.flag.load(Ordering::SeqCst)
	}

	/// Fail with the cancellation error kind when the token is signalled.
	/// # Errors
	/// - [`BehaviorError::Cancelled`] once the token has been signalled.
	pub fn check(&self) -> Result<(), BehaviorError> {
		if self.is_cancelled() {
			Err(BehaviorError::Cancelled)
		} else {
			Ok(())
		}
	}

	/// Wait until the token is signalled.
	pub async fn cancelled(&self) {
		let mut receiver = self.sender.subscribe();
		while !self.is_cancelled() {
			if receiver.changed().await.is_err() {
				return;
			}
		}
	}
}
// endregion:	--- CancellationToken
