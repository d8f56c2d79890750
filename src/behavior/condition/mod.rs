// Copyright © 2025 Stephan Kunz
//! Built-in `Condition` behaviors of [`ticktree`](crate).

mod check_entry;
mod entry_exists;

// flatten
pub use check_entry::CheckEntry;
pub use entry_exists::EntryExists;
