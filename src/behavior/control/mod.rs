// Copyright © 2025 Stephan Kunz
//! Built-in `Control` behaviors of [`ticktree`](crate).

mod conditional;
mod for_each;
mod memory_sequence;
mod parallel;
mod reactive_sequence;
mod recovery;
mod selector;
mod sequence;
mod sub_tree;
mod while_loop;

// flatten
pub use conditional::Conditional;
pub use for_each::ForEach;
pub use memory_sequence::MemorySequence;
pub use parallel::Parallel;
pub use reactive_sequence::ReactiveSequence;
pub use recovery::Recovery;
pub use selector::Selector;
pub use sequence::Sequence;
pub use sub_tree::SubTree;
pub use while_loop::While;
