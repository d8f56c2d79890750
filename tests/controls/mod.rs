// Copyright © 2025 Stephan Kunz

//! Tests of the control behaviors

mod conditional;
mod for_each;
mod memory_sequence;
mod parallel;
mod selector;
mod sequence;
mod sub_tree;
mod while_loop;
