// Copyright © 2025 Stephan Kunz

//! Tests of the condition behaviors

mod check_entry;
mod entry_exists;
