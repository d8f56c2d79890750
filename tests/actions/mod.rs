// Copyright © 2025 Stephan Kunz

//! Tests of the action behaviors

mod blackboard_actions;
mod log_message;
mod sleep;
