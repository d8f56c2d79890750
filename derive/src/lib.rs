// Copyright © 2025 Stephan Kunz

//! Derive macros for `ticktree` behaviors.
//!
//! Each derive implements the mechanical plumbing traits (`BehaviorStatic`,
//! `BehaviorExecution`) for a behavior struct; the behavior algorithm itself
//! stays a hand-written `Behavior` implementation.

#[doc(hidden)]
extern crate proc_macro;

mod behavior;

use behavior::derive_behavior_struct;
use proc_macro::TokenStream;
use syn::DeriveInput;

/// Internal differentiation of the kinds of behaviors.
enum Kind {
	Action,
	Condition,
	Control,
	Decorator,
}

/// Derive macro for an `Action` type behavior.
#[proc_macro_derive(Action)]
pub fn derive_action(input: TokenStream) -> TokenStream {
	// Construct a representation of the Rust code
	let input: DeriveInput = syn::parse2(input.into()).expect("could not parse input");

	// Check type of input
	match &input.data {
		syn::Data::Struct(_struct) => derive_behavior_struct(&input, &Kind::Action).into(),
		syn::Data::Enum(_enum) => panic!("enums not supported"),
		syn::Data::Union(_union) => panic!("unions not supported"),
	}
}

/// Derive macro for a `Condition` type behavior.
#[proc_macro_derive(Condition)]
pub fn derive_condition(input: TokenStream) -> TokenStream {
	// Construct a representation of the Rust code
	let input: DeriveInput = syn::parse2(input.into()).expect("could not parse input");

	// Check type of input
	match &input.data {
		syn::Data::Struct(_struct) => derive_behavior_struct(&input, &Kind::Condition).into(),
		syn::Data::Enum(_enum) => panic!("enums not supported"),
		syn::Data::Union(_union) => panic!("unions not supported"),
	}
}

/// Derive macro for a `Control` type behavior.
#[proc_macro_derive(Control)]
pub fn derive_control(input: TokenStream) -> TokenStream {
	// Construct a representation of the Rust code
	let input: DeriveInput = syn::parse2(input.into()).expect("could not parse input");

	// Check type of input
	match &input.data {
		syn::Data::Struct(_struct) => derive_behavior_struct(&input, &Kind::Control).into(),
		syn::Data::Enum(_enum) => panic!("enums not supported"),
		syn::Data::Union(_union) => panic!("unions not supported"),
	}
}

/// Derive macro for a `Decorator` type behavior.
#[proc_macro_derive(Decorator)]
pub fn derive_decorator(input: TokenStream) -> TokenStream {
	// Construct a representation of the Rust code
	let input: DeriveInput = syn::parse2(input.into()).expect("could not parse input");

	// Check type of input
	match &input.data {
		syn::Data::Struct(_struct) => derive_behavior_struct(&input, &Kind::Decorator).into(),
		syn::Data::Enum(_enum) => panic!("enums not supported"),
		syn::Data::Union(_union) => panic!("unions not supported"),
	}
}
