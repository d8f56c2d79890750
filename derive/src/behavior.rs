// Copyright © 2025 Stephan Kunz

//! Common derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Implementation of the derive macros.
///
/// Requires the annotated struct to implement `Default`, `Clone` and
/// `ticktree::behavior::Behavior`.
pub fn derive_behavior_struct(input: &DeriveInput, kind: &super::Kind) -> TokenStream {
	// structure name
	let ident = &input.ident;
	let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

	let derived: TokenStream = "#[automatically_derived]"
		.parse()
		.expect("derive(Behavior) - derived");
	let diagnostic: TokenStream = "#[diagnostic::do_not_recommend]"
		.parse()
		.expect("derive(Behavior) - diagnostic");

	let kind_ = match kind {
		crate::Kind::Action => quote! { ticktree::behavior::BehaviorKind::Action },
		crate::Kind::Condition => quote! { ticktree::behavior::BehaviorKind::Condition },
		crate::Kind::Control => quote! { ticktree::behavior::BehaviorKind::Control },
		crate::Kind::Decorator => quote! { ticktree::behavior::BehaviorKind::Decorator },
	};

	quote! {
		#derived
		#diagnostic
		impl #impl_generics ticktree::behavior::BehaviorStatic for #ident #type_generics #where_clause {
			#[inline]
			fn kind() -> ticktree::behavior::BehaviorKind { #kind_ }
			fn creation_fn() -> ::std::boxed::Box<ticktree::behavior::BehaviorCreationFn> {
				::std::boxed::Box::new(|| ::std::boxed::Box::new(Self::default()))
			}
		}

		#derived
		#diagnostic
		impl #impl_generics ticktree::behavior::BehaviorExecution for #ident #type_generics #where_clause {
			#[inline]
			fn as_any(&self) -> &dyn ::core::any::Any { self }
			#[inline]
			fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any { self }
			#[inline]
			fn clone_boxed(&self) -> ::std::boxed::Box<dyn ticktree::behavior::BehaviorExecution> {
				::std::boxed::Box::new(self.clone())
			}
			#[inline]
			fn static_kind(&self) -> ticktree::behavior::BehaviorKind {
				<Self as ticktree::behavior::BehaviorStatic>::kind()
			}
			#[inline]
			fn static_provided_ports(&self) -> ticktree::port::PortList {
				<Self as ticktree::behavior::Behavior>::provided_ports()
			}
		}
	}
}
