// Copyright © 2025 Stephan Kunz

//! Dynamically typed [`Value`]s stored in a [`Blackboard`](crate::blackboard::Blackboard).

// region:      --- modules
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use nanoserde::{SerJson, SerJsonState};

use crate::ConstString;
// endregion:   --- modules

// region:		--- ValueKind
/// The type tag of a [`Value`], used by port schemas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
	/// Matches any value.
	Any,
	/// A boolean.
	Bool,
	/// A signed integer.
	Int,
	/// A floating point number, also matches integers.
	Float,
	/// A string.
	Str,
	/// A list of values.
	List,
	/// A string keyed map of values.
	Map,
	/// An opaque host value.
	Host,
}

impl core::fmt::Display for ValueKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Any => write!(f, "any"),
			Self::Bool => write!(f, "bool"),
			Self::Int => write!(f, "int"),
			Self::Float => write!(f, "float"),
			Self::Str => write!(f, "string"),
			Self::List => write!(f, "list"),
			Self::Map => write!(f, "map"),
			Self::Host => write!(f, "host"),
		}
	}
}

impl ValueKind {
	/// Check whether a concrete [`Value`] satisfies this kind.
	#[must_use]
	pub const fn matches(self, value: &Value) -> bool {
		match self {
			Self::Any => true,
			Self::Bool => matches!(value, Value::Bool(_)),
			Self::Int => matches!(value, Value::Int(_)),
			Self::Float => matches!(value, Value::Float(_) | Value::Int(_)),
			Self::Str => matches!(value, Value::Str(_)),
			Self::List => matches!(value, Value::List(_)),
			Self::Map => matches!(value, Value::Map(_)),
			Self::Host => matches!(value, Value::Host(_)),
		}
	}
}
// endregion:	--- ValueKind

// region:		--- Value
/// A dynamically typed blackboard value.
///
/// `Host` carries opaque host objects that the engine passes through
/// without inspecting them. Host values compare by pointer identity and
/// serialize as `null`.
#[derive(Clone, Default)]
pub enum Value {
	/// No value.
	#[default]
	Nil,
	/// A boolean.
	Bool(bool),
	/// A signed integer.
	Int(i64),
	/// A floating point number.
	Float(f64),
	/// A string.
	Str(ConstString),
	/// A list of values.
	List(Vec<Value>),
	/// A string keyed map of values.
	Map(BTreeMap<ConstString, Value>),
	/// An opaque host value.
	Host(Arc<dyn Any + Send + Sync>),
}

impl core::fmt::Debug for Value {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Nil => write!(f, "Nil"),
			Self::Bool(v) => write!(f, "Bool({v})"),
			Self::Int(v) => write!(f, "Int({v})"),
			Self::Float(v) => write!(f, "Float({v})"),
			Self::Str(v) => write!(f, "Str({v:?})"),
			Self::List(v) => f.debug_tuple("List").field(v).finish(),
			Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
			Self::Host(_) => write!(f, "Host(..)"),
		}
	}
}

impl core::fmt::Display for Value {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Nil => write!(f, "nil"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Str(v) => write!(f, "{v}"),
			Self::List(v) => {
				write!(f, "[")?;
				for (i, item) in v.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{item}")?;
				}
				write!(f, "]")
			}
			Self::Map(v) => {
				write!(f, "{{")?;
				for (i, (key, value)) in v.iter().enumerate() {
					if i > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{key}: {value}")?;
				}
				write!(f, "}}")
			}
			Self::Host(_) => write!(f, "<host>"),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Nil, Self::Nil) => true,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Int(a), Self::Int(b)) => a == b,
			#[allow(clippy::float_cmp)]
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::Str(a), Self::Str(b)) => a == b,
			(Self::List(a), Self::List(b)) => a == b,
			(Self::Map(a), Self::Map(b)) => a == b,
			(Self::Host(a), Self::Host(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl Value {
	/// Create a host value from any shared host object.
	#[must_use]
	pub fn host<T: Any + Send + Sync>(value: T) -> Self {
		Self::Host(Arc::new(value))
	}

	/// The [`ValueKind`] of this value.
	#[must_use]
	pub const fn kind(&self) -> ValueKind {
		match self {
			Self::Nil => ValueKind::Any,
			Self::Bool(_) => ValueKind::Bool,
			Self::Int(_) => ValueKind::Int,
			Self::Float(_) => ValueKind::Float,
			Self::Str(_) => ValueKind::Str,
			Self::List(_) => ValueKind::List,
			Self::Map(_) => ValueKind::Map,
			Self::Host(_) => ValueKind::Host,
		}
	}

	/// `true` for [`Value::Nil`].
	#[must_use]
	pub const fn is_nil(&self) -> bool {
		matches!(self, Self::Nil)
	}

	/// The boolean content, if any.
	#[must_use]
	pub const fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// The integer content, if any.
	#[must_use]
	pub const fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// The float content; integers are widened.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub const fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			Self::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	/// The string content, if any.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(v) => Some(v),
			_ => None,
		}
	}

	/// The list content, if any.
	#[must_use]
	pub const fn as_list(&self) -> Option<&Vec<Self>> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}

	/// The map content, if any.
	#[must_use]
	pub const fn as_map(&self) -> Option<&BTreeMap<ConstString, Self>> {
		match self {
			Self::Map(v) => Some(v),
			_ => None,
		}
	}

	/// Downcast a host value.
	#[must_use]
	pub fn as_host<T: Any + Send + Sync>(&self) -> Option<&T> {
		match self {
			Self::Host(v) => v.downcast_ref::<T>(),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value.into())
	}
}

impl From<ConstString> for Value {
	fn from(value: ConstString) -> Self {
		Self::Str(value)
	}
}

impl From<Vec<Self>> for Value {
	fn from(value: Vec<Self>) -> Self {
		Self::List(value)
	}
}

impl From<BTreeMap<ConstString, Self>> for Value {
	fn from(value: BTreeMap<ConstString, Self>) -> Self {
		Self::Map(value)
	}
}

/// Escape and append a string in JSON notation.
pub(crate) fn ser_json_str(value: &str, state: &mut SerJsonState) {
	state.out.push('"');
	for c in value.chars() {
		match c {
			'"' => state.out.push_str("\\\""),
			'\\' => state.out.push_str("\\\\"),
			'\n' => state.out.push_str("\\n"),
			'\r' => state.out.push_str("\\r"),
			'\t' => state.out.push_str("\\t"),
			c if (c as u32) < 0x20 => {
				state.out.push_str(&format!("\\u{:04x}", c as u32));
			}
			c => state.out.push(c),
		}
	}
	state.out.push('"');
}

impl SerJson for Value {
	fn ser_json(&self, d: usize, state: &mut SerJsonState) {
		match self {
			Self::Nil | Self::Host(_) => state.out.push_str("null"),
			Self::Bool(v) => state.out.push_str(if *v { "true" } else { "false" }),
			Self::Int(v) => state.out.push_str(&v.to_string()),
			Self::Float(v) => state.out.push_str(&v.to_string()),
			Self::Str(v) => ser_json_str(v, state),
			Self::List(v) => {
				state.out.push('[');
				for (i, item) in v.iter().enumerate() {
					if i > 0 {
						state.out.push(',');
					}
					item.ser_json(d, state);
				}
				state.out.push(']');
			}
			Self::Map(v) => {
				state.out.push('{');
				for (i, (key, value)) in v.iter().enumerate() {
					if i > 0 {
						state.out.push(',');
					}
					ser_json_str(key, state);
					state.out.push(':');
					value.ser_json(d, state);
				}
				state.out.push('}');
			}
		}
	}
}
// endregion:	--- Value
