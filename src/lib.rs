//! # fastcase
//!
//! camelCase / snake_case conversion for identifiers, and deep conversion of
//! the keys of nested structured values.
//!
//! ## Key Features
//!
//! - **Two engines, one output**: regex-based transforms and single-pass
//!   byte scanners that produce identical results
//! - **Deep key mapping**: any `Fn(&str) -> String` applied to every object key
//!   of a nested [`Value`], leaving values untouched
//! - **Total**: no function in the conversion surface fails or panics on any
//!   input
//! - **Serde bridge**: build a [`Value`] from any `T: Serialize`, or deserialize
//!   one from JSON or any other serde format
//!
//! ## Quick Start
//!
//! ```rust
//! use fastcase::{to_camel_case, to_snake_case, to_camel_case_keys, value};
//!
//! assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
//! assert_eq!(to_snake_case("fooBarBaz"), "foo_bar_baz");
//!
//! let data = value!({
//!     "user_name": "Alice",
//!     "recent_orders": [{ "order_id": 1 }]
//! });
//! assert_eq!(
//!     to_camel_case_keys(data),
//!     value!({
//!         "userName": "Alice",
//!         "recentOrders": [{ "orderId": 1 }]
//!     })
//! );
//! ```
//!
//! ### From Rust types
//!
//! ```rust
//! use fastcase::{to_value_with_options, value, KeyOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order { order_id: u32, line_items: Vec<String> }
//!
//! let order = Order { order_id: 5, line_items: vec![] };
//! let out = to_value_with_options(&order, &KeyOptions::camel()).unwrap();
//! assert_eq!(out, value!({ "orderId": 5, "lineItems": [] }));
//! ```
//!
//! ## Compatibility Notes
//!
//! - Opaque values ([`Value::Date`]) collapse to an empty object during key
//!   mapping. Set [`OpaquePolicy::Preserve`] to keep them.
//! - When two keys convert to the same string, the entry visited last wins.

pub mod case;
pub mod error;
pub mod keys;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use case::{
    to_camel_case, to_camel_case_fast, to_snake_case, to_snake_case_fast, transform_value,
};
pub use error::{Error, Result};
pub use keys::{map_keys, to_case_keys_fn, KeyMapper};
pub use map::KeyMap;
pub use options::{CaseStyle, Engine, KeyOptions, OpaquePolicy};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;

/// Converts every object key in `value` to camelCase.
///
/// # Examples
///
/// ```rust
/// use fastcase::{to_camel_case_keys, value, Value};
///
/// assert_eq!(to_camel_case_keys(Value::Null), Value::Null);
/// assert_eq!(to_camel_case_keys(value!("foo_bar_baz")), value!("foo_bar_baz"));
/// assert_eq!(
///     to_camel_case_keys(value!({ "foo_bar_baz": "a", "fooBarBaz": "b" })),
///     value!({ "fooBarBaz": "b" })
/// );
/// ```
pub fn to_camel_case_keys(value: Value) -> Value {
    map_keys(value, to_camel_case)
}

/// Converts every object key in `value` to snake_case.
///
/// # Examples
///
/// ```rust
/// use fastcase::{to_snake_case_keys, value};
///
/// assert_eq!(
///     to_snake_case_keys(value!([{ "fooBarBaz": "x" }])),
///     value!([{ "foo_bar_baz": "x" }])
/// );
/// ```
pub fn to_snake_case_keys(value: Value) -> Value {
    map_keys(value, to_snake_case)
}

/// Converts every object key in `value` as described by `options`.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use fastcase::{convert_keys, KeyOptions, OpaquePolicy, Value};
///
/// let date = Value::Date(Utc::now());
/// let options = KeyOptions::snake().with_opaque(OpaquePolicy::Preserve);
/// assert_eq!(convert_keys(date.clone(), &options), date);
/// ```
pub fn convert_keys(value: Value, options: &KeyOptions) -> Value {
    KeyMapper::new(options.transform())
        .with_opaque(options.opaque)
        .map(value)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Errors
///
/// Returns an error for shapes a `Value` cannot hold: map keys that are not
/// strings, and enum variants carrying data.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Convert any `T: Serialize` to a [`Value`] and convert its keys.
///
/// # Errors
///
/// Returns the same errors as [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value_with_options<T>(value: &T, options: &KeyOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    Ok(convert_keys(to_value(value)?, options))
}
