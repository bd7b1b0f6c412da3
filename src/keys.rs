//! Deep key mapping over nested [`Value`] trees.
//!
//! The mapper is generic over any `Fn(&str) -> String`, so it is not tied to
//! the case transforms in this crate:
//!
//! ```rust
//! use fastcase::{map_keys, value};
//!
//! let upper = map_keys(value!({ "foo_bar": [{ "baz": 1 }] }), |k: &str| k.to_uppercase());
//! assert_eq!(upper, value!({ "FOO_BAR": [{ "BAZ": 1 }] }));
//! ```
//!
//! Dispatch by variant:
//!
//! | Input | Output |
//! |---|---|
//! | `Null`, `Bool`, `Number`, `String` | unchanged, never passed to the transform |
//! | `Array` | same length, every element mapped |
//! | `Object` | fresh object, `transform(key) -> map(value)` in insertion order |
//! | `Date` | empty object under [`OpaquePolicy::Collapse`], unchanged under `Preserve` |
//!
//! When two keys transform to the same string the entry visited last wins. It
//! takes the position of the first key that produced that string.

use crate::{KeyMap, OpaquePolicy, Value};

/// A deep key mapper bound to one transform.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use fastcase::{to_snake_case, KeyMapper, OpaquePolicy, Value};
///
/// let mapper = KeyMapper::new(to_snake_case).with_opaque(OpaquePolicy::Preserve);
/// let date = Value::Date(Utc::now());
/// assert_eq!(mapper.map(date.clone()), date);
/// ```
#[derive(Clone, Debug)]
pub struct KeyMapper<F> {
    transform: F,
    opaque: OpaquePolicy,
}

impl<F> KeyMapper<F>
where
    F: Fn(&str) -> String,
{
    /// Creates a mapper with the default opaque policy (collapse).
    pub fn new(transform: F) -> Self {
        KeyMapper {
            transform,
            opaque: OpaquePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_opaque(mut self, opaque: OpaquePolicy) -> Self {
        self.opaque = opaque;
        self
    }

    /// Rewrites every object key in `value`, recursing through arrays and
    /// object values.
    pub fn map(&self, value: Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.into_iter().map(|v| self.map(v)).collect()),
            Value::Object(object) => Value::Object(self.map_object(object)),
            other if other.is_opaque() && self.opaque == OpaquePolicy::Collapse => {
                tracing::trace!("opaque value collapsed to an empty object");
                Value::Object(KeyMap::new())
            }
            other => other,
        }
    }

    fn map_object(&self, object: KeyMap) -> KeyMap {
        let mut out = KeyMap::with_capacity(object.len());
        for (key, value) in object {
            let new_key = (self.transform)(&key);
            if out.contains_key(&new_key) {
                tracing::trace!(
                    key = %key,
                    new_key = %new_key,
                    "key collision, earlier entry overwritten"
                );
            }
            out.insert(new_key, self.map(value));
        }
        out
    }
}

/// Rewrites every object key in `value` with `transform`.
///
/// Opaque values collapse to empty objects; use [`KeyMapper`] to change that.
///
/// # Examples
///
/// ```rust
/// use fastcase::{map_keys, to_camel_case, value};
///
/// let out = map_keys(value!({ "foo_bar_baz": "foo_bar_baz" }), to_camel_case);
/// assert_eq!(out, value!({ "fooBarBaz": "foo_bar_baz" }));
/// ```
pub fn map_keys<F>(value: Value, transform: F) -> Value
where
    F: Fn(&str) -> String,
{
    KeyMapper::new(transform).map(value)
}

/// Binds `transform` into a ready-to-call deep key mapper.
///
/// # Examples
///
/// ```rust
/// use fastcase::{to_case_keys_fn, value};
///
/// let to_upper_case_keys = to_case_keys_fn(|k: &str| k.to_uppercase());
/// assert_eq!(
///     to_upper_case_keys(value!([{ "foo_bar_baz": "foo_bar_baz" }])),
///     value!([{ "FOO_BAR_BAZ": "foo_bar_baz" }])
/// );
/// ```
pub fn to_case_keys_fn<F>(transform: F) -> impl Fn(Value) -> Value
where
    F: Fn(&str) -> String,
{
    let mapper = KeyMapper::new(transform);
    move |value| mapper.map(value)
}
