/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys must be string literals; any other leaf is converted through
/// [`to_value`](crate::to_value) and becomes `Value::Null` if it cannot be.
///
/// # Examples
///
/// ```rust
/// use fastcase::{value, Value};
///
/// let v = value!({
///     "user_id": 7,
///     "roles": ["admin", "dev"],
///     "manager": null
/// });
/// assert_eq!(v.as_object().and_then(|o| o.get("manager")), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::KeyMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::KeyMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{KeyMap, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_nested() {
        let obj = value!({
            "outer_key": { "inner_key": [1, null] },
            "flag": false,
        });

        let mut inner = KeyMap::new();
        inner.insert(
            "inner_key".to_string(),
            Value::Array(vec![Value::from(1), Value::Null]),
        );
        let mut expected = KeyMap::new();
        expected.insert("outer_key".to_string(), Value::Object(inner));
        expected.insert("flag".to_string(), Value::Bool(false));

        assert_eq!(obj, Value::Object(expected));
    }
}
