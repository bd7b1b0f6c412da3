//! Property-based tests for the case transforms and the key mapper.
//!
//! The scanner engines are checked against the regex engines over arbitrary
//! Unicode strings as well as identifier-shaped ones.

use fastcase::{
    map_keys, to_camel_case, to_camel_case_fast, to_camel_case_keys, to_snake_case,
    to_snake_case_fast, KeyMap, Value,
};
use proptest::prelude::*;

const IDENTIFIER: &str = "[A-Za-z0-9_]{0,24}";

/// camelCase identifiers whose interior words carry two or more lowercase
/// characters, e.g. `fooBarBaz` or `x1Qux`.
fn camel_identifier() -> impl Strategy<Value = String> {
    (
        "[a-z][a-z0-9]{0,6}",
        prop::collection::vec("[A-Z][a-z0-9][a-z]{1,5}", 0..4),
    )
        .prop_map(|(head, words)| {
            let mut s = head;
            for word in words {
                s.push_str(&word);
            }
            s
        })
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        IDENTIFIER.prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((IDENTIFIER, inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<KeyMap>())),
        ]
    })
}

fn count_nodes(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(count_nodes).sum::<usize>(),
        Value::Object(obj) => 1 + obj.values().map(count_nodes).sum::<usize>(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn prop_camel_fast_matches_regex(s in any::<String>()) {
        prop_assert_eq!(to_camel_case_fast(&s), to_camel_case(&s));
    }

    #[test]
    fn prop_snake_fast_matches_regex(s in any::<String>()) {
        prop_assert_eq!(to_snake_case_fast(&s), to_snake_case(&s));
    }

    #[test]
    fn prop_fast_matches_regex_on_identifiers(s in IDENTIFIER) {
        prop_assert_eq!(to_camel_case_fast(&s), to_camel_case(&s));
        prop_assert_eq!(to_snake_case_fast(&s), to_snake_case(&s));
    }

    #[test]
    fn prop_snake_fast_matches_regex_across_lines(
        s in "[a-zA-Z0-9_\n\r\u{2028}\u{2029}]{0,24}"
    ) {
        prop_assert_eq!(to_snake_case_fast(&s), to_snake_case(&s));
    }

    #[test]
    fn prop_snake_of_lowercase_is_lowercase(s in "[a-z0-9]{0,24}") {
        prop_assert_eq!(to_snake_case(&s), s.to_lowercase());
    }

    #[test]
    fn prop_camel_without_underscores_unchanged(s in "[A-Za-z0-9]{0,24}") {
        prop_assert_eq!(to_camel_case(&s), s);
    }

    #[test]
    fn prop_camel_idempotent(s in any::<String>()) {
        let once = to_camel_case(&s);
        prop_assert_eq!(to_camel_case(&once), once);
    }

    #[test]
    fn prop_snake_idempotent_on_camel_identifiers(s in camel_identifier()) {
        let once = to_snake_case(&s);
        prop_assert_eq!(to_snake_case(&once), once.clone());
        prop_assert_eq!(to_camel_case(&once), s);
    }

    #[test]
    fn prop_identity_transform_preserves_value(v in arb_value()) {
        prop_assert_eq!(map_keys(v.clone(), str::to_string), v);
    }

    #[test]
    fn prop_key_mapping_never_grows_tree(v in arb_value()) {
        let mapped = to_camel_case_keys(v.clone());
        prop_assert!(count_nodes(&mapped) <= count_nodes(&v));
    }
}
