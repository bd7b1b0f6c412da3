//! camelCase / snake_case conversion for single identifiers.
//!
//! Two implementations of each direction are provided:
//!
//! - [`to_camel_case`] and [`to_snake_case`] run a global regex substitution.
//! - [`to_camel_case_fast`] and [`to_snake_case_fast`] walk the input bytes
//!   once without a regex engine. Their output is identical to the regex
//!   versions for every input; only throughput differs.
//!
//! All four functions are total: any `&str`, including the empty string and
//! non-identifier text, produces a result and never panics.
//!
//! ## Snake case
//!
//! A boundary is one or more characters followed by a run of ASCII uppercase
//! letters and then an ASCII lowercase letter or digit. Every such match is
//! replaced by `prefix + "_" + run`, lowercased. Text after the last match is
//! copied as is.
//!
//! The prefix never spans a line terminator (`\n`, `\r`, U+2028, U+2029), so
//! an uppercase letter right after one is not a boundary.
//!
//! ```rust
//! use fastcase::to_snake_case;
//!
//! assert_eq!(to_snake_case("fooBarBaz"), "foo_bar_baz");
//! assert_eq!(to_snake_case("FooBar"), "foo_bar");
//! assert_eq!(to_snake_case("already_snake"), "already_snake");
//! assert_eq!(to_snake_case("ABC"), "ABC");
//! ```
//!
//! ## Camel case
//!
//! Every run of underscores followed by an ASCII letter or digit is dropped and
//! that character is uppercased. Underscores with nothing alphanumeric after
//! them are kept.
//!
//! ```rust
//! use fastcase::to_camel_case;
//!
//! assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
//! assert_eq!(to_camel_case("fooBarBaz"), "fooBarBaz");
//! assert_eq!(to_camel_case("trailing_"), "trailing_");
//! ```

use crate::Value;
use regex::{Captures, Regex};
use std::sync::OnceLock;

const SNAKE_BOUNDARY: &str = r"([^\n\r\x{2028}\x{2029}]+?)([A-Z]+[a-z0-9])";
const CAMEL_BOUNDARY: &str = r"_+([A-Za-z0-9])";

fn snake_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SNAKE_BOUNDARY).expect("snake boundary pattern is valid"))
}

fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CAMEL_BOUNDARY).expect("camel boundary pattern is valid"))
}

/// Converts a snake_case identifier to camelCase.
///
/// # Examples
///
/// ```rust
/// use fastcase::to_camel_case;
///
/// assert_eq!(to_camel_case("foo_bar_baz_qux_42"), "fooBarBazQux42");
/// assert_eq!(to_camel_case(""), "");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    camel_boundary()
        .replace_all(s, |caps: &Captures<'_>| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Converts a camelCase identifier to snake_case.
///
/// # Examples
///
/// ```rust
/// use fastcase::to_snake_case;
///
/// assert_eq!(to_snake_case("fooBarBazQux42"), "foo_bar_baz_qux42");
/// assert_eq!(to_snake_case("userID"), "userID");
/// assert_eq!(to_snake_case("parseHTTPResponse"), "parse_httpresponse");
/// ```
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    snake_boundary()
        .replace_all(s, |caps: &Captures<'_>| {
            format!("{}_{}", &caps[1], &caps[2]).to_lowercase()
        })
        .into_owned()
}

/// Same output as [`to_camel_case`], computed with a single byte scan.
///
/// # Examples
///
/// ```rust
/// use fastcase::{to_camel_case, to_camel_case_fast};
///
/// for s in ["foo_bar", "__private", "a__b_", "noop"] {
///     assert_eq!(to_camel_case_fast(s), to_camel_case(s));
/// }
/// ```
#[must_use]
pub fn to_camel_case_fast(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'_' {
            i += 1;
            continue;
        }

        let mut end = i;
        while end < bytes.len() && bytes[end] == b'_' {
            end += 1;
        }

        match bytes.get(end) {
            Some(b) if b.is_ascii_alphanumeric() => {
                out.push_str(&s[copied..i]);
                out.push(char::from(b.to_ascii_uppercase()));
                copied = end + 1;
                i = copied;
            }
            _ => i = end,
        }
    }

    out.push_str(&s[copied..]);
    out
}

/// Same output as [`to_snake_case`], computed with a single byte scan.
///
/// # Examples
///
/// ```rust
/// use fastcase::{to_snake_case, to_snake_case_fast};
///
/// for s in ["fooBar", "FooBar", "xAbCd", "ÄpfelBaum", "HTML", "a\nBc"] {
///     assert_eq!(to_snake_case_fast(s), to_snake_case(s));
/// }
/// ```
#[must_use]
pub fn to_snake_case_fast(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(width) = line_terminator_width(&bytes[i..]) {
            i += width;
            out.push_str(&s[copied..i]);
            copied = i;
            continue;
        }
        // The prefix before a boundary holds at least one character.
        if !bytes[i].is_ascii_uppercase() || i == copied {
            i += 1;
            continue;
        }

        let mut end = i;
        while end < bytes.len() && bytes[end].is_ascii_uppercase() {
            end += 1;
        }

        match bytes.get(end) {
            Some(b) if b.is_ascii_lowercase() || b.is_ascii_digit() => {
                push_snake_segment(&mut out, &s[copied..i], &s[i..=end]);
                copied = end + 1;
                i = copied;
            }
            // Every start inside this run shares its end.
            _ => i = end,
        }
    }

    if copied < s.len() {
        out.push_str(&s[copied..]);
    }
    out
}

fn line_terminator_width(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [b'\n' | b'\r', ..] => Some(1),
        // U+2028 and U+2029
        [0xE2, 0x80, 0xA8 | 0xA9, ..] => Some(3),
        _ => None,
    }
}

fn push_snake_segment(out: &mut String, prefix: &str, boundary: &str) {
    if prefix.is_ascii() {
        out.extend(prefix.bytes().map(|b| char::from(b.to_ascii_lowercase())));
        out.push('_');
        out.extend(boundary.bytes().map(|b| char::from(b.to_ascii_lowercase())));
    } else {
        // Non-ASCII lowercasing is context sensitive (final sigma), so lower
        // the joined segment as one string.
        let mut joined = String::with_capacity(prefix.len() + boundary.len() + 1);
        joined.push_str(prefix);
        joined.push('_');
        joined.push_str(boundary);
        out.push_str(&joined.to_lowercase());
    }
}

/// Applies a string transform to a [`Value`], passing non-strings through.
///
/// Numbers, booleans, null, dates, arrays and objects are returned unchanged.
/// Use [`map_keys`](crate::map_keys) to rewrite the keys of an object.
///
/// # Examples
///
/// ```rust
/// use fastcase::{transform_value, to_camel_case, Value};
///
/// assert_eq!(transform_value(Value::from("a_b"), to_camel_case), Value::from("aB"));
/// assert_eq!(transform_value(Value::from(123), to_camel_case), Value::from(123));
/// assert_eq!(transform_value(Value::Null, to_camel_case), Value::Null);
/// ```
pub fn transform_value<F>(value: Value, transform: F) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        Value::String(s) => Value::String(transform(&s)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const SNAKE_CASES: &[(&str, &str)] = &[
        ("", ""),
        ("foo", "foo"),
        ("fooBarBaz", "foo_bar_baz"),
        ("fooBarBazQux42", "foo_bar_baz_qux42"),
        ("FooBar", "foo_bar"),
        ("ABc", "a_bc"),
        ("FOOBar", "f_oobar"),
        ("fooBAR", "fooBAR"),
        ("xAbCd", "x_abCd"),
        ("userIdValue", "user_idValue"),
        ("foo_bar", "foo_bar"),
        ("foo1Bar", "foo1_bar"),
        ("aB1", "a_b1"),
        ("éTé", "éTé"),
        ("étéBon", "été_bon"),
        ("ΣΑΣAb", "σας_ab"),
        ("line\nBreak", "line\nBreak"),
        ("a\rBc", "a\rBc"),
        ("x\u{2028}Yz", "x\u{2028}Yz"),
        ("fooBar\nbazQux", "foo_bar\nbaz_qux"),
        ("aBc\nDe", "a_bc\nDe"),
        ("x\r\nyZa", "x\r\ny_za"),
    ];

    const CAMEL_CASES: &[(&str, &str)] = &[
        ("", ""),
        ("foo", "foo"),
        ("foo_bar_baz", "fooBarBaz"),
        ("foo_bar_baz_qux_42", "fooBarBazQux42"),
        ("fooBarBaz", "fooBarBaz"),
        ("_private", "Private"),
        ("a__b", "aB"),
        ("trailing_", "trailing_"),
        ("a_-b", "a_-b"),
        ("snake_é", "snake_é"),
        ("___", "___"),
        ("x_1_y", "x1Y"),
    ];

    #[test]
    fn test_snake_case_table() {
        for (input, expected) in SNAKE_CASES {
            assert_eq!(to_snake_case(input), *expected, "input {:?}", input);
            assert_eq!(to_snake_case_fast(input), *expected, "fast input {:?}", input);
        }
    }

    #[test]
    fn test_camel_case_table() {
        for (input, expected) in CAMEL_CASES {
            assert_eq!(to_camel_case(input), *expected, "input {:?}", input);
            assert_eq!(to_camel_case_fast(input), *expected, "fast input {:?}", input);
        }
    }

    #[test]
    fn test_round_trip_on_plain_identifiers() {
        for s in ["user_name_value", "created_at", "a_long_identifier_name"] {
            assert_eq!(to_snake_case(&to_camel_case(s)), s);
        }
    }

    #[test]
    fn test_transform_value_passthrough() {
        let now = Value::Date(Utc::now());
        assert_eq!(transform_value(now.clone(), to_snake_case), now);
        assert_eq!(transform_value(Value::Bool(true), to_snake_case), Value::Bool(true));

        let array = Value::Array(vec![Value::from("fooBar")]);
        assert_eq!(transform_value(array.clone(), to_snake_case), array);

        assert_eq!(
            transform_value(Value::from("fooBar"), to_snake_case_fast),
            Value::from("foo_bar")
        );
    }
}
