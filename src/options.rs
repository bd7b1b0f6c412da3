//! Configuration for options-driven key conversion.
//!
//! - [`KeyOptions`]: main configuration struct passed to
//!   [`convert_keys`](crate::convert_keys)
//! - [`CaseStyle`]: target casing
//! - [`Engine`]: regex substitution or byte scanner
//! - [`OpaquePolicy`]: what happens to opaque values such as dates
//!
//! ## Examples
//!
//! ```rust
//! use fastcase::{convert_keys, value, Engine, KeyOptions};
//!
//! let options = KeyOptions::snake().with_engine(Engine::Scanner);
//! let out = convert_keys(value!({ "createdAt": 1 }), &options);
//! assert_eq!(out, value!({ "created_at": 1 }));
//! ```

/// Target casing for a conversion.
///
/// # Examples
///
/// ```rust
/// use fastcase::CaseStyle;
///
/// assert_eq!(CaseStyle::Camel.apply("foo_bar"), "fooBar");
/// assert_eq!(CaseStyle::Snake.apply("fooBar"), "foo_bar");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaseStyle {
    #[default]
    Camel,
    Snake,
}

/// Implementation used to transform each string.
///
/// Both engines produce identical output; `Scanner` avoids the regex engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    Pattern,
    Scanner,
}

/// Handling of values that are objects but not plain key/value mappings.
///
/// `Collapse` turns them into an empty object, which is what a generic
/// "is this an object" check does when it enumerates the keys of a date.
/// `Preserve` leaves them untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpaquePolicy {
    #[default]
    Collapse,
    Preserve,
}

impl CaseStyle {
    /// Returns the transform function for this style and engine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastcase::{CaseStyle, Engine};
    ///
    /// let f = CaseStyle::Snake.transform(Engine::Scanner);
    /// assert_eq!(f("loginCount"), "login_count");
    /// ```
    #[must_use]
    pub fn transform(self, engine: Engine) -> fn(&str) -> String {
        match (self, engine) {
            (CaseStyle::Camel, Engine::Pattern) => crate::to_camel_case,
            (CaseStyle::Camel, Engine::Scanner) => crate::to_camel_case_fast,
            (CaseStyle::Snake, Engine::Pattern) => crate::to_snake_case,
            (CaseStyle::Snake, Engine::Scanner) => crate::to_snake_case_fast,
        }
    }

    /// Converts `s` with the default engine.
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        (self.transform(Engine::default()))(s)
    }
}

/// Configuration for [`convert_keys`](crate::convert_keys).
///
/// # Examples
///
/// ```rust
/// use fastcase::{CaseStyle, Engine, KeyOptions, OpaquePolicy};
///
/// let options = KeyOptions::new();
/// assert_eq!(options.style, CaseStyle::Camel);
/// assert_eq!(options.engine, Engine::Pattern);
/// assert_eq!(options.opaque, OpaquePolicy::Collapse);
///
/// let options = KeyOptions::snake()
///     .with_engine(Engine::Scanner)
///     .with_opaque(OpaquePolicy::Preserve);
/// assert_eq!(options.style, CaseStyle::Snake);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct KeyOptions {
    pub style: CaseStyle,
    pub engine: Engine,
    pub opaque: OpaquePolicy,
}

impl KeyOptions {
    /// Creates default options (camelCase, regex engine, opaque values collapse).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn camel() -> Self {
        Self::new().with_style(CaseStyle::Camel)
    }

    #[must_use]
    pub fn snake() -> Self {
        Self::new().with_style(CaseStyle::Snake)
    }

    #[must_use]
    pub fn with_style(mut self, style: CaseStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn with_opaque(mut self, opaque: OpaquePolicy) -> Self {
        self.opaque = opaque;
        self
    }

    /// Returns the transform selected by these options.
    #[must_use]
    pub fn transform(&self) -> fn(&str) -> String {
        self.style.transform(self.engine)
    }
}
