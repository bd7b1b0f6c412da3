//! Error types for the serde bridge.
//!
//! Case conversion and key mapping are total and never fail. Errors only
//! surface when a Rust value is turned into a [`Value`](crate::Value) whose
//! shape the value model cannot hold, or when a [`Value`](crate::Value) is
//! extracted into a primitive of the wrong kind.
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use fastcase::{to_value, Error};
//!
//! let mut map = BTreeMap::new();
//! map.insert(1, "one");
//!
//! let result = to_value(&map);
//! assert!(matches!(result, Err(Error::Custom(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the serde bridge and value extractors.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A Rust shape with no [`Value`](crate::Value) counterpart
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for shapes that cannot become a `Value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastcase::Error;
    ///
    /// let err = Error::unsupported_type("newtype variants");
    /// assert!(err.to_string().contains("newtype variants"));
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastcase::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
