//! Error types for VSV conversion and serialization.
//!
//! Parsing VSV is deliberately infallible: markup is user-authored,
//! prose-adjacent text, and every builder degrades gracefully instead of
//! aborting (see the builder modules for the tolerated malformed-input
//! policies). Errors therefore arise only on the serialization path, where
//! a field can contaminate every candidate symbol, and on the I/O wrappers.
//!
//! ## Error Categories
//!
//! - **Symbol exhaustion**: every bracket pair or delimiter candidate
//!   occurs in the content being written
//! - **I/O Errors**: reading input from a `Read` source failed
//!
//! ## Examples
//!
//! ```rust
//! use vsv::{write_field, Error};
//!
//! // All four bracket pairs occur in the text, so no pair can wrap it.
//! let result = write_field("[](){}<>", None);
//! assert!(matches!(result, Err(Error::NoUsableBracket { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors that can occur while writing VSV markup or reading input.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Every bracket pair occurs in the field text, so none can wrap it
    /// unambiguously.
    #[error("no usable bracket pair for field: {text:?}")]
    NoUsableBracket { text: String },

    /// Every candidate delimiter occurs in the row text, so none can
    /// separate the fields unambiguously.
    #[error("no usable delimiter for row: {text:?}")]
    NoUsableDelimiter { text: String },

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an error for a field that no bracket pair can wrap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsv::Error;
    ///
    /// let err = Error::no_usable_bracket("{<[(");
    /// assert!(err.to_string().contains("bracket"));
    /// ```
    pub fn no_usable_bracket(text: &str) -> Self {
        Error::NoUsableBracket {
            text: text.to_string(),
        }
    }

    /// Creates an error for a row that no candidate delimiter can separate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsv::Error;
    ///
    /// let err = Error::no_usable_delimiter("a,b.c");
    /// assert!(err.to_string().contains("delimiter"));
    /// ```
    pub fn no_usable_delimiter(text: &str) -> Self {
        Error::NoUsableDelimiter {
            text: text.to_string(),
        }
    }

    /// Creates an I/O error for read failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsv::Error;
    ///
    /// let err = Error::message("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offending_text() {
        let err = Error::no_usable_bracket("a[b]c");
        assert!(err.to_string().contains("a[b]c"));

        let err = Error::no_usable_delimiter("x,y");
        assert!(err.to_string().contains("x,y"));
    }

    #[test]
    fn test_errors_are_cloneable() {
        let err = Error::io("short read");
        let clone = err.clone();
        assert_eq!(err.to_string(), clone.to_string());
    }
}
