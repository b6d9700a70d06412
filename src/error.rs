//! Error types for the serde bridge.
//!
//! The converters themselves never fail: malformed or surprising input falls
//! through to a less-specific formatting rule and still produces a string.
//! The fallible surface is limited to serializing arbitrary Rust types into
//! a [`Value`](crate::Value) tree (unsupported shapes) and writing output to
//! an `io::Write`.
//!
//! ## Examples
//!
//! ```rust
//! use tokenless::to_value;
//! use std::collections::BTreeMap;
//!
//! // Map keys must be strings in the tokenless value domain.
//! let bad: BTreeMap<u32, u32> = [(1, 2)].into_iter().collect();
//! let result = to_value(&bad);
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Errors that can occur while bridging Rust values into the tokenless domain
/// or writing converted output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing converted output
    #[error("IO error: {0}")]
    Io(String),

    /// Type that has no representation in the tokenless value domain
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for shapes that cannot become a `Value`.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
