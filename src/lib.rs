//! # tokenless
//!
//! Convert JSON-like data and Markdown documents into the compact
//! "tokenless" format, a whitespace-minimal textual notation that cuts token
//! count when the data is fed to a language model.
//!
//! ## What is the tokenless format?
//!
//! A lossy, one-directional rendering that drops the syntax LLMs pay tokens
//! for: braces, brackets, quotes, Markdown markup. Structured data becomes
//! indented `key:value` lines, arrays of uniform flat records become
//! CSV-like blocks, and Markdown collapses to plain text with tables
//! extracted as CSV.
//!
//! ## Key Features
//!
//! - **Token-Efficient**: typically 30-60% fewer tokens than the equivalent
//!   JSON or Markdown
//! - **Tabular Detection**: arrays of flat records render as a header line
//!   plus one value line per record
//! - **Serde Compatible**: any `#[derive(Serialize)]` type converts via
//!   [`to_string`]
//! - **Pure**: both pipelines are side-effect-free functions of their input;
//!   conversion is deterministic and safe to call concurrently on
//!   independent inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenless::{tokenless, Input};
//!
//! // Markdown input
//! let out = tokenless(Input::from("# Title\n\nSome **bold** text."));
//! assert_eq!(out, "Title\nSome bold text.");
//!
//! // Structured input
//! let data = tokenless!([
//!     {"id": 1, "ok": true},
//!     {"id": 2, "ok": false}
//! ]);
//! let out = tokenless(Input::from(data));
//! assert_eq!(out, "id,ok\n1,1\n2,0");
//! ```
//!
//! ### Converting Rust types
//!
//! ```rust
//! use serde::Serialize;
//! use tokenless::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User {
//!     name: "x".to_string(),
//!     tags: vec!["a".to_string(), "b".to_string()],
//! };
//! assert_eq!(to_string(&user).unwrap(), "name:x\ntags\n -a\n -b");
//! ```
//!
//! ### Converting JSON text
//!
//! [`Value`] implements `Deserialize`, so JSON strings enter through any
//! serde JSON parser:
//!
//! ```rust
//! use tokenless::{convert_value, Value};
//!
//! let value: Value = serde_json::from_str(r#"{"name":"x","n":2}"#).unwrap();
//! assert_eq!(convert_value(&value), "name:x\nn:2");
//! ```
//!
//! ## Known limitations
//!
//! The format never quotes or escapes: a comma inside a tabular cell is
//! indistinguishable from a cell boundary, and tabular records with
//! differing key sets misalign silently. Both are deliberate
//! compactness-over-fidelity trade-offs; see [`convert_value`]. There is no
//! reverse conversion.

pub mod convert;
pub mod error;
pub mod macros;
pub mod map;
pub mod markdown;
pub mod ser;
pub mod value;

pub use convert::format_scalar;
pub use error::{Error, Result};
pub use map::Map;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Input to the [`tokenless`] entry point: either a Markdown document or a
/// structured value.
///
/// The two pipelines are dispatched on this tag alone; there is no content
/// sniffing.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// A Markdown (or plain text) document.
    Document(String),
    /// A structured JSON-like value.
    Data(Value),
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Document(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Document(text)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Data(value)
    }
}

/// Converts any input to the tokenless format.
///
/// Documents go through the Markdown normalizer, structured values through
/// the structured-data converter at indentation level 0.
///
/// # Examples
///
/// ```rust
/// use tokenless::{tokenless, Input};
///
/// assert_eq!(tokenless(Input::from("## Heading")), "Heading");
/// assert_eq!(
///     tokenless(Input::from(tokenless!({"a": 1}))),
///     "a:1"
/// );
/// ```
#[must_use]
pub fn tokenless(input: Input) -> String {
    match input {
        Input::Document(text) => markdown::normalize(&text),
        Input::Data(value) => convert::convert(&value, 0),
    }
}

/// Converts a structured [`Value`] to the tokenless format.
///
/// Tabular arrays (non-empty, every element a flat record) render as
/// CSV-like blocks; other arrays render one `-` line per element; objects
/// render `key:value` lines in insertion order; nesting indents by one space
/// per level.
///
/// Commas inside values are not escaped or quoted, and tabular records with
/// differing key sets misalign silently; both are accepted limitations of
/// the format. Recursion depth is bounded only by the stack.
///
/// # Examples
///
/// ```rust
/// use tokenless::convert_value;
///
/// let data = tokenless::tokenless!({
///     "name": "x",
///     "tags": ["a", "b"]
/// });
/// assert_eq!(convert_value(&data), "name:x\ntags\n -a\n -b");
/// ```
#[must_use]
pub fn convert_value(value: &Value) -> String {
    convert::convert(value, 0)
}

/// Converts a Markdown document to the tokenless format.
///
/// Applies, in order: table extraction, heading-marker stripping, emphasis
/// stripping, horizontal-rule collapse, blank-line collapse,
/// inline-whitespace collapse, and a final trim.
///
/// # Examples
///
/// ```rust
/// use tokenless::convert_markdown;
///
/// assert_eq!(convert_markdown("**bold** and *italic*"), "bold and italic");
/// assert_eq!(convert_markdown("| A | B |\n|---|---|\n| 1 | 2 |"), "A,B\n1,2");
/// ```
#[must_use]
pub fn convert_markdown(text: &str) -> String {
    markdown::normalize(text)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Useful for working with data dynamically when the structure isn't known
/// at compile time.
///
/// # Errors
///
/// Returns an error if the value has no representation in the tokenless
/// value domain (e.g. maps with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Serializes any `T: Serialize` to a tokenless string.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use tokenless::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "x:1\ny:2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be lowered into a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(convert_value(&to_value(value)?))
}

/// Serializes any `T: Serialize` to a writer in tokenless format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let output = to_string(value)?;
    writer
        .write_all(output.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
