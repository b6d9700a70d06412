//! Structured-data conversion.
//!
//! This module renders a [`Value`] tree into the tokenless line grammar:
//! indented, delimiter-based lines with one space of indentation per nesting
//! level. Formatting rules are tried in order:
//!
//! 1. **Tabular array** — a non-empty array whose every element is a flat
//!    record (an object with only scalar values) renders as a CSV-like
//!    block: one header line of keys, one line of values per record.
//! 2. **Array** — each element renders as a `-` line; container elements
//!    recurse one indentation level deeper on the following lines.
//! 3. **Object** — each key renders as `key:value` for scalars, or a bare
//!    `key` line followed by the recursive render for containers.
//! 4. **Scalar** — the formatted scalar alone.
//!
//! ## Known limitations
//!
//! Commas inside values are never escaped or quoted; the format trades exact
//! cell boundaries for compactness. Likewise, tabular detection does not
//! reconcile key sets across records: the header comes from the first
//! record, and each row emits its own values in its own key order, so
//! records with differing keys produce silently misaligned columns.
//!
//! Recursion depth is unbounded; extremely deep trees are limited only by
//! the thread's stack.

use crate::Value;

/// Renders `value` at the given indentation level.
///
/// Pure and deterministic: same input, same output. Empty arrays and objects
/// render as an empty string for their sublevel.
///
/// Most callers want [`convert_value`](crate::convert_value), which starts
/// at level 0; the explicit level exists for embedding a render inside an
/// already-indented block.
#[must_use]
pub fn convert(value: &Value, indent: usize) -> String {
    let prefix = " ".repeat(indent);

    match value {
        Value::Array(items) => {
            if is_tabular(items) {
                return tabular_to_csv(items, &prefix);
            }
            items
                .iter()
                .map(|item| {
                    if item.is_scalar() {
                        format!("{prefix}-{}", format_scalar(item))
                    } else {
                        format!("{prefix}-\n{}", convert(item, indent + 1))
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Value::Object(map) => {
            let mut lines = Vec::new();
            for (key, val) in map.iter() {
                if val.is_scalar() {
                    lines.push(format!("{prefix}{key}:{}", format_scalar(val)));
                } else {
                    lines.push(format!("{prefix}{key}"));
                    lines.push(convert(val, indent + 1));
                }
            }
            lines.join("\n")
        }
        _ => format_scalar(value),
    }
}

/// Formats a single scalar value.
///
/// Booleans become `1`/`0`, null becomes the empty string, numbers use their
/// natural decimal form, strings pass through verbatim (no quoting, even
/// around commas), dates render as RFC 3339, and big integers as digits.
///
/// Containers fall back to a full render at indentation level 0.
///
/// # Examples
///
/// ```rust
/// use tokenless::{format_scalar, Value};
///
/// assert_eq!(format_scalar(&Value::Bool(true)), "1");
/// assert_eq!(format_scalar(&Value::Bool(false)), "0");
/// assert_eq!(format_scalar(&Value::Null), "");
/// assert_eq!(format_scalar(&Value::from(3.5)), "3.5");
/// assert_eq!(format_scalar(&Value::from("a,b")), "a,b");
/// ```
#[must_use]
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => {
            if *b {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Date(dt) => dt.to_rfc3339(),
        Value::BigInt(bi) => bi.to_string(),
        Value::Array(_) | Value::Object(_) => convert(value, 0),
    }
}

/// Returns `true` if every element of a non-empty array is a flat record.
fn is_tabular(items: &[Value]) -> bool {
    if items.is_empty() {
        return false;
    }
    items.iter().all(|item| match item {
        Value::Object(map) => map.values().all(Value::is_scalar),
        _ => false,
    })
}

/// Renders a tabular array as a CSV-like block.
///
/// The header line carries the first record's keys; each row carries one
/// record's values in that record's own key order. Key sets are not
/// reconciled across records.
fn tabular_to_csv(items: &[Value], prefix: &str) -> String {
    // is_tabular guarantees every item is an object
    let header = match &items[0] {
        Value::Object(map) => map.keys().cloned().collect::<Vec<_>>().join(","),
        _ => String::new(),
    };

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!("{prefix}{header}"));
    for item in items {
        if let Value::Object(map) = item {
            let row = map
                .values()
                .map(format_scalar)
                .collect::<Vec<_>>()
                .join(",");
            lines.push(format!("{prefix}{row}"));
        }
    }
    lines.join("\n")
}
