//! Exact-output tests for the tokenless format rules.
//!
//! Every assertion here is forward-only: the format is lossy and
//! one-directional, so no test reconstructs the original input.

use tokenless::{
    convert_markdown, convert_value, format_scalar, tokenless, Input, Value,
};

#[test]
fn test_format_scalar_booleans() {
    assert_eq!(format_scalar(&Value::Bool(true)), "1");
    assert_eq!(format_scalar(&Value::Bool(false)), "0");
}

#[test]
fn test_format_scalar_null() {
    assert_eq!(format_scalar(&Value::Null), "");
}

#[test]
fn test_format_scalar_numbers_use_natural_decimal_form() {
    assert_eq!(format_scalar(&Value::from(42)), "42");
    assert_eq!(format_scalar(&Value::from(-7)), "-7");
    assert_eq!(format_scalar(&Value::from(3.5)), "3.5");
    assert_eq!(format_scalar(&Value::from(42.0)), "42");
}

#[test]
fn test_format_scalar_strings_pass_through_unquoted() {
    assert_eq!(format_scalar(&Value::from("plain")), "plain");
    assert_eq!(format_scalar(&Value::from("has,comma")), "has,comma");
    assert_eq!(format_scalar(&Value::from("has:colon")), "has:colon");
}

#[test]
fn test_object_with_scalar_and_array() {
    let value = tokenless!({
        "name": "x",
        "tags": ["a", "b"]
    });
    assert_eq!(convert_value(&value), "name:x\ntags\n -a\n -b");
}

#[test]
fn test_tabular_sequence() {
    let value = tokenless!([
        {"id": 1, "ok": true},
        {"id": 2, "ok": false}
    ]);
    assert_eq!(convert_value(&value), "id,ok\n1,1\n2,0");
}

#[test]
fn test_tabular_header_equals_first_record_keys() {
    let value = tokenless!([
        {"sku": "A1", "price": 9.99, "stock": 3},
        {"sku": "B2", "price": 4.5, "stock": 0}
    ]);
    let out = convert_value(&value);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("sku,price,stock"));
    assert_eq!(lines.next(), Some("A1,9.99,3"));
    assert_eq!(lines.next(), Some("B2,4.5,0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_non_tabular_sequence_one_top_level_line_per_element() {
    let value = tokenless!(["a", 1, null, true]);
    let out = convert_value(&value);
    assert_eq!(out, "-a\n-1\n-\n-1");
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn test_sequence_with_container_elements_uses_marker_lines() {
    let value = tokenless!([
        "scalar",
        {"k": "v"},
        [1, 2]
    ]);
    assert_eq!(convert_value(&value), "-scalar\n-\n k:v\n-\n -1\n -2");
}

#[test]
fn test_null_object_value_renders_empty_after_colon() {
    let value = tokenless!({"a": null, "b": 1});
    assert_eq!(convert_value(&value), "a:\nb:1");
}

#[test]
fn test_dispatch_routes_by_variant() {
    assert_eq!(tokenless(Input::from("# Title")), "Title");
    assert_eq!(tokenless(Input::from(tokenless!({"a": 1}))), "a:1");
    // a document that happens to look like data still goes to the
    // markdown pipeline
    assert_eq!(tokenless(Input::from("{\"a\": 1}")), "{\"a\": 1}");
}

#[test]
fn test_markdown_heading_stripping() {
    assert_eq!(convert_markdown("# Title"), "Title");
    assert_eq!(convert_markdown("### Sub"), "Sub");
}

#[test]
fn test_markdown_emphasis_stripping() {
    assert_eq!(convert_markdown("**bold**"), "bold");
    assert_eq!(convert_markdown("*it*"), "it");
    assert_eq!(convert_markdown("***both***"), "both");
}

#[test]
fn test_markdown_table_conversion() {
    let input = "| A | B |\n|---|---|\n| 1 | 2 |";
    assert_eq!(convert_markdown(input), "A,B\n1,2");
}

#[test]
fn test_markdown_horizontal_rule_collapses() {
    assert_eq!(convert_markdown("above\n\n---\n\nbelow"), "above\nbelow");
}

#[test]
fn test_markdown_whitespace_collapse() {
    let input = "first  line\t\twith   runs\n\n\nsecond line";
    assert_eq!(convert_markdown(input), "first line with runs\nsecond line");
}

#[test]
fn test_markdown_result_is_trimmed() {
    assert_eq!(convert_markdown("   padded   "), "padded");
    assert_eq!(convert_markdown("\n\ntext\n\n"), "text");
}

#[test]
fn test_deep_nesting_indents_one_space_per_level() {
    let value = tokenless!({
        "l1": {
            "l2": {
                "l3": {
                    "l4": "deep"
                }
            }
        }
    });
    assert_eq!(convert_value(&value), "l1\n l2\n  l3\n   l4:deep");
}

#[test]
fn test_nested_tabular_block_inherits_indent() {
    let value = tokenless!({
        "report": {
            "rows": [
                {"id": 1, "ok": true},
                {"id": 2, "ok": false}
            ]
        }
    });
    assert_eq!(
        convert_value(&value),
        "report\n rows\n  id,ok\n  1,1\n  2,0"
    );
}
