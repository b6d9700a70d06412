/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys keep their written order, which is the order the converter
/// emits them in.
///
/// ```rust
/// use tokenless::{tokenless, Value};
///
/// let data = tokenless!({
///     "name": "Alice",
///     "tags": ["rust", "llm"]
/// });
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! tokenless {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::tokenless!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::tokenless!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
