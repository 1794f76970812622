//! Dotted-path access into raw JSON configuration trees.
//!
//! Raw configurations are free-form JSON; any level of a property chain may
//! be missing. These helpers pull nested fields like `element.value` or
//! `eventlistener.event` out of such trees without assuming the
//! intermediate objects exist, and write values back creating the
//! intermediates on demand.

use serde_json::{Map, Value};

/// Truthiness of a JSON value, as a dynamic configuration sees it:
/// `null`, `false`, `0`, and `""` are falsy; everything else (including
/// empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|v| v != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Get the value at a dot-separated path, or `None` if any segment along
/// the way is missing or falsy.
///
/// Never panics; a falsy root or an empty path also yield `None`.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() || !is_truthy(root) {
        return None;
    }
    let mut current = root;
    for segment in path.split('.') {
        let next = current.get(segment)?;
        if !is_truthy(next) {
            return None;
        }
        current = next;
    }
    Some(current)
}

/// Write `value` at a dot-separated path, creating intermediate objects for
/// missing segments; non-object intermediates are replaced. Returns the root
/// for chaining.
pub fn set_path<'a>(root: &'a mut Value, path: &str, value: Value) -> &'a mut Value {
    {
        let (parents, last) = path.rsplit_once('.').map_or(("", path), |split| split);
        let mut current = &mut *root;
        if !parents.is_empty() {
            for segment in parents.split('.') {
                let map = ensure_object(current);
                current = map.entry(segment.to_string()).or_insert(Value::Null);
            }
        }
        let map = ensure_object(current);
        let _ = map.insert(last.to_string(), value);
    }
    root
}

/// View a value as a mutable object map, replacing it with an empty object
/// first when it is anything else.
fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just made an object"),
    }
}
