//! Raw JSON configuration loading.
//!
//! Declarative configurations can be supplied as free-form JSON trees, the
//! shape a config file naturally carries:
//!
//! ```json
//! [
//!   {
//!     "name": "root",
//!     "element": { "value": "div" },
//!     "style": { "color": "red" },
//!     "child": [
//!       { "name": "btn", "element": { "value": "button", "content": "Click" } }
//!     ]
//!   }
//! ]
//! ```
//!
//! Conversion into typed [`ConfigNode`] trees is permissive: every field is
//! probed through the dotted-path resolver with its truthiness rule, and a
//! value of an unsupported shape degrades to "absent" with a deduplicated
//! warning. JSON cannot express providers or callbacks, so those fields stay
//! unset; handlers are attached in code after loading.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use trellis_common::warning::warn_once;

use crate::config::{ConfigNode, ContentSpec, ElementSpec, EventListenerSpec, StyleSpec};
use crate::path::get_path;
use crate::style::StyleDeclaration;

/// Errors from loading a configuration file. The conversion itself never
/// fails; only reading and JSON parsing can.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON.
    #[error("configuration file is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// Load a configuration tree from a JSON file.
pub fn load_config(path: &Path) -> Result<Vec<ConfigNode>, ConfigError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    Ok(config_from_value(&value))
}

/// Convert a raw JSON tree into a configuration tree.
///
/// The root is normally a list of nodes; a single object is tolerated as a
/// one-node list. Anything else yields an empty configuration.
pub fn config_from_value(value: &Value) -> Vec<ConfigNode> {
    match value {
        Value::Array(items) => items.iter().filter_map(node_from_value).collect(),
        Value::Object(_) => node_from_value(value).into_iter().collect(),
        _ => {
            warn_once("Config", "configuration root must be a list of nodes");
            Vec::new()
        }
    }
}

fn node_from_value(value: &Value) -> Option<ConfigNode> {
    if !value.is_object() {
        warn_once("Config", "skipping configuration entry that is not an object");
        return None;
    }

    let name = get_path(value, "name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let element = get_path(value, "element.value").and_then(|descriptor| match descriptor {
        Value::String(tag) => Some(ElementSpec::Tag(tag.clone())),
        _ => {
            warn_once(
                "Config",
                &format!("unsupported element descriptor for '{name}', using default tag"),
            );
            None
        }
    });

    let content = get_path(value, "element.content").and_then(|descriptor| match descriptor {
        Value::String(text) => Some(ContentSpec::Text(text.clone())),
        _ => {
            warn_once(
                "Config",
                &format!("unsupported content for '{name}', using empty text"),
            );
            None
        }
    });

    let style = get_path(value, "style").and_then(|descriptor| style_from_value(descriptor, &name));

    let event = get_path(value, "eventlistener.event")
        .and_then(Value::as_str)
        .map(str::to_string);
    let event_listener = event.map(|event| EventListenerSpec {
        event: Some(event),
        callback: None,
    });

    let children = get_path(value, "child")
        .map(config_from_value)
        .unwrap_or_default();

    Some(ConfigNode {
        name,
        element,
        content,
        style,
        event_listener,
        children,
        ..ConfigNode::default()
    })
}

/// A style field is either raw style text or an object of property/value
/// pairs; declaration order follows the object's key order.
fn style_from_value(value: &Value, name: &str) -> Option<StyleSpec> {
    match value {
        Value::String(text) => Some(StyleSpec::Text(text.clone())),
        Value::Object(map) => {
            let declarations: Vec<StyleDeclaration> = map
                .iter()
                .filter_map(|(property, raw)| match raw {
                    Value::String(text) => {
                        Some(StyleDeclaration::new(property.clone(), text.clone()))
                    }
                    Value::Number(number) => {
                        Some(StyleDeclaration::new(property.clone(), number.to_string()))
                    }
                    _ => {
                        warn_once(
                            "Config",
                            &format!("unsupported style value for '{property}' on '{name}'"),
                        );
                        None
                    }
                })
                .collect();
            Some(StyleSpec::Declarations(declarations))
        }
        _ => {
            warn_once(
                "Config",
                &format!("unsupported style descriptor on '{name}', applying no styles"),
            );
            None
        }
    }
}
