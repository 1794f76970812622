//! Style text handling.
//!
//! Styles travel through the builder as declaration lists and land on the
//! element as raw style text, the element's `cssText` equivalent.
//! Application is append-only: defaults first, then user overrides, so a
//! conflicting property resolves last-write-wins exactly as a style parser
//! would apply the text.

use serde::Serialize;

use trellis_dom::{ElementId, ElementTree};

/// A single style declaration (e.g. `color: red`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    /// The property name.
    pub name: String,
    /// The property value as plain text.
    pub value: String,
}

impl StyleDeclaration {
    /// Create a declaration from a name/value pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        StyleDeclaration {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parse raw style text into a declaration list.
///
/// Splits on `;`, then on the first `:` of each piece; whitespace around
/// names and values is trimmed. Pieces without a `:` or with an empty
/// property name are skipped rather than reported.
pub fn parse_style_text(text: &str) -> Vec<StyleDeclaration> {
    text.split(';')
        .filter_map(|piece| {
            let (name, value) = piece.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(StyleDeclaration::new(name, value.trim()))
        })
        .collect()
}

/// Serialize a declaration list back to style text.
pub fn style_text_of(declarations: &[StyleDeclaration]) -> String {
    let mut text = String::new();
    for declaration in declarations {
        text.push_str(&format!("{} : {};", declaration.name, declaration.value));
    }
    text
}

/// Read a property from style text. The last declaration for the property
/// wins, matching how the style text is applied.
pub fn style_property(text: &str, name: &str) -> Option<String> {
    parse_style_text(text)
        .into_iter()
        .rev()
        .find(|declaration| declaration.name == name)
        .map(|declaration| declaration.value)
}

/// Append a declaration list to an element's style text, in list order.
/// Unknown element IDs are ignored.
pub(crate) fn apply_declarations(
    tree: &mut ElementTree,
    id: ElementId,
    declarations: &[StyleDeclaration],
) {
    let Some(element) = tree.get_mut(id) else {
        return;
    };
    for declaration in declarations {
        element
            .style
            .push_str(&format!("{} : {};", declaration.name, declaration.value));
    }
}

/// Assign a single style property on an element, the `element.style.color = v`
/// equivalent.
///
/// Existing declarations for the property are dropped and the new value is
/// appended at the end of the style text; an empty value removes the
/// property. Unknown element IDs are ignored.
pub fn set_style_property(tree: &mut ElementTree, id: ElementId, name: &str, value: &str) {
    let Some(existing) = tree.style_text(id) else {
        return;
    };
    let mut declarations: Vec<StyleDeclaration> = parse_style_text(existing)
        .into_iter()
        .filter(|declaration| declaration.name != name)
        .collect();
    if !value.is_empty() {
        declarations.push(StyleDeclaration::new(name, value));
    }
    let text = style_text_of(&declarations);
    tree.set_style_text(id, &text);
}
