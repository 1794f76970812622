//! Field resolvers.
//!
//! Each resolver turns one configuration field, after override precedence,
//! into a concrete value. Resolution is permissive by design: unsupported or
//! absent input degrades to a documented default rather than failing.

use trellis_dom::{ElementId, ElementTree};

use crate::config::{ContentSpec, ElementSpec, StyleSpec};
use crate::style::{StyleDeclaration, parse_style_text};

/// Tag used when no usable element descriptor resolves.
pub(crate) const DEFAULT_TAG: &str = "div";

/// Per-leaf-field override precedence: the user value wins when it is set
/// (per the field's own emptiness rule), else the default value is used,
/// set or not. Never deep-merged.
pub(crate) fn prefer<'a, T>(
    user: Option<&'a T>,
    default: Option<&'a T>,
    is_set: impl Fn(&T) -> bool,
) -> Option<&'a T> {
    match user {
        Some(value) if is_set(value) => Some(value),
        _ => default,
    }
}

/// Construct the node's element.
///
/// Four-way dispatch with no error path:
/// 1. a provided element is used as-is (resolved content is NOT applied);
/// 2. a tag name creates a new element of that tag with resolved content;
/// 3. a tag provider is invoked for the tag name, then as case 2;
/// 4. anything else (absent spec, empty tag) creates a default `div` with
///    resolved content.
pub(crate) fn resolve_element(
    tree: &mut ElementTree,
    spec: Option<&ElementSpec>,
    content: Option<&ContentSpec>,
) -> ElementId {
    match spec {
        Some(ElementSpec::Provided(provider)) => provider(tree),
        Some(ElementSpec::Tag(tag)) if !tag.is_empty() => {
            create_with_content(tree, tag, content)
        }
        Some(ElementSpec::TagProvider(provider)) => {
            let tag = provider();
            let tag = if tag.is_empty() { DEFAULT_TAG } else { &tag };
            create_with_content(tree, tag, content)
        }
        _ => create_with_content(tree, DEFAULT_TAG, content),
    }
}

fn create_with_content(
    tree: &mut ElementTree,
    tag: &str,
    content: Option<&ContentSpec>,
) -> ElementId {
    let id = tree.create_element(tag);
    let text = resolve_content(content);
    tree.set_text(id, &text);
    id
}

/// Resolve content text: literal passthrough, provider invoked, absent
/// yields empty text.
pub(crate) fn resolve_content(spec: Option<&ContentSpec>) -> String {
    match spec {
        Some(ContentSpec::Text(text)) => text.clone(),
        Some(ContentSpec::Provider(provider)) => provider(),
        None => String::new(),
    }
}

/// Resolve a style spec into a declaration list, or `None` when there is
/// nothing to apply (absent spec, or a provider returning no declarations).
pub(crate) fn resolve_style(spec: Option<&StyleSpec>) -> Option<Vec<StyleDeclaration>> {
    match spec {
        Some(StyleSpec::Text(text)) => Some(parse_style_text(text)),
        Some(StyleSpec::Declarations(declarations)) => Some(declarations.clone()),
        Some(StyleSpec::Provider(provider)) => {
            let declarations = provider();
            if declarations.is_empty() {
                None
            } else {
                Some(declarations)
            }
        }
        None => None,
    }
}

/// Resolve an event name: a non-empty string passes through, anything else
/// is no event.
pub(crate) fn resolve_event_name(user: Option<&str>, default: Option<&str>) -> Option<String> {
    let chosen = match user {
        Some(name) if !name.is_empty() => Some(name),
        _ => default,
    };
    chosen
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
