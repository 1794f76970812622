//! The recursive merge-and-build traversal.
//!
//! One depth-first pass walks the default configuration tree; at each node
//! it looks up the matching user override by name, resolves every field
//! under user-over-default precedence, constructs and styles the element,
//! wires callbacks, attaches the element under its parent, and recurses
//! into children. The output tree always has the shape of the default tree:
//! user nodes override field values, never structure.

use std::rc::Rc;

use trellis_dom::{ElementId, ElementTree};

use crate::component::{Component, EventBinding, RenderedNode};
use crate::config::{ConfigNode, ContentSpec, ElementSpec, Handler};
use crate::resolve::{prefer, resolve_element, resolve_event_name, resolve_style};
use crate::style::apply_declarations;

/// Build a component from a default configuration tree and optional user
/// overrides.
///
/// `base` seeds the component (its tree, state, and registered extensions
/// carry over); `extensions` registers additional named handlers on the
/// capability set before the build runs. The returned component carries the
/// consumed configuration trees and the merged output tree in
/// `final_config`.
pub fn build_component(
    default_config: Vec<ConfigNode>,
    user_config: Option<Vec<ConfigNode>>,
    base: Option<Component>,
    extensions: Vec<(String, Handler)>,
) -> Component {
    let mut component = base.unwrap_or_default();
    for (name, handler) in extensions {
        component.helpers.register(name, handler);
    }

    let mut final_config = Vec::new();
    build_level(
        &mut component.tree,
        &default_config,
        user_config.as_deref(),
        &mut final_config,
        None,
    );

    component.default_config = default_config;
    component.user_config = user_config;
    component.final_config = final_config;
    component
}

/// Build one sibling level and recurse.
///
/// `users` is the sibling list of user overrides for this level, when the
/// user tree reaches this deep; `parent` is the element the new elements
/// attach under, absent at the root level.
fn build_level(
    tree: &mut ElementTree,
    defaults: &[ConfigNode],
    users: Option<&[ConfigNode]>,
    output: &mut Vec<RenderedNode>,
    parent: Option<ElementId>,
) {
    for default_node in defaults {
        let name = default_node.name.as_str();
        let user_node = find_override(name, users);

        // Per-leaf-field precedence: a set user value wins, else default.
        let element_spec = prefer(
            user_node.and_then(|node| node.element.as_ref()),
            default_node.element.as_ref(),
            ElementSpec::is_set,
        );
        let content_spec = prefer(
            user_node.and_then(|node| node.content.as_ref()),
            default_node.content.as_ref(),
            ContentSpec::is_set,
        );
        let on_click = prefer_handler(
            user_node.and_then(|node| node.on_click.clone()),
            default_node.on_click.clone(),
        );
        let on_mouse_over = prefer_handler(
            user_node.and_then(|node| node.on_mouse_over.clone()),
            default_node.on_mouse_over.clone(),
        );
        let on_mouse_out = prefer_handler(
            user_node.and_then(|node| node.on_mouse_out.clone()),
            default_node.on_mouse_out.clone(),
        );

        // The listener halves merge independently: a user node may override
        // just the event name or just the callback.
        let listener_callback = user_node
            .and_then(|node| node.event_listener.as_ref())
            .and_then(|listener| listener.callback.clone())
            .or_else(|| {
                default_node
                    .event_listener
                    .as_ref()
                    .and_then(|listener| listener.callback.clone())
            });
        let listener_event = resolve_event_name(
            user_node
                .and_then(|node| node.event_listener.as_ref())
                .and_then(|listener| listener.event.as_deref()),
            default_node
                .event_listener
                .as_ref()
                .and_then(|listener| listener.event.as_deref()),
        );

        let element = resolve_element(tree, element_spec, content_spec);

        // Default styles first, user styles after: conflicting properties
        // resolve last-write-wins in the style text.
        if let Some(declarations) = resolve_style(default_node.style.as_ref()) {
            apply_declarations(tree, element, &declarations);
        }
        if let Some(declarations) =
            resolve_style(user_node.and_then(|node| node.style.as_ref()))
        {
            apply_declarations(tree, element, &declarations);
        }

        if let (Some(event), Some(callback)) = (&listener_event, &listener_callback) {
            tree.add_event_listener(element, event, Rc::clone(callback));
        }

        tree.set_attribute(element, "id", name);

        if let Some(parent_id) = parent {
            tree.append_child(parent_id, element);
        }

        output.push(RenderedNode {
            name: name.to_string(),
            element,
            on_click,
            on_mouse_over,
            on_mouse_out,
            event_listener: EventBinding {
                event: listener_event,
                callback: listener_callback,
            },
            children: Vec::new(),
        });

        if !default_node.children.is_empty() {
            let user_children = user_node.map(|node| node.children.as_slice());
            if let Some(slot) = output.last_mut() {
                build_level(
                    tree,
                    &default_node.children,
                    user_children,
                    &mut slot.children,
                    Some(element),
                );
            }
        }
    }
}

/// Find the user override for a node name at one sibling level: linear
/// scan, first match wins, `None` when the level has no user list or the
/// name is empty.
fn find_override<'a>(name: &str, users: Option<&'a [ConfigNode]>) -> Option<&'a ConfigNode> {
    if name.is_empty() {
        return None;
    }
    users?.iter().find(|node| node.name == name)
}

/// Handlers have no empty state to filter; any user handler wins.
fn prefer_handler(user: Option<Handler>, default: Option<Handler>) -> Option<Handler> {
    user.or(default)
}
