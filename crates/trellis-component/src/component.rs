//! The component context and its capability set.
//!
//! A [`Component`] owns everything a build produces: the live element tree,
//! the input configuration trees, the merged output tree, a helper
//! capability set, and a free-form state bag for callers. All event
//! callbacks receive the component mutably, so a callback can reach any
//! element, any helper, and any sibling callback's state.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use strum_macros::{Display, EnumString};

use trellis_dom::{ElementId, ElementTree, Event, EventListener};

use crate::config::{ConfigNode, Handler};
use crate::find::find_child_element;

/// Events with a dedicated component-aware handler slot on each node.
///
/// Dispatch parses the event name into this enum; all other event names are
/// served only by native listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum IntrinsicEvent {
    /// The `click` event.
    #[strum(serialize = "click")]
    Click,
    /// The `mouseover` event.
    #[strum(serialize = "mouseover")]
    MouseOver,
    /// The `mouseout` event.
    #[strum(serialize = "mouseout")]
    MouseOut,
}

/// The resolved named-listener binding recorded on a rendered node.
#[derive(Clone, Default)]
pub struct EventBinding {
    /// The event name, when one resolved.
    pub event: Option<String>,
    /// The native callback, when one resolved.
    pub callback: Option<EventListener>,
}

impl fmt::Debug for EventBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBinding")
            .field("event", &self.event)
            .field("callback", &self.callback.as_ref().map(|_| "<listener>"))
            .finish()
    }
}

/// One entry in the merged output tree: the constructed element together
/// with its resolved metadata.
///
/// The node's style lives on the element inside the component's tree and is
/// read through [`RenderedNode::style_text`], so reads always observe the
/// current text, not a copy from build time.
#[derive(Clone)]
pub struct RenderedNode {
    /// The node name; equals the source default node's name and the
    /// element's `id` attribute.
    pub name: String,
    /// Handle to the constructed element.
    pub element: ElementId,
    /// Resolved click handler.
    pub on_click: Option<Handler>,
    /// Resolved mouse-over handler.
    pub on_mouse_over: Option<Handler>,
    /// Resolved mouse-out handler.
    pub on_mouse_out: Option<Handler>,
    /// Resolved named-listener binding.
    pub event_listener: EventBinding,
    /// Ordered child nodes, built incrementally during traversal.
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    /// The element's current style text.
    pub fn style_text<'a>(&self, tree: &'a ElementTree) -> &'a str {
        tree.style_text(self.element).unwrap_or("")
    }
}

impl fmt::Debug for RenderedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedNode")
            .field("name", &self.name)
            .field("element", &self.element)
            .field("on_click", &self.on_click.as_ref().map(|_| "<handler>"))
            .field(
                "on_mouse_over",
                &self.on_mouse_over.as_ref().map(|_| "<handler>"),
            )
            .field(
                "on_mouse_out",
                &self.on_mouse_out.as_ref().map(|_| "<handler>"),
            )
            .field("event_listener", &self.event_listener)
            .field("children", &self.children)
            .finish()
    }
}

/// The component's capability set: a fixed table of color utilities plus
/// caller-registered extension handlers.
///
/// The color capabilities are plain function fields so a callback can call
/// them through the component it already holds:
///
/// ```ignore
/// let hex = (component.helpers.rgb_code)("rgb(255, 0, 0)");
/// ```
#[derive(Clone)]
pub struct Helpers {
    /// Normalize a color code (`#hex`, `rgb()`, or named) to hex notation.
    pub rgb_code: fn(&str) -> Option<String>,
    /// Encode one color channel as a two-digit hex pair.
    pub hex_pair: fn(&str) -> String,
    /// Shift a hex color's brightness by a percentage.
    pub adjust_brightness: fn(&str, i32) -> Option<String>,
    /// Look up a named color's hex code.
    pub hex_for_name: fn(&str) -> Option<&'static str>,
    extensions: HashMap<String, Handler>,
}

impl Helpers {
    /// Register a named extension handler; a later registration under the
    /// same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, handler: Handler) {
        let _ = self.extensions.insert(name.into(), handler);
    }

    /// Fetch an extension handler by name. The handler is cloned out so the
    /// caller can invoke it with the component borrowed mutably.
    pub fn extension(&self, name: &str) -> Option<Handler> {
        self.extensions.get(name).cloned()
    }
}

impl Default for Helpers {
    fn default() -> Self {
        Helpers {
            rgb_code: trellis_color::rgb_to_hex,
            hex_pair: trellis_color::hex_pair,
            adjust_brightness: trellis_color::adjust_brightness,
            hex_for_name: trellis_color::hex_code_for_name,
            extensions: HashMap::new(),
        }
    }
}

impl fmt::Debug for Helpers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Helpers")
            .field("extensions", &names)
            .finish()
    }
}

/// The mutable context object passed through the whole build and into every
/// callback.
#[derive(Debug, Default)]
pub struct Component {
    /// The live element tree the build populated.
    pub tree: ElementTree,
    /// The default configuration tree the build consumed.
    pub default_config: Vec<ConfigNode>,
    /// The user override tree, when one was supplied.
    pub user_config: Option<Vec<ConfigNode>>,
    /// The merged output tree: default config updated with user config.
    pub final_config: Vec<RenderedNode>,
    /// The capability set shared by all callbacks.
    pub helpers: Helpers,
    /// Caller-seeded state, available to every callback.
    pub state: HashMap<String, Value>,
}

impl Component {
    /// Create an empty component, ready to be seeded and built.
    pub fn new() -> Self {
        Component::default()
    }

    /// Deliver an event to an element, the way the host event loop would:
    /// native listeners registered on the element fire first, then the
    /// owning rendered node's component-aware handler for the intrinsic
    /// event, if any.
    ///
    /// Invocations are strictly sequential; a handler may mutate the
    /// component and any element before the next delivery.
    pub fn dispatch(&mut self, target: ElementId, event: &Event) {
        self.tree.fire(target, event);

        let Ok(intrinsic) = event.name.parse::<IntrinsicEvent>() else {
            return;
        };
        let handler = find_child_element(&self.final_config, |node| node.element == target)
            .and_then(|node| match intrinsic {
                IntrinsicEvent::Click => node.on_click.clone(),
                IntrinsicEvent::MouseOver => node.on_mouse_over.clone(),
                IntrinsicEvent::MouseOut => node.on_mouse_out.clone(),
            });
        if let Some(handler) = handler {
            handler(event, self, target);
        }
    }

    /// Invoke a registered extension handler by name with the usual
    /// callback arguments. Unknown names are ignored.
    pub fn call_extension(&mut self, name: &str, event: &Event, element: ElementId) {
        if let Some(handler) = self.helpers.extension(name) {
            handler(event, self, element);
        }
    }
}
