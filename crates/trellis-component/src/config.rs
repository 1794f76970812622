//! Configuration tree model.
//!
//! A component is described by two structurally parallel trees of
//! [`ConfigNode`]: the default tree supplied by the component author and an
//! optional user tree carrying per-node overrides. Field values are tagged
//! variants rather than free-form dynamic values: a field is either a
//! literal, a zero-argument provider, or absent, and resolution is a pattern
//! match with a documented permissive fallback.

use std::fmt;
use std::rc::Rc;

use trellis_dom::{ElementId, ElementTree, Event, EventListener};

use crate::component::Component;
use crate::style::StyleDeclaration;

/// Component-aware callback, bound during the build.
///
/// Receives the event, the component, and the element the callback was bound
/// to, in that order; it may mutate the component or any element in the
/// tree. Invocations are serialized by the host dispatch loop.
pub type Handler = Rc<dyn Fn(&Event, &mut Component, ElementId)>;

/// Zero-argument provider of a tag name.
pub type TagProvider = Rc<dyn Fn() -> String>;

/// Zero-argument provider of content text.
pub type ContentProvider = Rc<dyn Fn() -> String>;

/// Zero-argument provider of style declarations.
pub type StyleProvider = Rc<dyn Fn() -> Vec<StyleDeclaration>>;

/// Provider of a caller-constructed element.
///
/// The provider allocates (or reuses) an element in the given tree and
/// returns its handle; the builder uses the handle as-is and does not apply
/// resolved content to it.
pub type ElementProvider = Rc<dyn Fn(&mut ElementTree) -> ElementId>;

/// How a node's element is obtained.
#[derive(Clone)]
pub enum ElementSpec {
    /// A caller-constructed element, used as-is.
    Provided(ElementProvider),
    /// A tag name for a new element.
    Tag(String),
    /// A provider invoked for the tag name of a new element.
    TagProvider(TagProvider),
}

impl ElementSpec {
    /// Whether this spec counts as an override. An empty tag name does not,
    /// mirroring the falsy-override rule of the merge.
    pub(crate) fn is_set(&self) -> bool {
        match self {
            ElementSpec::Tag(tag) => !tag.is_empty(),
            ElementSpec::Provided(_) | ElementSpec::TagProvider(_) => true,
        }
    }
}

impl fmt::Debug for ElementSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementSpec::Provided(_) => f.write_str("Provided(<element provider>)"),
            ElementSpec::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            ElementSpec::TagProvider(_) => f.write_str("TagProvider(<tag provider>)"),
        }
    }
}

/// How a node's content text is obtained.
#[derive(Clone)]
pub enum ContentSpec {
    /// Literal content text.
    Text(String),
    /// A provider invoked for the content text.
    Provider(ContentProvider),
}

impl ContentSpec {
    /// Whether this spec counts as an override; empty literal text does not.
    pub(crate) fn is_set(&self) -> bool {
        match self {
            ContentSpec::Text(text) => !text.is_empty(),
            ContentSpec::Provider(_) => true,
        }
    }
}

impl fmt::Debug for ContentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSpec::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ContentSpec::Provider(_) => f.write_str("Provider(<content provider>)"),
        }
    }
}

/// How a node's style declarations are obtained.
#[derive(Clone)]
pub enum StyleSpec {
    /// Raw style text in `name: value; name: value` form.
    Text(String),
    /// An explicit declaration list, applied in order.
    Declarations(Vec<StyleDeclaration>),
    /// A provider invoked for a declaration list. An empty result counts as
    /// "no styles to apply".
    Provider(StyleProvider),
}

impl fmt::Debug for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSpec::Text(text) => f.debug_tuple("Text").field(text).finish(),
            StyleSpec::Declarations(declarations) => {
                f.debug_tuple("Declarations").field(declarations).finish()
            }
            StyleSpec::Provider(_) => f.write_str("Provider(<style provider>)"),
        }
    }
}

/// A named event listener registration: event name plus native callback.
///
/// The callback is registered directly on the element through the tree's
/// listener mechanism and receives the event only, without wrapping. Both
/// halves merge independently, so a user node may override just the event
/// name or just the callback.
#[derive(Clone, Default)]
pub struct EventListenerSpec {
    /// The event name to listen for.
    pub event: Option<String>,
    /// The native callback to invoke.
    pub callback: Option<EventListener>,
}

impl fmt::Debug for EventListenerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListenerSpec")
            .field("event", &self.event)
            .field(
                "callback",
                &self.callback.as_ref().map(|_| "<listener>"),
            )
            .finish()
    }
}

/// A node in a default or user configuration tree.
///
/// `name` is the merge key: a user node overrides the default node with the
/// same name at the same sibling level. Any field may be absent; absent
/// fields in a user node fall back to the default node's value, per leaf
/// field (the merge is shallow, never deep).
#[derive(Clone, Default)]
pub struct ConfigNode {
    /// Merge key and resulting element identifier.
    pub name: String,
    /// Element descriptor; absent degrades to a default `div`.
    pub element: Option<ElementSpec>,
    /// Content descriptor; absent resolves to empty text.
    pub content: Option<ContentSpec>,
    /// Style descriptor; absent applies no styles.
    pub style: Option<StyleSpec>,
    /// Click handler.
    pub on_click: Option<Handler>,
    /// Mouse-over handler.
    pub on_mouse_over: Option<Handler>,
    /// Mouse-out handler.
    pub on_mouse_out: Option<Handler>,
    /// Named event listener registration.
    pub event_listener: Option<EventListenerSpec>,
    /// Ordered child nodes; empty for leaves.
    pub children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create a node with the given name and no other configuration.
    pub fn new(name: impl Into<String>) -> Self {
        ConfigNode {
            name: name.into(),
            ..ConfigNode::default()
        }
    }
}

impl fmt::Debug for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigNode")
            .field("name", &self.name)
            .field("element", &self.element)
            .field("content", &self.content)
            .field("style", &self.style)
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
