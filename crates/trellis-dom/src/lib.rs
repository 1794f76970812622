//! Element tree surface for the Trellis component builder.
//!
//! This crate provides an arena-based element tree loosely following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/), reduced to the five
//! capabilities the builder needs from its host surface: element creation,
//! attribute get/set, style-text assignment, append-child, and native
//! event-listener registration.
//!
//! # Design
//!
//! The tree uses arena allocation with [`ElementId`] indices for all
//! relationships, providing O(1) access and traversal without borrow checker
//! issues. Elements start detached; a root element is simply one that is
//! never appended to a parent.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the element tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
///
/// `ElementId` provides O(1) access to any element in the tree without
/// borrowing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// A single element in the tree.
///
/// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
/// "Element nodes are simply known as elements."
///
/// Text content is stored directly on the element rather than as child text
/// nodes; the builder only ever assigns whole-element content.
#[derive(Debug, Clone)]
pub struct Element {
    /// "An element's local name"
    pub tag_name: String,

    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,

    /// Rendered text content of the element.
    pub text: String,

    /// Raw style text, in `name : value;` declaration form.
    ///
    /// [§ 6.7.1 The CSSStyleDeclaration interface](https://www.w3.org/TR/cssom-1/#the-cssstyledeclaration-interface)
    /// This is the element's `cssText` equivalent: assigned and appended to
    /// as plain text, last declaration for a property wins.
    pub style: String,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<ElementId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<ElementId>,
}

impl Element {
    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    pub fn id(&self) -> Option<&String> {
        self.attrs.get("id")
    }
}

/// An event delivered to listeners and handlers.
///
/// [§ 2.2 Interface Event](https://dom.spec.whatwg.org/#interface-event)
/// "Events allow for signaling that something has occurred."
#[derive(Debug, Clone)]
pub struct Event {
    /// The event name, e.g. `click` or `mouseover`.
    pub name: String,
}

impl Event {
    /// Create an event with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Event { name: name.into() }
    }
}

/// A native event listener: receives the event only, no wrapping.
///
/// [§ 2.7 Interface EventTarget](https://dom.spec.whatwg.org/#interface-eventtarget)
/// "The callback argument sets the callback that will be invoked when the
/// event is dispatched."
pub type EventListener = Rc<dyn Fn(&Event)>;

/// A listener registration for one element.
#[derive(Clone)]
struct ListenerEntry {
    event: String,
    callback: EventListener,
}

impl fmt::Debug for ListenerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerEntry")
            .field("event", &self.event)
            .field("callback", &"<listener>")
            .finish()
    }
}

/// Arena-based element tree with O(1) element access.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
/// "The DOM represents a document as a tree."
///
/// All elements live in a contiguous vector, addressed by [`ElementId`].
/// Listener registrations are kept in a side table so [`Element`] stays a
/// plain data struct.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    nodes: Vec<Element>,
    listeners: HashMap<ElementId, Vec<ListenerEntry>>,
}

impl ElementTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        ElementTree {
            nodes: Vec::new(),
            listeners: HashMap::new(),
        }
    }

    /// [§ 4.5 createElement](https://dom.spec.whatwg.org/#dom-document-createelement)
    /// "Creates an element with the given local name."
    ///
    /// The new element is detached: no parent, no children, empty attribute
    /// list, empty text and style.
    pub fn create_element(&mut self, tag_name: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Element {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
            text: String::new(),
            style: String::new(),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Get an element by its ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to an element by its ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent`, preserving sibling
    /// order.
    ///
    /// # Panics
    /// Panics if either ID was not allocated by this tree.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    /// Get all children of an element, in insertion order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// [§ 4.9 getAttribute](https://dom.spec.whatwg.org/#dom-element-getattribute)
    /// "Returns element's first attribute whose qualified name is
    /// qualifiedName, and null otherwise."
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// [§ 4.9 setAttribute](https://dom.spec.whatwg.org/#dom-element-setattribute)
    /// "Sets the value of element's first attribute whose qualified name is
    /// qualifiedName to value."
    ///
    /// Unknown IDs are ignored.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            let _ = element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    /// Get the text content of an element.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(|e| e.text.as_str())
    }

    /// Set the text content of an element. Unknown IDs are ignored.
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.get_mut(id) {
            element.text = text.to_string();
        }
    }

    /// Get the raw style text of an element.
    pub fn style_text(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(|e| e.style.as_str())
    }

    /// Assign the raw style text of an element, replacing any previous text.
    /// Unknown IDs are ignored.
    pub fn set_style_text(&mut self, id: ElementId, style: &str) {
        if let Some(element) = self.get_mut(id) {
            element.style = style.to_string();
        }
    }

    /// [§ 2.7 addEventListener](https://dom.spec.whatwg.org/#dom-eventtarget-addeventlistener)
    /// "Appends an event listener for events whose type attribute value is
    /// type."
    ///
    /// Multiple listeners may be registered for the same element and event;
    /// they fire in registration order.
    pub fn add_event_listener(&mut self, id: ElementId, event: &str, callback: EventListener) {
        self.listeners.entry(id).or_default().push(ListenerEntry {
            event: event.to_string(),
            callback,
        });
    }

    /// [§ 2.9 Dispatching events](https://dom.spec.whatwg.org/#dispatching-events)
    ///
    /// Invoke every listener registered on `target` for the event's name.
    /// There is no capture or bubble phase; delivery is to the target only.
    pub fn fire(&self, target: ElementId, event: &Event) {
        let matching: Vec<EventListener> = self
            .listeners
            .get(&target)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.event == event.name)
                    .map(|entry| Rc::clone(&entry.callback))
                    .collect()
            })
            .unwrap_or_default();

        for callback in matching {
            callback(event);
        }
    }
}
