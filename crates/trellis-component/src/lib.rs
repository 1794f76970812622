//! Declarative component tree builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Configuration model** - parallel default/user trees of [`ConfigNode`]
//!   with tagged-variant field specs (literal, provider, or absent)
//! - **Merge-and-build traversal** - one depth-first pass that merges user
//!   overrides over defaults per leaf field, constructs each element on the
//!   tree surface, applies default then override styles, wires callbacks,
//!   and records the merged result as a [`RenderedNode`] tree
//! - **Component context** - [`Component`] owns the element tree, the three
//!   configuration trees, a [`Helpers`] capability set (color utilities plus
//!   named extensions), caller state, and serialized event dispatch
//! - **Ready-made hover handlers** - brighten-on-mouseover /
//!   restore-on-mouseout for text color and background
//! - **Raw JSON configuration** - permissive dotted-path probing of
//!   free-form config trees, and file loading
//! - **Tree lookup** - first-match search over one level or a whole subtree
//!
//! # Degradation policy
//!
//! The build never fails: unsupported or absent configuration input resolves
//! to documented defaults (a `div` element, empty content, no styles), and
//! lookups return `None` rather than erroring. Input degradations that point
//! at a malformed config file are reported once through the warning system.

/// Recursive merge-and-build traversal and the public build entry point.
pub mod builder;
/// Component context, capability set, rendered output tree, dispatch.
pub mod component;
/// Configuration tree model with tagged-variant field specs.
pub mod config;
/// First-match lookup over rendered trees.
pub mod find;
/// Ready-made hover handlers.
pub mod handlers;
/// Raw JSON configuration loading.
pub mod json;
/// Dotted-path access into raw JSON trees.
pub mod path;
/// Style declaration parsing and application.
pub mod style;

mod resolve;

// Re-exports for convenience
pub use builder::build_component;
pub use component::{Component, EventBinding, Helpers, IntrinsicEvent, RenderedNode};
pub use config::{
    ConfigNode, ContentProvider, ContentSpec, ElementProvider, ElementSpec, EventListenerSpec,
    Handler, StyleProvider, StyleSpec, TagProvider,
};
pub use find::{by_element, by_name, find_child_element, find_element};
pub use handlers::{
    default_on_mouse_out_background, default_on_mouse_out_color, default_on_mouse_over_background,
    default_on_mouse_over_color,
};
pub use json::{ConfigError, config_from_value, load_config};
pub use path::{get_path, is_truthy, set_path};
pub use style::{StyleDeclaration, parse_style_text, set_style_property, style_property};
