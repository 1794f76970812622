//! Lookup over rendered trees.
//!
//! Both lookups are first-match-wins linear scans; the subtree variant
//! recurses depth-first into each node's children when the node itself does
//! not match. Typed fields cannot be addressed by a string name, so the
//! "field equals value" form becomes a predicate, with ready-made
//! predicates for the two fields callers actually search by.

use trellis_dom::ElementId;

use crate::component::RenderedNode;

/// Find the first node at one sibling level matching the predicate.
pub fn find_element<'a, P>(nodes: &'a [RenderedNode], predicate: P) -> Option<&'a RenderedNode>
where
    P: Fn(&RenderedNode) -> bool,
{
    nodes.iter().find(|node| predicate(node))
}

/// Find the first node anywhere in the subtree matching the predicate,
/// depth-first.
pub fn find_child_element<'a, P>(
    nodes: &'a [RenderedNode],
    predicate: P,
) -> Option<&'a RenderedNode>
where
    P: Fn(&RenderedNode) -> bool,
{
    find_in_subtree(nodes, &predicate)
}

fn find_in_subtree<'a, P>(nodes: &'a [RenderedNode], predicate: &P) -> Option<&'a RenderedNode>
where
    P: Fn(&RenderedNode) -> bool,
{
    for node in nodes {
        if predicate(node) {
            return Some(node);
        }
        if let Some(found) = find_in_subtree(&node.children, predicate) {
            return Some(found);
        }
    }
    None
}

/// Predicate matching a node by name.
pub fn by_name(name: &str) -> impl Fn(&RenderedNode) -> bool + '_ {
    move |node| node.name == name
}

/// Predicate matching a node by its element handle.
pub fn by_element(id: ElementId) -> impl Fn(&RenderedNode) -> bool {
    move |node| node.element == id
}
