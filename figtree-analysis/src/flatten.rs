//! Hierarchy flattener
//!
//! Produces an order-preserving flat list of every element in an annotated
//! tree. Entries are independent shallow copies with their children cleared;
//! the tree itself is never mutated. Pre-order, root first, so list index
//! order equals the analyzer's visitation order.

use crate::element::{AnnotatedNode, Element};

pub fn flatten(root: &Element) -> Vec<Element> {
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn walk(element: &Element, out: &mut Vec<Element>) {
    match element {
        Element::Node(node) => {
            out.push(Element::Node(shallow_copy(node)));
            for child in &node.children {
                walk(child, out);
            }
        }
        Element::Marker(marker) => out.push(Element::Marker(marker.clone())),
    }
}

/// Copies every field except the subtree; the children stay behind in the
/// source tree rather than being cloned and thrown away.
fn shallow_copy(node: &AnnotatedNode) -> AnnotatedNode {
    AnnotatedNode {
        id: node.id.clone(),
        original_id: node.original_id.clone(),
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        depth: node.depth,
        size: node.size,
        position: node.position,
        layout: node.layout.clone(),
        styles: node.styles.clone(),
        content: node.content.clone(),
        effects: node.effects.clone(),
        visible: node.visible,
        locked: node.locked,
        children: Vec::new(),
    }
}
