//! Small shared formatting helpers.

use figtree_analysis::AnnotatedNode;

/// `320×200` from a node's size.
pub(crate) fn dims(node: &AnnotatedNode) -> String {
    format!("{}×{}", node.size.width, node.size.height)
}

/// One bullet describing an element: type, name, size, background if any.
pub(crate) fn element_line(node: &AnnotatedNode) -> String {
    let mut line = format!(
        "- **{}**: {} | {}px",
        node.node_type,
        display_name(node),
        dims(node)
    );
    if let Some(background) = &node.styles.background {
        line.push_str(&format!(" | background: {}", background));
    }
    line
}

pub(crate) fn display_name(node: &AnnotatedNode) -> &str {
    if node.name.is_empty() {
        "Unnamed"
    } else {
        &node.name
    }
}
