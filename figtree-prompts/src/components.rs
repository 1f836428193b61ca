//! Prompts for the most complex components: frames with many direct
//! children, anywhere in the tree.

use crate::render::{dims, display_name};
use crate::{sanitize_name, PromptDoc};
use figtree_analysis::{AnalysisResult, AnnotatedNode, Element};

/// A frame qualifies as complex above this many direct children.
const COMPLEX_CHILDREN: usize = 5;
/// How many complex components get their own prompt.
const COMPONENT_LIMIT: usize = 10;
/// Structure listing depth and per-level width.
const STRUCTURE_DEPTH: usize = 3;
const STRUCTURE_LIMIT: usize = 10;

pub fn component_docs(analysis: &AnalysisResult) -> Vec<PromptDoc> {
    let Some(target) = analysis.target_node.as_ref().and_then(Element::as_node) else {
        return Vec::new();
    };

    let mut frames: Vec<&AnnotatedNode> = Vec::new();
    collect_complex(target, &mut frames);
    frames.sort_by(|a, b| b.children.len().cmp(&a.children.len()));

    frames
        .iter()
        .take(COMPONENT_LIMIT)
        .enumerate()
        .map(|(i, node)| {
            let stem = if node.name.is_empty() {
                format!("component_{}", i + 1)
            } else {
                sanitize_name(&node.name)
            };
            PromptDoc::new(
                format!("components/{}.txt", stem),
                component_doc(node, i + 1),
            )
        })
        .collect()
}

fn collect_complex<'a>(node: &'a AnnotatedNode, out: &mut Vec<&'a AnnotatedNode>) {
    if node.node_type == "FRAME" && node.children.len() > COMPLEX_CHILDREN {
        out.push(node);
    }
    for child in &node.children {
        if let Some(child) = child.as_node() {
            collect_complex(child, out);
        }
    }
}

fn component_doc(node: &AnnotatedNode, index: usize) -> String {
    format!(
        "# COMPLEX COMPONENT {index}: {name}\n\
         \n\
         ## KEY PROPERTIES\n\
         - Type: {node_type}\n\
         - Size: {dims} px\n\
         - Direct children: {children}\n\
         - Background: {background}\n\
         \n\
         ## STRUCTURE\n\
         {structure}\n\
         \n\
         ## STYLES\n\
         {styles}\n\
         \n\
         ## TASK\n\
         Build this component as a standalone, reusable unit with the\n\
         structure and styles above.\n",
        index = index,
        name = display_name(node),
        node_type = node.node_type,
        dims = dims(node),
        children = node.children.len(),
        background = node
            .styles
            .background
            .as_deref()
            .unwrap_or("transparent"),
        structure = format_structure(node),
        styles = format_styles(node),
    )
}

fn format_structure(node: &AnnotatedNode) -> String {
    let mut lines = Vec::new();
    walk_structure(&node.children, 1, &mut lines);
    if lines.is_empty() {
        "No child elements".to_string()
    } else {
        lines.join("\n")
    }
}

fn walk_structure(children: &[Element], depth: usize, lines: &mut Vec<String>) {
    for child in children.iter().take(STRUCTURE_LIMIT) {
        let Some(node) = child.as_node() else { continue };
        let indent = "  ".repeat(depth);
        let mut line = format!("{}- {}: {}", indent, node.node_type, display_name(node));
        if let Some(background) = &node.styles.background {
            line.push_str(&format!(" | background: {}", background));
        }
        lines.push(line);
        if depth < STRUCTURE_DEPTH && !node.children.is_empty() {
            walk_structure(&node.children, depth + 1, lines);
        }
    }
}

fn format_styles(node: &AnnotatedNode) -> String {
    let styles = &node.styles;
    let mut lines = Vec::new();
    if let Some(background) = &styles.background {
        lines.push(format!("- Background: `{}`", background));
    }
    if let Some(color) = &styles.border.color {
        lines.push(format!("- Border: `{}`, {}px", color, styles.border.width));
    }
    if styles.border.radius > 0.0 {
        lines.push(format!("- Border radius: {}px", styles.border.radius));
    }
    if lines.is_empty() {
        "Base styles only".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtree_analysis::analyze_node;
    use figtree_analysis::schema::RawNode;

    fn frame(name: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            name: name.to_string(),
            node_type: "FRAME".to_string(),
            children,
            ..RawNode::default()
        }
    }

    #[test]
    fn only_frames_with_many_children_qualify(){
        let busy = frame(
            "Card Grid",
            (0..6).map(|i| frame(&format!("card-{}", i), Vec::new())).collect(),
        );
        let quiet = frame("Sidebar", vec![frame("item", Vec::new())]);
        let analysis = analyze_node(&frame("page", vec![busy, quiet]));

        let docs = component_docs(&analysis);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].path, "components/card_grid.txt");
        assert!(docs[0].content.contains("- Direct children: 6"));
        assert!(docs[0].content.contains("- FRAME: card-0"));
    }

    #[test]
    fn no_target_yields_no_component_docs() {
        let docs = component_docs(&figtree_analysis::AnalysisResult::default());
        assert!(docs.is_empty());
    }
}
