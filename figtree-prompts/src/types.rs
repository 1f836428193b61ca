//! Per-element-type prompts.

use crate::render::{dims, display_name};
use crate::{sanitize_name, PromptDoc};
use figtree_analysis::{AnalysisResult, AnnotatedNode, Element};

/// The type tags worth a dedicated prompt.
const COMMON_TYPES: [&str; 6] = ["FRAME", "TEXT", "RECTANGLE", "COMPONENT", "INSTANCE", "GROUP"];
/// Elements sampled per type.
const TYPE_LIMIT: usize = 20;
/// Samples listed in the document body.
const SAMPLE_LIMIT: usize = 10;

pub fn type_docs(analysis: &AnalysisResult) -> Vec<PromptDoc> {
    COMMON_TYPES
        .iter()
        .filter_map(|tag| {
            let elements: Vec<&AnnotatedNode> = analysis
                .all_elements
                .iter()
                .filter_map(Element::as_node)
                .filter(|node| node.node_type == *tag)
                .take(TYPE_LIMIT)
                .collect();
            if elements.is_empty() {
                return None;
            }
            Some(PromptDoc::new(
                format!("element_types/{}.txt", sanitize_name(tag)),
                type_doc(tag, &elements),
            ))
        })
        .collect()
}

fn type_doc(tag: &str, elements: &[&AnnotatedNode]) -> String {
    format!(
        "# ELEMENT TYPE: {tag}\n\
         \n\
         ## SAMPLE ELEMENTS ({count})\n\
         {samples}\n\
         \n\
         ## SHARED PROPERTIES\n\
         {patterns}\n\
         \n\
         ## IMPLEMENTATION GUIDE\n\
         {guide}\n\
         \n\
         ## TASK\n\
         Create reusable styles and markup for {tag} elements.\n",
        tag = tag,
        count = elements.len(),
        samples = elements
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|node| format!("- **{}** | {}px", display_name(node), dims(node)))
            .collect::<Vec<_>>()
            .join("\n"),
        patterns = type_patterns(elements),
        guide = implementation_guide(tag),
    )
}

fn type_patterns(elements: &[&AnnotatedNode]) -> String {
    if elements.is_empty() {
        return "No elements to analyze".to_string();
    }
    let widths: Vec<f64> = elements.iter().map(|node| node.size.width).collect();
    let heights: Vec<f64> = elements.iter().map(|node| node.size.height).collect();
    let min_max = |values: &[f64]| {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    };
    let (wmin, wmax) = min_max(&widths);
    let (hmin, hmax) = min_max(&heights);

    let mut lines = vec![
        format!("- Count: {}", elements.len()),
        format!("- Sizes: {}-{}px × {}-{}px", wmin, wmax, hmin, hmax),
    ];

    let mut backgrounds: Vec<&str> = elements
        .iter()
        .filter_map(|node| node.styles.background.as_deref())
        .collect();
    backgrounds.sort_unstable();
    backgrounds.dedup();
    if !backgrounds.is_empty() {
        let listed: Vec<&str> = backgrounds.into_iter().take(3).collect();
        lines.push(format!("- Backgrounds: {}", listed.join(", ")));
    }
    lines.join("\n")
}

fn implementation_guide(tag: &str) -> &'static str {
    match tag {
        "FRAME" => "Use a div with Flexbox/Grid. Respect padding and item spacing.",
        "TEXT" => "Use semantic tags (h1-h6, p, span). Keep the exact font sizes.",
        "RECTANGLE" => "Use a div with background-color. Respect border-radius.",
        "COMPONENT" => "Build a reusable, parameterized component.",
        "INSTANCE" => "Render as an instance of the base component.",
        "GROUP" => "Use a relatively positioned div wrapper.",
        _ => "Use semantic HTML tags and modern CSS.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtree_analysis::analyze_node;
    use figtree_analysis::schema::RawNode;

    #[test]
    fn only_present_types_get_docs() {
        let root = RawNode {
            name: "page".to_string(),
            node_type: "FRAME".to_string(),
            children: vec![RawNode {
                node_type: "TEXT".to_string(),
                name: "title".to_string(),
                ..RawNode::default()
            }],
            ..RawNode::default()
        };
        let docs = type_docs(&analyze_node(&root));
        let paths: Vec<&str> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["element_types/frame.txt", "element_types/text.txt"]);
        assert!(docs[1].content.contains("# ELEMENT TYPE: TEXT"));
        assert!(docs[1].content.contains("semantic tags"));
    }
}
