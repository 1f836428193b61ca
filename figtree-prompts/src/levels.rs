//! Per-nesting-level prompts.

use crate::render::element_line;
use crate::PromptDoc;
use figtree_analysis::{AnalysisResult, AnnotatedNode, Element};

/// Levels 0 through 3 get their own prompt; deeper levels rarely help.
const LEVELS: u32 = 4;
/// Elements sampled per level.
const LEVEL_LIMIT: usize = 50;
/// Elements listed in the document body.
const LIST_LIMIT: usize = 25;

pub fn level_docs(analysis: &AnalysisResult) -> Vec<PromptDoc> {
    (0..LEVELS)
        .filter_map(|level| {
            let elements = elements_at(analysis, level);
            if elements.is_empty() {
                return None;
            }
            Some(PromptDoc::new(
                format!("levels/level_{}.txt", level),
                level_doc(level, &elements),
            ))
        })
        .collect()
}

fn elements_at(analysis: &AnalysisResult, level: u32) -> Vec<&AnnotatedNode> {
    analysis
        .all_elements
        .iter()
        .filter_map(Element::as_node)
        .filter(|node| node.depth == level)
        .take(LEVEL_LIMIT)
        .collect()
}

fn level_doc(level: u32, elements: &[&AnnotatedNode]) -> String {
    format!(
        "# LEVEL {level}: DETAILED STRUCTURE\n\
         \n\
         ## ELEMENTS AT LEVEL {level}\n\
         {listing}\n\
         \n\
         ## LEVEL {level} PATTERNS\n\
         {patterns}\n\
         \n\
         ## COLORS USED ON THIS LEVEL\n\
         {colors}\n\
         \n\
         ## TASK\n\
         Build the HTML and CSS for the elements of this level, respecting\n\
         their relative positions and styles.\n",
        level = level,
        listing = elements
            .iter()
            .take(LIST_LIMIT)
            .map(|node| element_line(node))
            .collect::<Vec<_>>()
            .join("\n"),
        patterns = level_patterns(elements),
        colors = level_colors(elements),
    )
}

fn level_patterns(elements: &[&AnnotatedNode]) -> String {
    if elements.is_empty() {
        return "No elements to analyze".to_string();
    }
    let mut modes: Vec<&str> = elements
        .iter()
        .map(|node| node.layout.mode.as_str())
        .collect();
    modes.sort_unstable();
    modes.dedup();

    let mut types: Vec<&str> = elements
        .iter()
        .map(|node| node.node_type.as_str())
        .collect();
    types.sort_unstable();
    types.dedup();

    let avg_width: f64 =
        elements.iter().map(|node| node.size.width).sum::<f64>() / elements.len() as f64;

    format!(
        "- Layout modes: {}\n- Average element width: {:.1}px\n- Element types: {}",
        modes.join(", "),
        avg_width,
        types.join(", ")
    )
}

fn level_colors(elements: &[&AnnotatedNode]) -> String {
    let mut colors: Vec<&str> = elements
        .iter()
        .filter_map(|node| node.styles.background.as_deref())
        .collect();
    colors.sort_unstable();
    colors.dedup();
    if colors.is_empty() {
        return "Use the standard design-system tokens".to_string();
    }
    colors
        .iter()
        .take(5)
        .map(|color| format!("- `{}`", color))
        .collect::<Vec<_>>()
        .join("\n")
}
