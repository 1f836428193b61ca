//! Overview documents: the main structure prompt and the pack-level
//! instructions.

use crate::render::display_name;
use figtree_analysis::{AnalysisResult, Element, FrameSet};

/// Tags that can appear as top-level sections in the overview.
const SECTION_TAGS: [&str; 3] = ["FRAME", "SECTION", "GROUP"];
/// Entries shown per level in the root-structure listing.
const STRUCTURE_LIMIT: usize = 15;
/// Levels shown in the root-structure listing.
const STRUCTURE_DEPTH: usize = 2;

/// The entry-point prompt: overall shape, leading tokens, identified
/// sections, and how to use the rest of the pack.
pub fn main_structure(analysis: &AnalysisResult) -> String {
    let stats = &analysis.statistics;
    let (name, width, height) = match analysis.target_node.as_ref().and_then(Element::as_node) {
        Some(node) => (display_name(node).to_string(), node.size.width, node.size.height),
        None => ("N/A".to_string(), 0.0, 0.0),
    };
    let main_types: Vec<&str> = stats
        .type_counts
        .keys()
        .take(10)
        .map(String::as_str)
        .collect();

    format!(
        "# MAIN STRUCTURE: {name}\n\
         \n\
         ## OVERVIEW\n\
         - **Name**: {name}\n\
         - **Size**: {width} × {height} px\n\
         - **Total elements**: {total}\n\
         - **Nesting levels**: {depth}\n\
         - **Main element types**: {types}\n\
         \n\
         ## ROOT STRUCTURE (first {levels} levels)\n\
         {structure}\n\
         \n\
         ## DESIGN SYSTEM (leading tokens)\n\
         {tokens}\n\
         \n\
         ## MAIN SECTIONS\n\
         {sections}\n\
         \n\
         ## ASSEMBLY GUIDE\n\
         1. Start with a base HTML skeleton following the root hierarchy.\n\
         2. Work through the per-level prompts in levels/.\n\
         3. Use components/ for the complex pieces.\n\
         4. Follow the design system in design_tokens.txt.\n\
         \n\
         ## NEXT STEP\n\
         Use the prompts in levels/ and components/ for the detailed build.\n",
        name = name,
        width = width,
        height = height,
        total = stats.total_elements,
        depth = stats.max_depth,
        types = main_types.join(", "),
        levels = STRUCTURE_DEPTH,
        structure = format_root_structure(&analysis.full_hierarchy),
        tokens = format_leading_tokens(analysis),
        sections = identify_sections(&analysis.full_hierarchy),
    )
}

fn format_root_structure(hierarchy: &[Element]) -> String {
    let mut lines = Vec::new();
    format_level(hierarchy, 0, &mut lines);
    lines.join("\n")
}

fn format_level(elements: &[Element], depth: usize, lines: &mut Vec<String>) {
    for element in elements.iter().take(STRUCTURE_LIMIT) {
        let Some(node) = element.as_node() else { continue };
        let indent = "  ".repeat(depth);
        let mut line = format!(
            "{}- **{}**: {}",
            indent,
            node.node_type,
            display_name(node)
        );
        if !node.children.is_empty() {
            line.push_str(&format!(" ({} children)", node.children.len()));
        }
        if let Some(background) = &node.styles.background {
            line.push_str(&format!(" | background: {}", background));
        }
        lines.push(line);
        if depth < STRUCTURE_DEPTH && !node.children.is_empty() {
            format_level(&node.children, depth + 1, lines);
        }
    }
}

fn format_leading_tokens(analysis: &AnalysisResult) -> String {
    let tokens = &analysis.design_tokens;
    let mut lines = Vec::new();

    if !tokens.colors.is_empty() {
        lines.push("**Leading colors:**".to_string());
        for (name, color) in tokens.colors.iter().take(5) {
            lines.push(format!("- `{}`: `{}`", name, color));
        }
    }
    if !tokens.typography.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("**Leading typography:**".to_string());
        for (name, typo) in tokens.typography.iter().take(3) {
            lines.push(format!(
                "- `{}`: {} {}px",
                name, typo.font_family, typo.font_size
            ));
        }
    }
    lines.join("\n")
}

fn identify_sections(hierarchy: &[Element]) -> String {
    let sections: Vec<String> = hierarchy
        .iter()
        .take(10)
        .filter_map(Element::as_node)
        .filter(|node| SECTION_TAGS.contains(&node.node_type.as_str()))
        .map(|node| {
            format!(
                "- **{}** ({}) - {} elements",
                display_name(node),
                classify_section(&node.name),
                node.children.len()
            )
        })
        .collect();
    if sections.is_empty() {
        "No sections identified".to_string()
    } else {
        sections.join("\n")
    }
}

/// Keyword classification of a section by its layer name.
pub fn classify_section(name: &str) -> &'static str {
    let name = name.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| name.contains(w));
    if contains_any(&["header", "nav", "menu"]) {
        "Navigation"
    } else if contains_any(&["hero", "banner", "main"]) {
        "Hero"
    } else if contains_any(&["footer", "bottom"]) {
        "Footer"
    } else if contains_any(&["card", "product", "item"]) {
        "Card"
    } else if contains_any(&["button", "btn", "cta"]) {
        "Button"
    } else if contains_any(&["form", "input", "field"]) {
        "Form"
    } else {
        "Section"
    }
}

/// Pack-level instructions: what was generated and in which order to use it.
pub fn instructions(analysis: &AnalysisResult, frames: &FrameSet) -> String {
    let stats = &analysis.statistics;
    format!(
        "# SMART PROMPTS FOR THIS DESIGN\n\
         \n\
         ## OVERVIEW\n\
         - Total elements: {total}\n\
         - Nesting levels: {depth}\n\
         - Distinct types: {types}\n\
         - Frames exported: {frames}\n\
         \n\
         ## PACK LAYOUT\n\
         - `main_structure.txt` - overall structure, leading tokens, sections\n\
         - `levels/` - one prompt per nesting level (0-3)\n\
         - `element_types/` - one prompt per common element type\n\
         - `components/` - the most complex frames, one per file\n\
         - `design_tokens.txt` - the full design system\n\
         \n\
         ## WORKING ORDER\n\
         1. Read main_structure.txt for the big picture.\n\
         2. Build level by level from levels/.\n\
         3. Style concrete types with element_types/.\n\
         4. Implement complex components from components/.\n\
         5. Keep design_tokens.txt open as the single source for styling.\n\
         \n\
         ## TIPS\n\
         - Work through the prompts in order; each one is self-contained.\n\
         - Verify sizes and positions against the listed dimensions.\n\
         - Prefer CSS Grid/Flexbox for container layout.\n\
         - Factor repeated structures into reusable components.\n",
        total = stats.total_elements,
        depth = stats.max_depth,
        types = stats.type_counts.len(),
        frames = frames.total_frames,
    )
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
    fn classification_keywords() {
        assert_eq!(classify_section("Top Nav Bar"), "Navigation");
        assert_eq!(classify_section("Hero banner"), "Hero");
        assert_eq!(classify_section("Page Footer"), "Footer");
        assert_eq!(classify_section("Product card"), "Card");
        assert_eq!(classify_section("CTA"), "Button");
        assert_eq!(classify_section("Signup form"), "Form");
        assert_eq!(classify_section("Mystery"), "Section");
    }

    #[test]
    fn main_structure_names_sections() {
        let analysis = analyze_node(&frame(
            "page",
            vec![frame("Header", Vec::new()), frame("Footer", Vec::new())],
        ));
        let doc = main_structure(&analysis);
        assert!(doc.contains("# MAIN STRUCTURE: page"));
        assert!(doc.contains("**Header** (Navigation)"));
        assert!(doc.contains("**Footer** (Footer)"));
        assert!(doc.contains("- **Total elements**: 3"));
    }

    #[test]
    fn missing_target_renders_placeholder() {
        let doc = main_structure(&figtree_analysis::AnalysisResult::default());
        assert!(doc.contains("# MAIN STRUCTURE: N/A"));
    }
}
