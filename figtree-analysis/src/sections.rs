//! Section partitioner
//!
//! Splits an analyzed tree into independently consumable sections: the root
//! itself plus every first-level child whose type tag marks it as a
//! structural container. Each section owns a full copy of its subtree, a
//! token subset collected from that subtree alone, and a truncated view of
//! the global named tokens for context.

use crate::element::{AnnotatedNode, Element, Typography};
use crate::tokens::NamedTokens;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::info;

/// The one type tag treated as a structural container. Exact match only;
/// other container-like tags stay inside the root section's subtree.
pub const CONTAINER_TAG: &str = "FRAME";

/// How much of the global token maps each section carries for context.
const GLOBAL_COLORS_LIMIT: usize = 10;
const GLOBAL_TYPOGRAPHY_LIMIT: usize = 5;
const GLOBAL_SPACING_LIMIT: usize = 5;
const GLOBAL_RADIUS_LIMIT: usize = 5;

/// Raw token values appearing inside one section's subtree. Deduplicated and
/// value-ordered, but never renamed; typography keeps every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameTokens {
    pub colors: Vec<String>,
    pub typography: Vec<Typography>,
    pub spacing: Vec<u32>,
    pub border_radius: Vec<u32>,
}

/// Leading entries of the global named tokens, carried by every section as
/// informational context. Distinct from the section's own scoped subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalTokenView {
    pub colors: IndexMap<String, String>,
    pub typography: IndexMap<String, Typography>,
    pub spacing: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
}

impl GlobalTokenView {
    fn truncated(tokens: &NamedTokens) -> Self {
        fn take<V: Clone>(map: &IndexMap<String, V>, limit: usize) -> IndexMap<String, V> {
            map.iter()
                .take(limit)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        }
        Self {
            colors: take(&tokens.colors, GLOBAL_COLORS_LIMIT),
            typography: take(&tokens.typography, GLOBAL_TYPOGRAPHY_LIMIT),
            spacing: take(&tokens.spacing, GLOBAL_SPACING_LIMIT),
            border_radius: take(&tokens.border_radius, GLOBAL_RADIUS_LIMIT),
        }
    }
}

/// One exported section: a self-contained subtree plus its token context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Short id: the node's generated id truncated at its first separator.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub size: crate::element::Size,
    pub position: crate::element::Point,
    pub styles: crate::element::Styles,
    pub layout: crate::element::Layout,
    /// Full subtree, owned by this section.
    pub children: Vec<Element>,
    /// Direct child count.
    pub element_count: usize,
    /// Recursive count including this node.
    pub total_elements: usize,
    /// Tokens appearing within this subtree only.
    pub design_tokens: FrameTokens,
    pub global_design_tokens: GlobalTokenView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Result of partitioning: the mandatory root section plus one section per
/// first-level structural container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSet {
    pub root_frame: Section,
    pub sections: Vec<Section>,
    pub total_frames: usize,
}

/// Partition an analyzed root. A root with no structural children yields
/// only the root section; that is not an error.
pub fn partition(root: &AnnotatedNode, global_tokens: &NamedTokens) -> FrameSet {
    let root_frame = section_from(root, "root".to_string(), global_tokens, None);
    info!(
        name = %root.name,
        total_elements = root_frame.total_elements,
        "extracted root section"
    );

    let mut sections = Vec::new();
    for child in &root.children {
        let Some(node) = child.as_node() else {
            continue;
        };
        if node.node_type != CONTAINER_TAG {
            continue;
        }
        let short_id = node
            .id
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string();
        let section = section_from(node, short_id, global_tokens, Some("root".to_string()));
        info!(
            name = %section.name,
            total_elements = section.total_elements,
            "extracted section"
        );
        sections.push(section);
    }

    let total_frames = 1 + sections.len();
    FrameSet {
        root_frame,
        sections,
        total_frames,
    }
}

fn section_from(
    node: &AnnotatedNode,
    id: String,
    global_tokens: &NamedTokens,
    parent: Option<String>,
) -> Section {
    Section {
        id,
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        size: node.size,
        position: node.position,
        styles: node.styles.clone(),
        layout: node.layout.clone(),
        children: node.children.clone(),
        element_count: node.children.len(),
        total_elements: 1 + node
            .children
            .iter()
            .map(Element::total_elements)
            .sum::<usize>(),
        design_tokens: collect_frame_tokens(node),
        global_design_tokens: GlobalTokenView::truncated(global_tokens),
        parent,
    }
}

/// Scoped token subset: a fresh walk over this subtree only, not a filter of
/// the global accumulator. Padding values fold into the spacing subset here
/// (the global pass intentionally keeps spacing to item gaps).
pub fn collect_frame_tokens(node: &AnnotatedNode) -> FrameTokens {
    let mut colors = BTreeSet::new();
    let mut typography = Vec::new();
    let mut spacing = BTreeSet::new();
    let mut radius = BTreeSet::new();
    walk_tokens(
        node,
        &mut colors,
        &mut typography,
        &mut spacing,
        &mut radius,
    );
    FrameTokens {
        colors: colors.into_iter().collect(),
        typography,
        spacing: spacing.into_iter().collect(),
        border_radius: radius.into_iter().collect(),
    }
}

fn walk_tokens(
    node: &AnnotatedNode,
    colors: &mut BTreeSet<String>,
    typography: &mut Vec<Typography>,
    spacing: &mut BTreeSet<u32>,
    radius: &mut BTreeSet<u32>,
) {
    if let Some(background) = &node.styles.background {
        colors.insert(background.clone());
    }
    if let Some(border_color) = &node.styles.border.color {
        colors.insert(border_color.clone());
    }
    if let Some(typo) = &node.styles.typography {
        if let Some(text_color) = &typo.color {
            colors.insert(text_color.clone());
        }
        typography.push(typo.clone());
    }

    add_px(spacing, node.layout.spacing);
    add_px(spacing, node.layout.padding.left);
    add_px(spacing, node.layout.padding.right);
    add_px(spacing, node.layout.padding.top);
    add_px(spacing, node.layout.padding.bottom);
    add_px(radius, node.styles.border.radius);

    for child in &node.children {
        if let Some(child) = child.as_node() {
            walk_tokens(child, colors, typography, spacing, radius);
        }
    }
}

fn add_px(set: &mut BTreeSet<u32>, value: f64) {
    let px = value as u32;
    if px > 0 {
        set.insert(px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::schema::{Paint, PaintColor, RawNode};
    use crate::tokens::name_tokens;

    fn frame(name: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            name: name.to_string(),
            node_type: "FRAME".to_string(),
            children,
            ..RawNode::default()
        }
    }

    fn white_fill() -> Vec<Paint> {
        vec![Paint {
            paint_type: Some("SOLID".to_string()),
            color: Some(PaintColor {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 1.0,
            }),
            ..Paint::default()
        }]
    }

    fn analyze(raw: &RawNode) -> (AnnotatedNode, NamedTokens) {
        let mut analyzer = Analyzer::new();
        let element = analyzer.analyze(raw);
        let tokens = name_tokens(&analyzer.tokens);
        match element {
            Element::Node(node) => (node, tokens),
            Element::Marker(_) => unreachable!("root is never a marker"),
        }
    }

    #[test]
    fn one_section_per_first_level_frame() {
        let raw = frame(
            "page",
            vec![
                frame("header", Vec::new()),
                RawNode {
                    node_type: "TEXT".to_string(),
                    ..RawNode::default()
                },
                frame("footer", Vec::new()),
            ],
        );
        let (root, tokens) = analyze(&raw);
        let set = partition(&root, &tokens);
        assert_eq!(set.sections.len(), 2);
        assert_eq!(set.total_frames, 3);
        assert_eq!(set.root_frame.name, "page");
        assert_eq!(set.sections[0].name, "header");
        assert_eq!(set.sections[1].name, "footer");
        assert_eq!(set.sections[0].parent.as_deref(), Some("root"));
    }

    #[test]
    fn no_structural_children_yields_only_the_root_section() {
        let raw = frame(
            "page",
            vec![RawNode {
                node_type: "GROUP".to_string(),
                ..RawNode::default()
            }],
        );
        let (root, tokens) = analyze(&raw);
        let set = partition(&root, &tokens);
        assert!(set.sections.is_empty());
        assert_eq!(set.total_frames, 1);
        // Non-frame children stay visible inside the root section.
        assert_eq!(set.root_frame.children.len(), 1);
    }

    #[test]
    fn section_id_truncates_at_first_separator() {
        let raw = frame("page", vec![frame("hero", Vec::new())]);
        let (root, tokens) = analyze(&raw);
        let set = partition(&root, &tokens);
        assert_eq!(set.root_frame.id, "root");
        assert_eq!(set.sections[0].id, "root");
    }

    #[test]
    fn element_counts_are_direct_and_recursive() {
        let raw = frame(
            "page",
            vec![frame(
                "hero",
                vec![frame("inner", vec![frame("leaf", Vec::new())])],
            )],
        );
        let (root, tokens) = analyze(&raw);
        let set = partition(&root, &tokens);
        let hero = &set.sections[0];
        assert_eq!(hero.element_count, 1);
        assert_eq!(hero.total_elements, 3);
        assert_eq!(set.root_frame.element_count, 1);
        assert_eq!(set.root_frame.total_elements, 4);
    }

    #[test]
    fn frame_tokens_are_scoped_to_the_subtree() {
        let mut hero = frame("hero", Vec::new());
        hero.fills = white_fill();
        hero.corner_radius = 12.0;
        hero.padding_left = 24.0;
        let mut other = frame("other", Vec::new());
        other.item_spacing = 99.0;
        let raw = frame("page", vec![hero, other]);

        let (root, tokens) = analyze(&raw);
        let set = partition(&root, &tokens);
        let hero_tokens = &set.sections[0].design_tokens;
        assert_eq!(hero_tokens.colors, vec!["#ffffff".to_string()]);
        assert_eq!(hero_tokens.border_radius, vec![12]);
        // Padding feeds the scoped spacing subset; the sibling's spacing
        // does not leak in.
        assert_eq!(hero_tokens.spacing, vec![24]);
    }

    #[test]
    fn every_text_node_feeds_the_section_typography_subset() {
        let plain = RawNode {
            node_type: "TEXT".to_string(),
            characters: "plain".to_string(),
            ..RawNode::default()
        };
        let raw = frame("page", vec![frame("hero", vec![plain])]);
        let (root, tokens) = analyze(&raw);
        let set = partition(&root, &tokens);
        let hero_tokens = &set.sections[0].design_tokens;
        assert_eq!(hero_tokens.typography.len(), 1);
        assert_eq!(hero_tokens.typography[0].font_family, "Inter");
    }

    #[test]
    fn global_view_is_truncated() {
        let mut analyzer = Analyzer::new();
        for i in 0..15 {
            analyzer
                .tokens
                .colors
                .insert(format!("#0000{:02x}", i));
        }
        let tokens = name_tokens(&analyzer.tokens);
        let (root, _) = analyze(&frame("page", Vec::new()));
        let set = partition(&root, &tokens);
        assert_eq!(set.root_frame.global_design_tokens.colors.len(), 10);
        assert_eq!(
            set.root_frame
                .global_design_tokens
                .colors
                .keys()
                .next()
                .unwrap(),
            "primary"
        );
    }
}
