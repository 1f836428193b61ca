//! Recursive tree analyzer
//!
//! A single depth-first, pre-order pass over the raw tree that builds the
//! annotated mirror tree and, as a side effect of each visit, feeds raw style
//! values into a [`TokenAccumulator`].
//!
//! One [`Analyzer`] serves exactly one analysis run: the visit counter is
//! never reset mid-run and the accumulator is consumed once by the token
//! namer after the walk completes. Concurrent analyses each construct their
//! own instance.

use crate::element::{
    AnnotatedNode, Border, Content, Element, Layout, Marker, Padding, Point, Size, Styles,
    Typography, MAX_DEPTH,
};
use crate::schema::RawNode;
use crate::style;
use std::collections::BTreeSet;
use tracing::debug;

/// Depths at or below this are logged during the walk.
const LOG_DEPTH: u32 = 3;

/// Raw style values gathered while walking one tree. Ordered sets make the
/// later naming pass independent of traversal order; typography stays an
/// ordered sequence because its naming is last-writer-wins by design.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenAccumulator {
    pub colors: BTreeSet<String>,
    pub typography: Vec<Typography>,
    pub spacing: BTreeSet<u32>,
    pub border_radius: BTreeSet<u32>,
}

impl TokenAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_color(&mut self, color: Option<&str>) {
        if let Some(color) = color {
            self.colors.insert(color.to_string());
        }
    }

    /// Spacing values are truncated to whole pixels; only positive values
    /// are kept.
    pub fn add_spacing(&mut self, value: f64) {
        let px = value as u32;
        if px > 0 {
            self.spacing.insert(px);
        }
    }

    pub fn add_radius(&mut self, value: f64) {
        let px = value as u32;
        if px > 0 {
            self.border_radius.insert(px);
        }
    }

    /// Every text node contributes one record, schema defaults included;
    /// the bucket namer collapses duplicates later.
    pub fn add_typography(&mut self, typography: &Typography) {
        self.typography.push(typography.clone());
    }
}

/// Walks a raw tree once, producing the annotated mirror and accumulating
/// raw token values.
#[derive(Debug, Default)]
pub struct Analyzer {
    counter: u64,
    pub tokens: TokenAccumulator,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes visited so far.
    pub fn visited(&self) -> u64 {
        self.counter
    }

    /// Analyze a tree rooted at `root`. The root receives depth 0 and the
    /// id prefix `root`.
    pub fn analyze(&mut self, root: &RawNode) -> Element {
        self.visit(root, "root", 0)
    }

    fn visit(&mut self, node: &RawNode, prefix: &str, depth: u32) -> Element {
        // Depth guard: replace the whole subtree with a marker, do not read
        // any field of the node.
        if depth > MAX_DEPTH {
            return Element::Marker(Marker::depth_exceeded());
        }

        self.counter += 1;
        let id = format!("{}-{}", prefix, self.counter);

        let bounds = node.absolute_bounding_box.unwrap_or_default();
        let styles = self.extract_styles(node);

        if depth <= LOG_DEPTH {
            debug!(
                id = %id,
                name = %node.name,
                node_type = %node.node_type,
                width = bounds.width,
                height = bounds.height,
                "visiting node"
            );
        }

        let children = node
            .children
            .iter()
            .map(|child| self.visit(child, &id, depth + 1))
            .collect();

        Element::Node(AnnotatedNode {
            id,
            original_id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type.clone(),
            depth,
            size: Size {
                width: bounds.width,
                height: bounds.height,
            },
            position: Point {
                x: bounds.x,
                y: bounds.y,
            },
            layout: Layout {
                mode: node.layout_mode.clone(),
                spacing: node.item_spacing,
                padding: Padding {
                    left: node.padding_left,
                    right: node.padding_right,
                    top: node.padding_top,
                    bottom: node.padding_bottom,
                },
                constraints: node.constraints.clone(),
            },
            styles,
            content: extract_content(node),
            effects: style::extract_effects(&node.effects),
            visible: node.visible,
            locked: node.locked,
            children,
        })
    }

    /// Style extraction with token accumulation as a side effect. Each node
    /// feeds the accumulator exactly once, during its own visit.
    fn extract_styles(&mut self, node: &RawNode) -> Styles {
        let background = style::extract_color(&node.fills);
        let border_color = style::extract_color(&node.strokes);

        self.tokens.add_color(background.as_deref());
        self.tokens.add_color(border_color.as_deref());
        self.tokens.add_radius(node.corner_radius);
        self.tokens.add_spacing(node.item_spacing);

        let typography = style::extract_typography(node);
        if let Some(typography) = &typography {
            self.tokens.add_typography(typography);
        }

        Styles {
            background,
            border: Border {
                color: border_color,
                width: style::extract_border_width(&node.strokes),
                radius: node.corner_radius,
            },
            opacity: node.opacity,
            blend_mode: node.blend_mode.clone(),
            typography,
            fills: style::fill_details(&node.fills),
            strokes: style::stroke_details(&node.strokes),
        }
    }
}

fn extract_content(node: &RawNode) -> Content {
    let text = if node.is_text() {
        node.characters.clone()
    } else {
        String::new()
    };
    let (shape_type, fill_type) = if node.is_shape() {
        let fill_type = node.fills.first().map(|fill| {
            fill.paint_type
                .clone()
                .unwrap_or_else(|| crate::schema::DEFAULT_PAINT_TYPE.to_string())
        });
        (Some(node.node_type.clone()), fill_type)
    } else {
        (None, None)
    };
    Content {
        kind: node.node_type.to_lowercase(),
        text,
        name: node.name.clone(),
        description: node.description.clone(),
        shape_type,
        fill_type,
    }
}
