//! Annotated element tree
//!
//! The analyzer mirrors every raw node into an [`AnnotatedNode`]: the same
//! tree shape, but with a run-unique id, resolved geometry, canonical colors,
//! and extracted content. An [`Element`] is either a real node or the inert
//! marker left behind when the depth guard fires.
//!
//! Children are owned exclusively; the source format is a tree, never a
//! graph, so no sharing or cycles exist here.

use crate::schema::{Constraints, LineMetric, Vector};
use serde::Serialize;

/// Maximum depth the analyzer will descend to. Depths 0–20 inclusive are
/// analyzed; anything deeper is replaced with a marker and its subtree is
/// discarded.
pub const MAX_DEPTH: u32 = 20;

/// Error tag carried by a depth-guard marker.
pub const MAX_DEPTH_EXCEEDED: &str = "max_depth_exceeded";

/// One entry of the annotated tree: a real node or an error marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Node(AnnotatedNode),
    Marker(Marker),
}

impl Element {
    pub fn as_node(&self) -> Option<&AnnotatedNode> {
        match self {
            Element::Node(node) => Some(node),
            Element::Marker(_) => None,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Element::Marker(_))
    }

    /// Depth of this entry; markers carry none and report 0.
    pub fn depth(&self) -> u32 {
        self.as_node().map_or(0, |node| node.depth)
    }

    /// Children slice; markers have none.
    pub fn children(&self) -> &[Element] {
        self.as_node().map_or(&[], |node| node.children.as_slice())
    }

    /// Recursive element count: this entry plus every descendant. Markers
    /// count as one element.
    pub fn total_elements(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Element::total_elements)
            .sum::<usize>()
    }
}

/// Terminal marker left in place of a subtree the depth guard discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub error: &'static str,
}

impl Marker {
    pub fn depth_exceeded() -> Self {
        Self {
            error: MAX_DEPTH_EXCEEDED,
        }
    }
}

/// Fully analyzed mirror of one raw node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedNode {
    /// Run-unique id: the parent id chain joined with the visit counter.
    pub id: String,
    /// The node's own id from the source document.
    pub original_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub depth: u32,
    pub size: Size,
    pub position: Point,
    pub layout: Layout,
    pub styles: Styles,
    pub content: Content,
    pub effects: Vec<EffectInfo>,
    #[serde(rename = "visibility")]
    pub visible: bool,
    pub locked: bool,
    /// In source order; order reflects z-order/reading order.
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub mode: String,
    pub spacing: f64,
    pub padding: Padding,
    pub constraints: Constraints,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Styles {
    /// Canonical color of the first solid fill, if any.
    pub background: Option<String>,
    pub border: Border,
    pub opacity: f64,
    pub blend_mode: String,
    /// Present only on text nodes.
    pub typography: Option<Typography>,
    pub fills: Vec<FillDetail>,
    pub strokes: Vec<StrokeDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Border {
    pub color: Option<String>,
    pub width: f64,
    pub radius: f64,
}

/// Resolved typography of one text node. Also the record type accumulated
/// for design tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typography {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: f64,
    pub line_height: Option<LineMetric>,
    pub letter_spacing: Option<LineMetric>,
    pub text_align: String,
    pub text_case: String,
    pub text_decoration: String,
    pub color: Option<String>,
    pub paragraph_spacing: f64,
}

impl Default for Typography {
    fn default() -> Self {
        let defaults = crate::schema::RawTextStyle::default();
        Self {
            font_family: defaults.font_family,
            font_size: defaults.font_size,
            font_weight: defaults.font_weight,
            line_height: None,
            letter_spacing: None,
            text_align: defaults.text_align,
            text_case: defaults.text_case,
            text_decoration: defaults.text_decoration,
            color: None,
            paragraph_spacing: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Content {
    /// Lowercased type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Literal character content; empty for non-text nodes.
    pub text: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectInfo {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub radius: f64,
    pub color: Option<String>,
    pub offset: Vector,
    pub spread: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillDetail {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<String>,
    pub opacity: f64,
    pub blend_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrokeDetail {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Option<String>,
    pub weight: f64,
    pub align: String,
}
