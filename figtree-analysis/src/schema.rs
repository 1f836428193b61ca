//! Raw input schema
//!
//! Permissive, read-only mirror of the node-tree JSON returned by the Figma
//! REST API. Every field the analyzer touches is either optional or carries
//! an explicit default, so a structurally valid document can never fail to
//! deserialize into this schema.
//!
//! The defaults are named constants rather than scattered literals; the
//! analyzer and the token namer both refer back to them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Layout mode reported when a node has no auto-layout.
pub const DEFAULT_LAYOUT_MODE: &str = "NONE";
/// Blend mode reported when a node does not blend.
pub const DEFAULT_BLEND_MODE: &str = "PASS_THROUGH";
/// Blend mode reported for a plain paint.
pub const DEFAULT_PAINT_BLEND_MODE: &str = "NORMAL";
/// Paint kind assumed when a fill/stroke omits its own.
pub const DEFAULT_PAINT_TYPE: &str = "SOLID";
/// Stroke alignment assumed when absent.
pub const DEFAULT_STROKE_ALIGN: &str = "INSIDE";
/// Stroke weight assumed when a stroke is present but unweighted.
pub const DEFAULT_STROKE_WEIGHT: f64 = 1.0;

pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_WEIGHT: f64 = 400.0;
pub const DEFAULT_TEXT_ALIGN: &str = "LEFT";
pub const DEFAULT_TEXT_CASE: &str = "ORIGINAL";
pub const DEFAULT_TEXT_DECORATION: &str = "NONE";

/// Node type tag carrying literal character content.
pub const TEXT_TAG: &str = "TEXT";
/// Node type tags treated as shapes for content extraction.
pub const SHAPE_TAGS: [&str; 4] = ["RECTANGLE", "ELLIPSE", "VECTOR", "LINE"];

/// One node of the source design tree. Owned by the caller; the analyzer
/// only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub visible: bool,
    pub locked: bool,
    pub description: String,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub layout_mode: String,
    pub item_spacing: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub constraints: Constraints,
    pub corner_radius: f64,
    pub opacity: f64,
    pub blend_mode: String,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub style: Option<RawTextStyle>,
    pub characters: String,
    pub effects: Vec<RawEffect>,
    pub children: Vec<RawNode>,
}

impl Default for RawNode {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            node_type: String::new(),
            visible: true,
            locked: false,
            description: String::new(),
            absolute_bounding_box: None,
            layout_mode: DEFAULT_LAYOUT_MODE.to_string(),
            item_spacing: 0.0,
            padding_left: 0.0,
            padding_right: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            constraints: Constraints::default(),
            corner_radius: 0.0,
            opacity: 1.0,
            blend_mode: DEFAULT_BLEND_MODE.to_string(),
            fills: Vec::new(),
            strokes: Vec::new(),
            style: None,
            characters: String::new(),
            effects: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl RawNode {
    pub fn is_text(&self) -> bool {
        self.node_type == TEXT_TAG
    }

    pub fn is_shape(&self) -> bool {
        SHAPE_TAGS.contains(&self.node_type.as_str())
    }
}

/// Absolute geometry of a node. Position is relative to the file origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Positioning constraints, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<String>,
}

/// A fill or stroke descriptor.
///
/// `paint_type` stays optional: the color extractor treats a missing kind as
/// "not solid", while the detail extractors fall back to
/// [`DEFAULT_PAINT_TYPE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: Option<String>,
    pub color: Option<PaintColor>,
    pub opacity: f64,
    pub blend_mode: Option<String>,
    pub stroke_weight: f64,
    pub stroke_align: Option<String>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            paint_type: None,
            color: None,
            opacity: 1.0,
            blend_mode: None,
            stroke_weight: DEFAULT_STROKE_WEIGHT,
            stroke_align: None,
        }
    }
}

/// Normalized color channels, 0.0–1.0 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for PaintColor {
    fn default() -> Self {
        // Missing channels degrade to opaque black.
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

/// Text styling as reported on TEXT nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: f64,
    pub line_height: Option<LineMetric>,
    pub letter_spacing: Option<LineMetric>,
    pub text_align: String,
    pub text_case: String,
    pub text_decoration: String,
    pub paragraph_spacing: f64,
}

impl Default for RawTextStyle {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: DEFAULT_FONT_WEIGHT,
            line_height: None,
            letter_spacing: None,
            text_align: DEFAULT_TEXT_ALIGN.to_string(),
            text_case: DEFAULT_TEXT_CASE.to_string(),
            text_decoration: DEFAULT_TEXT_DECORATION.to_string(),
            paragraph_spacing: 0.0,
        }
    }
}

/// A line-height or letter-spacing measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub value: f64,
}

/// A shadow/blur descriptor attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub radius: f64,
    pub color: Option<PaintColor>,
    pub offset: Vector,
    pub spread: f64,
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// The document envelope the analyzer's entry point consumes: the full file
/// tree (kept opaque) plus the per-node lookup from the nodes endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigmaData {
    pub full_file: serde_json::Value,
    pub specific_node: NodesResponse,
    pub target_node_id: String,
}

/// Response shape of the `/files/{key}/nodes` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodesResponse {
    pub nodes: HashMap<String, NodeWrapper>,
}

/// One entry of the nodes map; the analyzer only needs the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeWrapper {
    pub document: RawNode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let node: RawNode = serde_json::from_str(r#"{"type": "FRAME"}"#).unwrap();
        assert_eq!(node.node_type, "FRAME");
        assert!(node.visible);
        assert_eq!(node.opacity, 1.0);
        assert_eq!(node.blend_mode, DEFAULT_BLEND_MODE);
        assert_eq!(node.layout_mode, DEFAULT_LAYOUT_MODE);
        assert!(node.children.is_empty());
    }

    #[test]
    fn bounding_box_and_children_deserialize() {
        let node: RawNode = serde_json::from_str(
            r#"{
                "id": "1:2",
                "name": "Card",
                "type": "FRAME",
                "absoluteBoundingBox": {"x": 10.0, "y": 20.0, "width": 320.0, "height": 200.0},
                "children": [{"type": "TEXT", "characters": "Hi"}]
            }"#,
        )
        .unwrap();
        let bb = node.absolute_bounding_box.unwrap();
        assert_eq!(bb.width, 320.0);
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].is_text());
        assert_eq!(node.children[0].characters, "Hi");
    }

    #[test]
    fn paint_color_defaults_to_opaque_black() {
        let color = PaintColor::default();
        assert_eq!(color.a, 1.0);
        assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn text_style_defaults() {
        let style = RawTextStyle::default();
        assert_eq!(style.font_family, "Inter");
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.font_weight, 400.0);
    }
}
