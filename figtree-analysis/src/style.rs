//! Color and style extraction
//!
//! Pure functions that turn raw paint/effect/text-style descriptors into the
//! canonical records the analyzer stores. No state, no failure paths: absent
//! fields degrade to the schema defaults.

use crate::element::{EffectInfo, FillDetail, StrokeDetail, Typography};
use crate::schema::{
    Paint, PaintColor, RawEffect, RawNode, DEFAULT_PAINT_BLEND_MODE, DEFAULT_PAINT_TYPE,
    DEFAULT_STROKE_ALIGN,
};

/// Canonical CSS form of a single color: lowercase `#rrggbb` when opaque,
/// `rgba(r, g, b, a)` with two-decimal alpha otherwise. Channels are scaled
/// by truncation, not rounding.
pub fn color_to_css(color: &PaintColor) -> String {
    let r = (color.r * 255.0) as u8;
    let g = (color.g * 255.0) as u8;
    let b = (color.b * 255.0) as u8;
    if color.a < 1.0 {
        let a = (color.a * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {})", r, g, b, a)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Canonical color of an ordered paint list. Only the first paint is
/// considered, and only if it is solid; a missing color record degrades to
/// opaque black.
pub fn extract_color(paints: &[Paint]) -> Option<String> {
    let first = paints.first()?;
    if first.paint_type.as_deref() != Some(DEFAULT_PAINT_TYPE) {
        return None;
    }
    Some(color_to_css(&first.color.unwrap_or_default()))
}

/// Width of the first stroke; an empty stroke list yields 0.
pub fn extract_border_width(strokes: &[Paint]) -> f64 {
    strokes.first().map_or(0.0, |stroke| stroke.stroke_weight)
}

/// Per-fill detail records, in source order.
pub fn fill_details(fills: &[Paint]) -> Vec<FillDetail> {
    fills
        .iter()
        .map(|fill| FillDetail {
            paint_type: fill
                .paint_type
                .clone()
                .unwrap_or_else(|| DEFAULT_PAINT_TYPE.to_string()),
            color: extract_color(std::slice::from_ref(fill)),
            opacity: fill.opacity,
            blend_mode: fill
                .blend_mode
                .clone()
                .unwrap_or_else(|| DEFAULT_PAINT_BLEND_MODE.to_string()),
        })
        .collect()
}

/// Per-stroke detail records, in source order.
pub fn stroke_details(strokes: &[Paint]) -> Vec<StrokeDetail> {
    strokes
        .iter()
        .map(|stroke| StrokeDetail {
            paint_type: stroke
                .paint_type
                .clone()
                .unwrap_or_else(|| DEFAULT_PAINT_TYPE.to_string()),
            color: extract_color(std::slice::from_ref(stroke)),
            weight: stroke.stroke_weight,
            align: stroke
                .stroke_align
                .clone()
                .unwrap_or_else(|| DEFAULT_STROKE_ALIGN.to_string()),
        })
        .collect()
}

/// Typography of a text node; `None` for every other type tag. The text
/// color is the node's first solid fill.
pub fn extract_typography(node: &RawNode) -> Option<Typography> {
    if !node.is_text() {
        return None;
    }
    let style = node.style.clone().unwrap_or_default();
    Some(Typography {
        font_family: style.font_family,
        font_size: style.font_size,
        font_weight: style.font_weight,
        line_height: style.line_height,
        letter_spacing: style.letter_spacing,
        text_align: style.text_align,
        text_case: style.text_case,
        text_decoration: style.text_decoration,
        color: extract_color(&node.fills),
        paragraph_spacing: style.paragraph_spacing,
    })
}

/// Shadow/blur records. An effect carrying its own color is formatted as if
/// it were a solid paint.
pub fn extract_effects(effects: &[RawEffect]) -> Vec<EffectInfo> {
    effects
        .iter()
        .map(|effect| EffectInfo {
            effect_type: effect.effect_type.clone(),
            radius: effect.radius,
            color: effect.color.as_ref().map(color_to_css),
            offset: effect.offset,
            spread: effect.spread,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawTextStyle;

    fn solid(r: f64, g: f64, b: f64, a: f64) -> Paint {
        Paint {
            paint_type: Some("SOLID".to_string()),
            color: Some(PaintColor { r, g, b, a }),
            ..Paint::default()
        }
    }

    #[test]
    fn opaque_color_formats_as_hex() {
        assert_eq!(
            extract_color(&[solid(1.0, 0.0, 0.0, 1.0)]),
            Some("#ff0000".to_string())
        );
    }

    #[test]
    fn translucent_color_formats_as_rgba() {
        assert_eq!(
            extract_color(&[solid(1.0, 0.0, 0.0, 0.5)]),
            Some("rgba(255, 0, 0, 0.5)".to_string())
        );
    }

    #[test]
    fn alpha_rounds_to_two_decimals() {
        assert_eq!(
            extract_color(&[solid(0.0, 0.0, 0.0, 0.333)]),
            Some("rgba(0, 0, 0, 0.33)".to_string())
        );
    }

    #[test]
    fn channels_truncate_instead_of_rounding() {
        // 0.999 * 255 = 254.745 -> 254, never 255.
        assert_eq!(
            extract_color(&[solid(0.999, 0.0, 0.0, 1.0)]),
            Some("#fe0000".to_string())
        );
    }

    #[test]
    fn non_solid_or_empty_paints_yield_none() {
        assert_eq!(extract_color(&[]), None);
        let gradient = Paint {
            paint_type: Some("GRADIENT_LINEAR".to_string()),
            ..Paint::default()
        };
        assert_eq!(extract_color(&[gradient]), None);
        let untyped = Paint::default();
        assert_eq!(extract_color(&[untyped]), None);
    }

    #[test]
    fn solid_without_color_record_is_black() {
        let paint = Paint {
            paint_type: Some("SOLID".to_string()),
            ..Paint::default()
        };
        assert_eq!(extract_color(&[paint]), Some("#000000".to_string()));
    }

    #[test]
    fn border_width_defaults() {
        assert_eq!(extract_border_width(&[]), 0.0);
        assert_eq!(extract_border_width(&[Paint::default()]), 1.0);
        let weighted = Paint {
            stroke_weight: 2.5,
            ..Paint::default()
        };
        assert_eq!(extract_border_width(&[weighted]), 2.5);
    }

    #[test]
    fn typography_only_for_text_nodes() {
        let frame = RawNode {
            node_type: "FRAME".to_string(),
            ..RawNode::default()
        };
        assert!(extract_typography(&frame).is_none());

        let text = RawNode {
            node_type: "TEXT".to_string(),
            style: Some(RawTextStyle {
                font_size: 24.0,
                font_weight: 700.0,
                ..RawTextStyle::default()
            }),
            fills: vec![solid(0.0, 0.0, 0.0, 1.0)],
            ..RawNode::default()
        };
        let typo = extract_typography(&text).unwrap();
        assert_eq!(typo.font_size, 24.0);
        assert_eq!(typo.font_weight, 700.0);
        assert_eq!(typo.color, Some("#000000".to_string()));
    }

    #[test]
    fn effect_color_formats_through_the_color_extractor() {
        let effect = RawEffect {
            effect_type: "DROP_SHADOW".to_string(),
            radius: 4.0,
            color: Some(PaintColor {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.25,
            }),
            spread: 2.0,
            ..RawEffect::default()
        };
        let infos = extract_effects(&[effect, RawEffect::default()]);
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].color, Some("rgba(0, 0, 0, 0.25)".to_string()));
        assert_eq!(infos[1].color, None);
    }
}
