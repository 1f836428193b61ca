//! Design-token naming
//!
//! Turns the raw values gathered by the analyzer into deterministic named
//! token maps. Colors, spacing, and radius values arrive already
//! deduplicated and value-ordered (the accumulator stores them in ordered
//! sets), which is what makes the ordinal naming below reproducible
//! regardless of traversal order. Typography is the deliberate exception:
//! buckets are keyed by size/weight class and the last record wins.

use crate::analyzer::TokenAccumulator;
use crate::element::Typography;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordinal names for spacing steps; overflow becomes `spacing-N`.
const SPACING_NAMES: [&str; 7] = ["xs", "sm", "md", "lg", "xl", "2xl", "3xl"];
/// Ordinal names for radius steps; overflow becomes `radius-N`.
const RADIUS_NAMES: [&str; 5] = ["sm", "md", "lg", "xl", "2xl"];

/// Named, insertion-ordered token maps. Iteration order is the semantic
/// order (primary first, xs first, ...), which downstream truncation relies
/// on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NamedTokens {
    pub colors: IndexMap<String, String>,
    pub typography: IndexMap<String, Typography>,
    pub spacing: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
}

/// Pure function of the accumulator's final state; calling it twice on the
/// same state yields identical output.
pub fn name_tokens(accumulator: &TokenAccumulator) -> NamedTokens {
    let mut colors = IndexMap::new();
    for (i, color) in accumulator.colors.iter().enumerate() {
        let name = match i {
            0 => "primary".to_string(),
            1 => "secondary".to_string(),
            2 => "accent".to_string(),
            _ => format!("gray-{}", i - 2),
        };
        colors.insert(name, color.clone());
    }

    let mut spacing = IndexMap::new();
    for (i, value) in accumulator.spacing.iter().enumerate() {
        let name = match SPACING_NAMES.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("spacing-{}", i + 1),
        };
        spacing.insert(name, format!("{}px", value));
    }

    let mut border_radius = IndexMap::new();
    for (i, value) in accumulator.border_radius.iter().enumerate() {
        let name = match RADIUS_NAMES.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("radius-{}", i + 1),
        };
        border_radius.insert(name, format!("{}px", value));
    }

    let mut typography = IndexMap::new();
    for record in &accumulator.typography {
        let bucket = typography_bucket(record.font_size, record.font_weight);
        // Last writer wins; the key keeps its original position.
        typography.insert(bucket.to_string(), record.clone());
    }

    NamedTokens {
        colors,
        typography,
        spacing,
        border_radius,
    }
}

/// Size-then-weight classification, first match wins.
pub fn typography_bucket(size: f64, weight: f64) -> &'static str {
    if size >= 32.0 {
        "heading-1"
    } else if size >= 24.0 {
        "heading-2"
    } else if size >= 20.0 {
        "heading-3"
    } else if size >= 18.0 {
        "heading-4"
    } else if weight >= 600.0 {
        "bold"
    } else {
        "body"
    }
}
