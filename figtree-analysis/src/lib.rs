//! # figtree-analysis
//!
//! Core analysis engine for figtree: a single depth-first pass over a raw
//! Figma node tree that produces an annotated mirror tree, a flat element
//! list, named design tokens, and statistics. Partitioning into first-level
//! sections lives in [`sections`].
//!
//! The engine is single-threaded and synchronous. Every structure is scoped
//! to one analysis invocation; concurrent callers construct independent
//! [`analyzer::Analyzer`] instances. Malformed field values never raise:
//! all absences degrade to the defaults named in [`schema`].

pub mod analyzer;
pub mod element;
pub mod flatten;
pub mod schema;
pub mod sections;
pub mod stats;
pub mod style;
pub mod tokens;

pub use analyzer::{Analyzer, TokenAccumulator};
pub use element::{AnnotatedNode, Element, Marker, Typography, MAX_DEPTH};
pub use schema::{FigmaData, RawNode};
pub use sections::{partition, FrameSet, Section};
pub use stats::Statistics;
pub use tokens::NamedTokens;

use serde::Serialize;
use tracing::{info, warn};

/// Everything one analysis run produces, representable as plain nested
/// maps and sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The annotated target tree; absent when the target lookup failed.
    pub target_node: Option<Element>,
    /// The target's direct subtree (its children, fully nested).
    pub full_hierarchy: Vec<Element>,
    /// Every element, pre-order, children stripped.
    pub all_elements: Vec<Element>,
    pub design_tokens: NamedTokens,
    pub statistics: Statistics,
}

/// Analyze the target node of a fetched document. A target id missing from
/// the nodes map degrades to an empty result rather than failing.
pub fn analyze_document(data: &FigmaData) -> AnalysisResult {
    let Some(wrapper) = data.specific_node.nodes.get(&data.target_node_id) else {
        warn!(
            target = %data.target_node_id,
            "target node not present in response, returning empty analysis"
        );
        return AnalysisResult::default();
    };
    analyze_node(&wrapper.document)
}

/// Analyze a tree rooted at `root` with fresh per-run state.
pub fn analyze_node(root: &RawNode) -> AnalysisResult {
    info!(name = %root.name, "analyzing node tree");

    let mut analyzer = Analyzer::new();
    let target = analyzer.analyze(root);

    let full_hierarchy = target.children().to_vec();
    let all_elements = flatten::flatten(&target);
    let design_tokens = tokens::name_tokens(&analyzer.tokens);
    let statistics = stats::collect(&all_elements);

    info!(
        total_elements = statistics.total_elements,
        max_depth = statistics.max_depth,
        colors = design_tokens.colors.len(),
        "analysis complete"
    );

    AnalysisResult {
        target_node: Some(target),
        full_hierarchy,
        all_elements,
        design_tokens,
        statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NodeWrapper, NodesResponse};

    #[test]
    fn missing_target_returns_empty_result() {
        let data = FigmaData {
            target_node_id: "9:9".to_string(),
            ..FigmaData::default()
        };
        let result = analyze_document(&data);
        assert_eq!(result, AnalysisResult::default());
        assert!(result.target_node.is_none());
        assert_eq!(result.statistics.total_elements, 0);
    }

    #[test]
    fn present_target_is_analyzed() {
        let mut data = FigmaData {
            target_node_id: "1:2".to_string(),
            ..FigmaData::default()
        };
        data.specific_node = NodesResponse::default();
        data.specific_node.nodes.insert(
            "1:2".to_string(),
            NodeWrapper {
                document: RawNode {
                    id: "1:2".to_string(),
                    name: "Page".to_string(),
                    node_type: "FRAME".to_string(),
                    ..RawNode::default()
                },
            },
        );
        let result = analyze_document(&data);
        let target = result.target_node.unwrap();
        assert_eq!(target.as_node().unwrap().original_id, "1:2");
        assert_eq!(result.statistics.total_elements, 1);
    }
}
