//! Analysis statistics
//!
//! Aggregates counts from the flattened element list. Markers count as
//! elements of type `unknown` and depth 0.

use crate::element::Element;
use indexmap::IndexMap;
use serde::Serialize;

/// Type tag reported for depth-guard markers.
pub const UNKNOWN_TYPE: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total_elements: usize,
    /// Per-type counts, keyed in first-seen (visitation) order.
    pub type_counts: IndexMap<String, usize>,
    pub max_depth: u32,
}

pub fn collect(elements: &[Element]) -> Statistics {
    let mut type_counts: IndexMap<String, usize> = IndexMap::new();
    let mut max_depth = 0;
    for element in elements {
        let tag = match element.as_node() {
            Some(node) => node.node_type.clone(),
            None => UNKNOWN_TYPE.to_string(),
        };
        *type_counts.entry(tag).or_insert(0) += 1;
        max_depth = max_depth.max(element.depth());
    }
    Statistics {
        total_elements: elements.len(),
        type_counts,
        max_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::flatten::flatten;
    use crate::element::Marker;
    use crate::schema::RawNode;

    fn raw(node_type: &str, children: Vec<RawNode>) -> RawNode {
        RawNode {
            node_type: node_type.to_string(),
            children,
            ..RawNode::default()
        }
    }

    #[test]
    fn empty_list_yields_zeroed_statistics() {
        let stats = collect(&[]);
        assert_eq!(stats.total_elements, 0);
        assert_eq!(stats.max_depth, 0);
        assert!(stats.type_counts.is_empty());
    }

    #[test]
    fn counts_types_and_depth() {
        let tree = Analyzer::new().analyze(&raw(
            "FRAME",
            vec![
                raw("TEXT", Vec::new()),
                raw("FRAME", vec![raw("RECTANGLE", Vec::new())]),
            ],
        ));
        let stats = collect(&flatten(&tree));
        assert_eq!(stats.total_elements, 4);
        assert_eq!(stats.type_counts["FRAME"], 2);
        assert_eq!(stats.type_counts["TEXT"], 1);
        assert_eq!(stats.type_counts["RECTANGLE"], 1);
        assert_eq!(stats.max_depth, 2);
        // First-seen ordering.
        assert_eq!(stats.type_counts.keys().next().unwrap(), "FRAME");
    }

    #[test]
    fn markers_count_as_unknown() {
        let flat = vec![Element::Marker(Marker::depth_exceeded())];
        let stats = collect(&flat);
        assert_eq!(stats.total_elements, 1);
        assert_eq!(stats.type_counts[UNKNOWN_TYPE], 1);
        assert_eq!(stats.max_depth, 0);
    }
}
