//! Uniform graph result: deduplicated vertex and edge lists

use super::element::{ElementId, ElementKind, GraphElement};
use serde::{Deserialize, Serialize};

/// The uniform node/edge model handed to the rendering layer
///
/// Built fresh per query response. Ordered vertex and edge lists,
/// deduplicated by identifier within each list; the first occurrence of an
/// identifier wins and later duplicates are silently dropped. Once handed
/// off it is treated as immutable and discarded after rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniformGraphResult {
    /// Vertices in arrival order
    pub nodes: Vec<GraphElement>,
    /// Edges in arrival order
    pub edges: Vec<GraphElement>,
}

impl UniformGraphResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element into the list matching its kind.
    ///
    /// Returns false if an element with the same identifier was already
    /// present in that list (the duplicate is dropped).
    pub fn push(&mut self, element: GraphElement) -> bool {
        let list = match element.kind {
            ElementKind::Vertex => &mut self.nodes,
            ElementKind::Edge => &mut self.edges,
        };
        if list.iter().any(|e| e.id == element.id) {
            return false;
        }
        list.push(element);
        true
    }

    /// Whether a vertex with the given identifier is present
    pub fn contains_node(&self, id: &ElementId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Whether an edge with the given identifier is present
    pub fn contains_edge(&self, id: &ElementId) -> bool {
        self.edges.iter().any(|e| &e.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
