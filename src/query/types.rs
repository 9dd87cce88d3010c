//! Query bundle produced by the translator

/// The Gremlin strings for one search or expansion intent
///
/// `nodes` and `edges` are assignment-form sub-queries; `combined` chains
/// them and appends the two-bucket collection step so a single round trip
/// returns both the matched vertices and the edges among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBundle {
    /// Vertex sub-query (`nodes = ...`)
    pub nodes: String,
    /// Edge sub-query (`edges = ...`)
    pub edges: String,
    /// Full query sent to the channel
    pub combined: String,
}

impl QueryBundle {
    pub fn new(nodes: String, edges: String) -> Self {
        let combined = format!("{nodes}\n{edges}\n[nodes.toList(),edges.toList()]");
        Self {
            nodes,
            edges,
            combined,
        }
    }
}
