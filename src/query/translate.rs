//! Translation of structured intents into Gremlin traversal strings

use super::types::QueryBundle;
use crate::graph::{is_integer_literal, ElementId};

/// Search values are silently clamped to this many characters.
pub const MAX_SEARCH_VALUE_LEN: usize = 50;

/// Default cap on vertices fetched per request.
pub const DEFAULT_NODE_LIMIT: usize = 50;

/// Deterministic mapping from user intents to Gremlin query strings
///
/// Owns no state beyond the per-request node-count limit. Labels, keys and
/// values are embedded as literals without escaping; callers must
/// pre-sanitize input that may contain quote characters.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    node_limit: usize,
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTranslator {
    pub fn new() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }

    /// Override the per-request node-count limit
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = limit;
        self
    }

    pub fn node_limit(&self) -> usize {
        self.node_limit
    }

    /// Build the vertex/edge query pair for a field/value search.
    ///
    /// An empty value fetches up to `node_limit` vertices; the edge query
    /// aggregates that exact vertex set and keeps only edges whose opposite
    /// endpoint falls within it, so no edge points outside the fetched set.
    /// A non-empty value is clamped to [`MAX_SEARCH_VALUE_LEN`] characters
    /// and embedded either as an unquoted integer literal (optionally-signed
    /// all-digit input) or a quoted string literal.
    pub fn search(&self, field: &str, value: &str) -> QueryBundle {
        if value.is_empty() {
            let nodes = format!("nodes = g.V().limit({})", self.node_limit);
            let edges = format!(
                "edges = g.V().limit({}).aggregate('node').outE().as('edge').inV().where(within('node')).select('edge')",
                self.node_limit
            );
            return QueryBundle::new(nodes, edges);
        }

        let clamped = clamp_value(value);
        let predicate = if is_integer_literal(clamped) {
            format!("has('{field}', {clamped})")
        } else {
            format!("has('{field}', '{clamped}')")
        };
        let nodes = format!("nodes = g.V().{predicate}");
        let edges = format!(
            "edges = g.V().{predicate}.aggregate('node').outE().as('edge').inV().where(within('node')).select('edge')"
        );
        QueryBundle::new(nodes, edges)
    }

    /// Build the query pair expanding one vertex to its neighborhood.
    ///
    /// Retrieves the seed vertex plus every vertex reachable over an edge in
    /// either direction, and separately all incident edges. The seed is
    /// injected explicitly; it also reappears among its neighbors' reverse
    /// hops, and the normalizer's dedup keeps a single copy.
    pub fn neighborhood(&self, id: &ElementId) -> QueryBundle {
        let id = id.to_gremlin();
        let nodes = format!(
            "nodes = g.V({id}).as('node').both().as('node').select(all,'node').inject(g.V({id})).unfold()"
        );
        let edges = format!("edges = g.V({id}).bothE()");
        QueryBundle::new(nodes, edges)
    }

    /// Build a vertex-creation statement.
    ///
    /// Properties are appended as ordered string key/value literal pairs.
    /// No escaping is performed on label, keys or values.
    pub fn create_vertex(&self, label: &str, properties: &[(String, String)]) -> String {
        let mut props = String::new();
        for (key, value) in properties {
            props.push_str(&format!(", '{key}', '{value}'"));
        }
        format!("vertex = graph.addVertex(label, '{label}'{props})")
    }

    /// Build an edge-creation statement between two existing vertices.
    pub fn create_edge(&self, source: &ElementId, target: &ElementId, label: &str) -> String {
        format!(
            "edge = g.V({}).next().addEdge('{label}',g.V({}).next());",
            source.to_gremlin(),
            target.to_gremlin()
        )
    }

    /// Build the combined database-wide grouped-count query: vertex and edge
    /// label counts plus property-key-set counts, collected in one response.
    pub fn graph_info(&self) -> String {
        let nodes = "nodes = g.V().groupCount().by(label);";
        let nodes_prop = "nodesprop = g.V().valueMap().select(keys).groupCount();";
        let edges = "edges = g.E().groupCount().by(label);";
        let edges_prop = "edgesprop = g.E().valueMap().select(keys).groupCount();";
        format!(
            "{nodes}{nodes_prop}{edges}{edges_prop}[nodes.toList(),nodesprop.toList(),edges.toList(),edgesprop.toList()]"
        )
    }
}

/// Clamp a search value to at most [`MAX_SEARCH_VALUE_LEN`] characters.
fn clamp_value(value: &str) -> &str {
    match value.char_indices().nth(MAX_SEARCH_VALUE_LEN) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
