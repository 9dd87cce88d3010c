//! Graph element representation: database-assigned identifiers, vertices and edges

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Database-assigned element identifier
///
/// Gremlin servers hand out either integer or string identifiers depending
/// on the backing graph. Both forms are carried verbatim; equality is exact,
/// so `Int(7)` and `Text("7")` are distinct identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementId {
    Int(i64),
    Text(String),
}

impl ElementId {
    /// Build an identifier from a wire JSON value.
    ///
    /// Integer numbers map to `Int`; strings to `Text`. Anything else is
    /// carried as its JSON text form so odd backends still round-trip.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) if n.as_i64().is_some() => Self::Int(n.as_i64().unwrap_or_default()),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Parse an identifier from user input.
    ///
    /// An optionally-signed all-digit string becomes `Int`, everything else
    /// `Text`. Mirrors the literal detection used by the query translator.
    pub fn parse(input: &str) -> Self {
        match input.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Text(input.to_string()),
        }
    }

    /// Render as a Gremlin literal: integers bare, strings single-quoted.
    pub fn to_gremlin(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => format!("'{s}'"),
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// True when every character of `value` is a digit, after an optional sign.
pub(crate) fn is_integer_literal(value: &str) -> bool {
    let digits = value
        .strip_prefix(['+', '-'])
        .unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Element classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Edge => "edge",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized property value
///
/// Edge properties and generation-1 pass-through carry a single scalar.
/// Vertex properties in generation 3 are multi-valued wrappers; they flatten
/// to the plain value list plus a comma-joined summary string the rendering
/// layer uses for labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Scalar(Value),
    Multi { values: Vec<Value>, summary: String },
}

impl PropertyValue {
    /// The summary string, if this is a flattened multi-valued property.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Multi { summary, .. } => Some(summary),
        }
    }
}

/// Properties collection
pub type Properties = HashMap<String, PropertyValue>;

/// A vertex or edge in the uniform graph model
///
/// Edges carry `source`/`target` identifiers referencing vertices in the
/// accompanying set. Endpoint resolvability is not enforced here; the
/// renderer resolves endpoints against whatever vertex set it was handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphElement {
    /// Database-assigned identifier
    pub id: ElementId,
    /// Element label (e.g., "person", "knows")
    pub label: String,
    /// Vertex or edge
    pub kind: ElementKind,
    /// Flattened property map
    pub properties: Properties,
    /// Outgoing endpoint (edges only)
    pub source: Option<ElementId>,
    /// Incoming endpoint (edges only)
    pub target: Option<ElementId>,
}

impl GraphElement {
    /// Create a vertex with the given identifier and label
    pub fn vertex(id: ElementId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ElementKind::Vertex,
            properties: HashMap::new(),
            source: None,
            target: None,
        }
    }

    /// Create an edge connecting two vertex identifiers
    pub fn edge(
        id: ElementId,
        label: impl Into<String>,
        source: ElementId,
        target: ElementId,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            kind: ElementKind::Edge,
            properties: HashMap::new(),
            source: Some(source),
            target: Some(target),
        }
    }

    /// Add a property
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Look up a property by key
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}
