//! Graphex: Gremlin query translation and GraphSON normalization
//!
//! The service layer of a graph-database visual explorer. Structured search
//! and expansion intents are translated into Gremlin traversal strings, sent
//! through an abstract asynchronous query channel, and the GraphSON-encoded
//! responses are normalized into a uniform node/edge model that a rendering
//! layer can consume directly.
//!
//! # Core Concepts
//!
//! - **QueryTranslator**: deterministic mapping from user intents to Gremlin
//! - **GraphSON normalization**: tagged generation-3 wire JSON unwrapped to
//!   the plain generation-1 shape, then extracted into vertices and edges
//! - **Explorer**: one session over a query channel, holding the last known
//!   graph-info snapshot as observable state
//!
//! # Example
//!
//! ```
//! use graphex::QueryTranslator;
//!
//! let bundle = QueryTranslator::new().search("name", "alice");
//! assert!(bundle.nodes.contains("has('name', 'alice')"));
//! ```

mod explorer;
mod graph;
pub mod channel;
pub mod graphson;
pub mod query;

pub use channel::{Bindings, ChannelError, QueryChannel};
pub use explorer::{Explorer, ExplorerError, ExplorerResult};
pub use graph::{ElementId, ElementKind, GraphElement, Properties, PropertyValue, UniformGraphResult};
pub use graphson::{
    aggregate_info, arrange, graphson3_to_1, GraphInfo, GraphsonFormat, LabelCount,
    NormalizeError, NormalizeResult,
};
pub use query::{QueryBundle, QueryTranslator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
