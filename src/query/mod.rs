//! Query translation: structured intents to Gremlin traversal strings
//!
//! The translator is purely deterministic string construction; execution and
//! result handling live in the channel and graphson modules.

mod translate;
mod types;

pub use translate::{QueryTranslator, DEFAULT_NODE_LIMIT, MAX_SEARCH_VALUE_LEN};
pub use types::QueryBundle;
