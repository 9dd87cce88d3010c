//! Query execution channel — the contract the transport implements
//!
//! The explorer never builds or parses a transport envelope; it hands a
//! query string (plus optional named bindings) to a channel and receives the
//! raw `data` payload back. Retry, timeout and cancellation policy, if any,
//! belong to the channel implementation.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Named parameter bindings sent alongside a query
pub type Bindings = serde_json::Map<String, Value>;

/// Errors a channel can surface
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The server reported a failure executing the query
    #[error("query execution failed: {0}")]
    Execution(String),

    /// The transport itself failed or was closed
    #[error("channel transport failed: {0}")]
    Transport(String),
}

/// An asynchronous query execution channel.
///
/// Implementations accept a Gremlin query string and resolve to the `data`
/// payload of the response. One call, one response; failures surface exactly
/// once and are never retried at this layer.
#[async_trait]
pub trait QueryChannel: Send + Sync {
    async fn execute(&self, query: &str, bindings: Option<Bindings>)
        -> Result<Value, ChannelError>;
}
