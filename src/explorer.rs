//! Explorer: one exploration session over a query channel
//!
//! Composes the translator, the wire format selection, and the channel, and
//! owns the session's "last known" graph-info snapshot. The snapshot is
//! replaced wholesale on each successful info query and published through a
//! watch channel; consumers clone the latest immutable copy. A failed
//! request leaves prior state untouched and propagates the failure exactly
//! once.

use crate::channel::{ChannelError, QueryChannel};
use crate::graph::{ElementId, UniformGraphResult};
use crate::graphson::{aggregate_info, arrange, GraphInfo, GraphsonFormat, NormalizeError};
use crate::query::QueryTranslator;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Errors surfaced by explorer operations
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("query channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Result type for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// A graph exploration session
pub struct Explorer {
    channel: Arc<dyn QueryChannel>,
    translator: QueryTranslator,
    format: GraphsonFormat,
    info_tx: watch::Sender<Option<GraphInfo>>,
}

impl Explorer {
    /// Create a session over the given channel, speaking GraphSON 3 with the
    /// default node limit.
    pub fn new(channel: Arc<dyn QueryChannel>) -> Self {
        let (info_tx, _) = watch::channel(None);
        Self {
            channel,
            translator: QueryTranslator::new(),
            format: GraphsonFormat::default(),
            info_tx,
        }
    }

    /// Select the wire format the server speaks
    pub fn with_format(mut self, format: GraphsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the per-request node-count limit
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.translator = self.translator.clone().with_node_limit(limit);
        self
    }

    /// The translator this session builds queries with
    pub fn translator(&self) -> &QueryTranslator {
        &self.translator
    }

    /// Subscribe to graph-info snapshot updates.
    ///
    /// Each successful [`refresh_info`](Self::refresh_info) publishes a fresh
    /// snapshot; receivers see complete replacements, never partial merges.
    pub fn subscribe_info(&self) -> watch::Receiver<Option<GraphInfo>> {
        self.info_tx.subscribe()
    }

    /// The last known graph-info snapshot, if any
    pub fn current_info(&self) -> Option<GraphInfo> {
        self.info_tx.borrow().clone()
    }

    /// Search vertices by field/value and return them with the edges among
    /// the matched set.
    pub async fn search(&self, field: &str, value: &str) -> ExplorerResult<UniformGraphResult> {
        let bundle = self.translator.search(field, value);
        let data = self.execute(&bundle.combined).await?;
        Ok(arrange(data, self.format)?)
    }

    /// Expand one vertex to its any-direction neighborhood and incident
    /// edges. The seed vertex appears exactly once in the result.
    pub async fn neighborhood(&self, id: &ElementId) -> ExplorerResult<UniformGraphResult> {
        let bundle = self.translator.neighborhood(id);
        let data = self.execute(&bundle.combined).await?;
        Ok(arrange(data, self.format)?)
    }

    /// Create a vertex with the given label and string properties, returning
    /// the raw response payload.
    pub async fn create_vertex(
        &self,
        label: &str,
        properties: &[(String, String)],
    ) -> ExplorerResult<Value> {
        let query = self.translator.create_vertex(label, properties);
        self.execute(&query).await
    }

    /// Create an edge between two existing vertices, returning the raw
    /// response payload.
    pub async fn create_edge(
        &self,
        source: &ElementId,
        target: &ElementId,
        label: &str,
    ) -> ExplorerResult<Value> {
        let query = self.translator.create_edge(source, target, label);
        self.execute(&query).await
    }

    /// Fetch database-wide grouped counts and replace the observable
    /// snapshot.
    pub async fn refresh_info(&self) -> ExplorerResult<GraphInfo> {
        let query = self.translator.graph_info();
        let data = self.execute(&query).await?;
        let info = aggregate_info(data, self.format)?;
        self.info_tx.send_replace(Some(info.clone()));
        Ok(info)
    }

    async fn execute(&self, query: &str) -> ExplorerResult<Value> {
        debug!(%query, "executing gremlin query");
        match self.channel.execute(query, None).await {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!(error = %e, "query failed");
                Err(e.into())
            }
        }
    }
}
