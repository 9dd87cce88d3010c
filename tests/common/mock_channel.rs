//! Mock query channel for integration tests
//!
//! Replays a scripted sequence of responses and records every query it was
//! asked to execute, so tests can assert on both the generated Gremlin and
//! the normalized output without a live server.

use async_trait::async_trait;
use graphex::{Bindings, ChannelError, QueryChannel};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Channel that pops one canned response per `execute` call.
///
/// When the script runs out, further calls fail with a transport error.
pub struct MockChannel {
    responses: Mutex<VecDeque<Result<Value, ChannelError>>>,
    queries: Mutex<Vec<String>>,
}

impl MockChannel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Queue a successful response
    pub fn enqueue(self: &Arc<Self>, response: Value) -> Arc<Self> {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(Ok(response));
        self.clone()
    }

    /// Queue a failure
    pub fn enqueue_error(self: &Arc<Self>, error: ChannelError) -> Arc<Self> {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(Err(error));
        self.clone()
    }

    /// All queries executed so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl QueryChannel for MockChannel {
    async fn execute(
        &self,
        query: &str,
        _bindings: Option<Bindings>,
    ) -> Result<Value, ChannelError> {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_string());
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(ChannelError::Transport("mock script exhausted".into())))
    }
}
