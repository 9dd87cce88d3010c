//! Common test utilities: a scripted mock channel and canned GraphSON
//! payloads shared by the integration tests.

pub mod fixtures;
pub mod mock_channel;

pub use fixtures::{graphson3_info_response, graphson3_search_response, neighborhood_response};
pub use mock_channel::MockChannel;
