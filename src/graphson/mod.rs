//! GraphSON normalization
//!
//! Converts the tagged generation-3 wire format into the plain generation-1
//! shape, then extracts a uniform vertex/edge model or a database-wide info
//! snapshot. No tagged value survives past this module.

mod extract;
mod info;
mod unwrap;

pub use extract::arrange;
pub use info::{aggregate_info, property_names, GraphInfo, LabelCount};
pub use unwrap::graphson3_to_1;

use thiserror::Error;

/// Wire schema generation spoken by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphsonFormat {
    /// Plain JSON: elements carry `id`, `label`, `type`, `properties`
    V1,
    /// Tagged JSON: `{"@type": tag, "@value": payload}`, recursively nested
    #[default]
    V3,
}

/// Errors raised while normalizing a response payload
///
/// Unexpected wire shapes surface here instead of being recovered from;
/// the original service let such inputs fail at the point of use and this
/// layer keeps that policy, only giving the failure a type.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("unexpected wire shape: {0}")]
    Shape(String),
}

/// Result type for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;
