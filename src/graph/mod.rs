//! Uniform graph model shared by the translator and the normalizer

mod element;
mod result;

pub use element::{ElementId, ElementKind, GraphElement, Properties, PropertyValue};
pub use result::UniformGraphResult;

pub(crate) use element::is_integer_literal;
