//! Element arena and parsed document
//!
//! - Arena allocation for elements, ElementId indices for traversal
//! - Parent/children/path links are ids into the arena, never references
//! - Write-once during parsing, read-only afterwards

mod document;
pub(crate) mod element;
pub(crate) mod hierarchy;

pub use document::{Document, ElementSummary};
pub use element::{Element, ElementId};
