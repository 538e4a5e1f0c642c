//! tagwalk - line-oriented XML scanning with a navigation cursor
//!
//! Parses a markup document (`<name attr="v">...</name>`, `<name/>`,
//! `<!-- ... -->`) into an append-only arena of elements in document order
//! of tag opening, then lets callers walk that list with a stateful cursor.
//!
//! Pieces:
//! - Scanner: per-line state machine (text / tag / comment) that stitches
//!   multi-line tags together and accumulates text content
//! - Tag parser: raw tag text → name, ordered attributes, self-closing flag
//! - Hierarchy: parent and root-to-self path fixed at open time, children
//!   populated once at close time
//! - Cursor: positional and named seeks over the finished list
//!
//! This is not a validating parser: input is assumed to be well-formed, and
//! deviations surface as fatal [`ParseError`]s rather than recoveries. DTDs,
//! namespaces, processing instructions, and CDATA sections are out of scope.
//!
//! ```
//! use tagwalk::Document;
//!
//! let doc = Document::parse_str(r#"<order id="5"><item>book</item></order>"#)?;
//! let mut cursor = doc.cursor();
//! assert_eq!(cursor.root().as_deref(), Some("/order"));
//! assert_eq!(cursor.next_named("item").as_deref(), Some("/order/item"));
//! assert_eq!(cursor.current_value(), "book");
//! # Ok::<(), tagwalk::ParseError>(())
//! ```

mod core;
mod cursor;
mod dom;
mod error;

pub use crate::core::attributes::{parse_attribute, Attribute};
pub use crate::core::entities::replace_escaped;
pub use crate::core::tag::{parse_tag, RawTag};
pub use crate::cursor::Cursor;
pub use crate::dom::{Document, Element, ElementId, ElementSummary};
pub use crate::error::ParseError;
