//! Parse error taxonomy
//!
//! Malformed input is fatal for the whole document: parsing stops and no
//! partial element list is published. Cursor misuse (seeking past either end
//! of the list) is not an error at all; it is signalled by the `None`
//! sentinel on the cursor operations.

use thiserror::Error;

/// Errors raised while scanning a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A tag was still open when the input ran out, or a closing tag's name
    /// ran off the end of its line before a terminator was found.
    #[error("unterminated tag `{tag}`")]
    UnterminatedTag {
        /// The raw tag text accumulated so far.
        tag: String,
    },

    /// The input ended while inside a `<!-- ... -->` comment.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// An attribute value's opening quote was never matched by a closing
    /// quote of the same kind.
    #[error("unterminated quoted attribute in `{token}`")]
    UnterminatedQuotedAttribute {
        /// The attribute token (or tag remainder) that holds the open quote.
        token: String,
    },

    /// A closing tag named an element with no matching open element.
    #[error("closing tag `</{name}>` matches no open element")]
    UnmatchedClosingTag {
        /// Name given in the closing tag.
        name: String,
    },

    /// Tag text that cannot denote an element, such as a `<` at the very end
    /// of a line or a tag with an empty name.
    #[error("malformed tag `{text}`")]
    MalformedTag {
        /// The offending raw text.
        text: String,
    },

    /// An attribute token with no quoted value.
    #[error("malformed attribute `{token}`")]
    MalformedAttribute {
        /// The offending attribute token.
        token: String,
    },

    /// A `<!` construct that is not a comment (doctype declarations and the
    /// like are out of scope and rejected rather than mis-scanned).
    #[error("unsupported markup `{text}`")]
    UnsupportedMarkup {
        /// The text following `<`.
        text: String,
    },

    /// An element was never closed by the time the input ended.
    #[error("element `{name}` was never closed")]
    UnclosedElement {
        /// Name of the element left open.
        name: String,
    },

    /// Reading the input failed. The partially built list is discarded.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}
