//! Tag content parsing
//!
//! Takes the raw text between `<` and `>` (both exclusive; the scanner may
//! have stitched it together from several lines) and splits it into the
//! element name, the ordered attribute list, and the self-closing flag.
//! End of input is equivalent to a bare `>`.

use super::attributes::{parse_attribute, Attribute};
use crate::error::ParseError;

/// The decomposed content of one start tag.
#[derive(Debug)]
pub struct RawTag {
    /// Element name, never empty.
    pub name: String,
    /// Attributes in the order they appear in the tag.
    pub attributes: Vec<Attribute>,
    /// True when a `/` precedes the tag end.
    pub self_closing: bool,
}

/// Parse raw tag text into name, attributes, and self-closing flag.
///
/// Attribute boundaries are quote-aware: whitespace, `/`, or `>` inside a
/// quoted value never terminates anything. A bare `/` outside quotes ends
/// the tag as self-closing *without* emitting a pending attribute token
/// (`<item id="5"/>` therefore carries no attributes while
/// `<item id="5" />` carries one); a bare `>` or the end of the input does
/// emit the pending token. These boundary rules reproduce the scanning
/// semantics this crate is committed to.
pub fn parse_tag(raw: &str) -> Result<RawTag, ParseError> {
    let bytes = raw.as_bytes();

    // Element name runs until whitespace, '/', or '>'
    let mut pos = 0;
    while pos < bytes.len()
        && !bytes[pos].is_ascii_whitespace()
        && bytes[pos] != b'/'
        && bytes[pos] != b'>'
    {
        pos += 1;
    }
    let name = &raw[..pos];
    if name.is_empty() {
        return Err(ParseError::MalformedTag {
            text: raw.to_string(),
        });
    }

    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let mut attributes = Vec::new();
    let mut self_closing = false;

    match bytes.get(pos).copied() {
        // Tag ends right after the name: no attributes
        None | Some(b'>') => {}
        Some(b'/') => self_closing = true,
        Some(_) => {
            let mut in_single = false;
            let mut in_double = false;
            let mut within_attribute = false;
            let mut attr_start: Option<usize> = None;

            while pos < bytes.len() {
                let c = bytes[pos];

                // Reaching the outermost closing quote marks the end of an
                // attribute token
                if c == b'"' && !in_single {
                    if in_double {
                        within_attribute = false;
                    }
                    in_double = !in_double;
                    pos += 1;
                    continue;
                }
                if c == b'\'' && !in_double {
                    if in_single {
                        within_attribute = false;
                    }
                    in_single = !in_single;
                    pos += 1;
                    continue;
                }
                if in_single || in_double {
                    pos += 1;
                    continue;
                }

                match c {
                    b'/' => {
                        // Pending token is dropped, not emitted
                        self_closing = true;
                        attr_start = None;
                        break;
                    }
                    b'>' => {
                        if let Some(start) = attr_start.take() {
                            attributes.push(parse_attribute(&raw[start..pos])?);
                        }
                        break;
                    }
                    _ if c.is_ascii_whitespace() => {
                        if !within_attribute {
                            if let Some(start) = attr_start.take() {
                                attributes.push(parse_attribute(&raw[start..pos])?);
                            }
                        }
                        pos += 1;
                    }
                    _ => {
                        if attr_start.is_none() {
                            within_attribute = true;
                            attr_start = Some(pos);
                        }
                        pos += 1;
                    }
                }
            }

            if in_single || in_double {
                let start = attr_start.unwrap_or(0);
                return Err(ParseError::UnterminatedQuotedAttribute {
                    token: raw[start..].to_string(),
                });
            }

            // End of input behaves like a bare '>'
            if let Some(start) = attr_start {
                attributes.push(parse_attribute(&raw[start..])?);
            }
        }
    }

    Ok(RawTag {
        name: name.to_string(),
        attributes,
        self_closing,
    })
}
