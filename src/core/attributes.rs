//! Attribute parsing
//!
//! Parses a single attribute token of the form `name="value"` or
//! `name='value'`. The token is the maximal non-quoted-whitespace-bounded
//! run the tag parser carved out of the raw tag text.

use super::entities::replace_escaped_in_place;
use crate::error::ParseError;
use memchr::memchr2;

/// A parsed attribute, owned by its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace escaped characters in the value. Called once, after the
    /// owning element has closed.
    pub(crate) fn replace_escaped_characters(&mut self) {
        replace_escaped_in_place(&mut self.value);
    }
}

/// Parse one raw attribute token into name and value.
///
/// The name is the prefix up to the first whitespace or `=`. The value is
/// the text strictly between the first quote character (`"` or `'`) and the
/// next occurrence of that same quote. Embedded quotes of the same kind end
/// the value early; that matches the scanning semantics this crate preserves
/// and is deliberately not hardened.
pub fn parse_attribute(token: &str) -> Result<Attribute, ParseError> {
    let bytes = token.as_bytes();

    let mut pos = 0;
    while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'=' {
        pos += 1;
    }
    let name = &token[..pos];

    // The value starts at the first quote of either kind
    let quote_pos = memchr2(b'"', b'\'', &bytes[pos..])
        .map(|off| pos + off)
        .ok_or_else(|| ParseError::MalformedAttribute {
            token: token.to_string(),
        })?;
    let quote = bytes[quote_pos];

    let value_start = quote_pos + 1;
    let value_end = memchr::memchr(quote, &bytes[value_start..])
        .map(|off| value_start + off)
        .ok_or_else(|| ParseError::UnterminatedQuotedAttribute {
            token: token.to_string(),
        })?;

    Ok(Attribute {
        name: name.to_string(),
        value: token[value_start..value_end].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quoted() {
        let attr = parse_attribute("id=\"test\"").unwrap();
        assert_eq!(attr.name(), "id");
        assert_eq!(attr.value(), "test");
    }

    #[test]
    fn test_single_quoted() {
        let attr = parse_attribute("id='test'").unwrap();
        assert_eq!(attr.name(), "id");
        assert_eq!(attr.value(), "test");
    }

    #[test]
    fn test_whitespace_around_equals() {
        let attr = parse_attribute("id = \"test\"").unwrap();
        assert_eq!(attr.name(), "id");
        assert_eq!(attr.value(), "test");
    }

    #[test]
    fn test_other_quote_kind_inside_value() {
        let attr = parse_attribute("title=\"it's fine\"").unwrap();
        assert_eq!(attr.value(), "it's fine");
    }

    #[test]
    fn test_same_quote_kind_ends_value_early() {
        // Embedded same-kind quote prematurely ends the value; preserved
        let attr = parse_attribute("title='it's fine'").unwrap();
        assert_eq!(attr.value(), "it");
    }

    #[test]
    fn test_no_quoted_value() {
        let err = parse_attribute("disabled").unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute { .. }));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_attribute("id=\"test").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedQuotedAttribute { .. }));
    }

    #[test]
    fn test_escapes_replaced_after_close() {
        let mut attr = parse_attribute("label=\"A &amp; B\"").unwrap();
        assert_eq!(attr.value(), "A &amp; B");
        attr.replace_escaped_characters();
        assert_eq!(attr.value(), "A & B");
    }
}
