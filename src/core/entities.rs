//! Escaped character replacement
//!
//! Handles the five predefined entities: &lt; &gt; &amp; &quot; &apos;
//! Replacement runs once per element, after its closing tag is scanned, so
//! decoded text is never rescanned.
//!
//! Uses Cow for zero-copy when no entities are present.

use memchr::memchr;
use std::borrow::Cow;

/// Replace escaped characters in text content or an attribute value.
///
/// Returns Borrowed if no `&` is present (zero-copy), Owned otherwise.
/// Unknown entity references are left untouched.
#[inline]
pub fn replace_escaped(input: &str) -> Cow<'_, str> {
    // Fast path: check for an ampersand using SIMD
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(replace_all(input))
}

/// Replace escaped characters in place, single left-to-right pass.
pub fn replace_escaped_in_place(value: &mut String) {
    if let Cow::Owned(replaced) = replace_escaped(value) {
        *value = replaced;
    }
}

fn replace_all(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut result = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < bytes.len() {
        match memchr(b'&', &bytes[pos..]) {
            Some(off) => {
                let amp = pos + off;
                result.push_str(&input[pos..amp]);

                match replace_entity(&bytes[amp..]) {
                    Some((literal, consumed)) => {
                        result.push(literal);
                        pos = amp + consumed;
                    }
                    None => {
                        // Not one of the five escapes, keep the ampersand
                        result.push('&');
                        pos = amp + 1;
                    }
                }
            }
            None => {
                result.push_str(&input[pos..]);
                break;
            }
        }
    }

    result
}

/// Match one escape sequence at the start of `rest` (which begins with `&`).
/// Returns the literal character and the number of bytes consumed.
fn replace_entity(rest: &[u8]) -> Option<(char, usize)> {
    const ESCAPES: [(&[u8], char); 5] = [
        (b"&amp;", '&'),
        (b"&quot;", '"'),
        (b"&apos;", '\''),
        (b"&lt;", '<'),
        (b"&gt;", '>'),
    ];

    ESCAPES
        .iter()
        .find(|(seq, _)| rest.starts_with(seq))
        .map(|&(seq, literal)| (literal, seq.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entities() {
        let result = replace_escaped("Hello, World!");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), "Hello, World!");
    }

    #[test]
    fn test_all_five_escapes() {
        let result = replace_escaped("&lt;a&gt; &amp; &quot;b&quot; &apos;c&apos;");
        assert_eq!(result.as_ref(), "<a> & \"b\" 'c'");
    }

    #[test]
    fn test_round_trip_attribute_value() {
        let result = replace_escaped("A &amp; B");
        assert_eq!(result.as_ref(), "A & B");
    }

    #[test]
    fn test_unknown_entity_kept() {
        let result = replace_escaped("&unknown; &amp;");
        assert_eq!(result.as_ref(), "&unknown; &");
    }

    #[test]
    fn test_bare_ampersand() {
        let result = replace_escaped("fish & chips");
        assert_eq!(result.as_ref(), "fish & chips");
    }

    #[test]
    fn test_in_place() {
        let mut value = String::from("1 &lt; 2");
        replace_escaped_in_place(&mut value);
        assert_eq!(value, "1 < 2");
    }

    #[test]
    fn test_single_pass_no_double_decode() {
        // "&amp;lt;" decodes the amp only; the result must not be rescanned
        let result = replace_escaped("&amp;lt;");
        assert_eq!(result.as_ref(), "&lt;");
    }
}
