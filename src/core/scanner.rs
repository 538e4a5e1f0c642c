//! Line-oriented document scanner
//!
//! Consumes the document one line at a time and drives the whole parse:
//! detects tag starts, comments, closing tags, and text content, stitches
//! multi-line tags back together, and maintains the element arena with its
//! hierarchy links as tags open and close.
//!
//! The scanner is an explicit three-state machine (`Text`, `Tag`,
//! `Comment`); each `feed_line` call loops until the line is exhausted.
//! Delimiter hunting uses memchr.

use crate::core::tag::parse_tag;
use crate::dom::element::{Element, ElementId};
use crate::dom::hierarchy;
use crate::error::ParseError;
use memchr::{memchr, memmem};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Plain text; characters accumulate into the newest open element.
    Text,
    /// Inside a start tag, buffering raw tag text until the closing `>`.
    Tag,
    /// Inside `<!-- ... -->`; everything is discarded until the close.
    Comment,
}

pub(crate) struct DocumentScanner {
    elements: Vec<Element>,
    state: ScanState,
    /// Raw tag text carried across lines while in the Tag state.
    pending_tag: String,
}

impl DocumentScanner {
    pub(crate) fn new() -> Self {
        DocumentScanner {
            elements: Vec::new(),
            state: ScanState::Text,
            pending_tag: String::new(),
        }
    }

    /// Consume one line of input (without its terminator).
    pub(crate) fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        let bytes = line.as_bytes();
        let mut pos = 0;

        loop {
            match self.state {
                ScanState::Tag => match memchr(b'>', &bytes[pos..]) {
                    None => {
                        // Tag continues on the next line; lines are joined
                        // without a separator
                        self.pending_tag.push_str(&line[pos..]);
                        return Ok(());
                    }
                    Some(off) => {
                        let end = pos + off;
                        self.pending_tag.push_str(&line[pos..end]);
                        let raw = std::mem::take(&mut self.pending_tag);
                        self.state = ScanState::Text;
                        self.open_element(&raw)?;
                        pos = end + 1;
                    }
                },

                ScanState::Comment => match memmem::find(&bytes[pos..], b"-->") {
                    None => return Ok(()),
                    Some(off) => {
                        pos = pos + off + 3;
                        self.state = ScanState::Text;
                    }
                },

                ScanState::Text => {
                    let next_lt = memchr(b'<', &bytes[pos..]).map(|off| pos + off);
                    let text_end = next_lt.unwrap_or(bytes.len());

                    // Text belongs to the newest open element; with nothing
                    // open it is dropped
                    if text_end > pos {
                        if let Some(open) = hierarchy::newest_open(&self.elements) {
                            self.elements[open as usize].append_value(&line[pos..text_end]);
                        }
                    }

                    let Some(lt) = next_lt else { return Ok(()) };
                    pos = lt + 1;

                    match bytes.get(pos).copied() {
                        None => {
                            // '<' as the last character of a line
                            return Err(ParseError::MalformedTag {
                                text: line[lt..].to_string(),
                            });
                        }
                        Some(b'!') => {
                            if bytes[pos + 1..].starts_with(b"--") {
                                self.state = ScanState::Comment;
                                pos += 3;
                            } else {
                                // Doctype declarations etc. are rejected
                                // rather than mis-scanned as comments
                                return Err(ParseError::UnsupportedMarkup {
                                    text: line[lt..].to_string(),
                                });
                            }
                        }
                        Some(c) if c.is_ascii_alphabetic() || c == b'_' || c >= 0x80 => {
                            self.state = ScanState::Tag;
                        }
                        Some(b'/') => {
                            pos = self.close_element(line, pos + 1)?;
                        }
                        Some(_) => {
                            // Prolog and other constructs this scanner does
                            // not model: skip to the '>' on this line
                            match memchr(b'>', &bytes[pos..]) {
                                Some(off) => pos = pos + off + 1,
                                None => return Ok(()),
                            }
                        }
                    }
                }
            }
        }
    }

    /// Finish scanning, verifying that nothing was left open.
    pub(crate) fn finish(self) -> Result<Vec<Element>, ParseError> {
        match self.state {
            ScanState::Tag => {
                return Err(ParseError::UnterminatedTag {
                    tag: self.pending_tag,
                })
            }
            ScanState::Comment => return Err(ParseError::UnterminatedComment),
            ScanState::Text => {}
        }

        if let Some(open) = self.elements.iter().find(|elem| !elem.is_closed()) {
            return Err(ParseError::UnclosedElement {
                name: open.name().to_string(),
            });
        }

        trace!(elements = self.elements.len(), "scan complete");
        Ok(self.elements)
    }

    /// A complete start tag has been accumulated: parse it, append the new
    /// element, and run its open-time (and, when self-closing, close-time)
    /// hierarchy processing.
    fn open_element(&mut self, raw: &str) -> Result<(), ParseError> {
        let tag = parse_tag(raw)?;
        let id = self.elements.len() as ElementId;
        let self_closing = tag.self_closing;
        trace!(name = %tag.name, id, self_closing, "element opened");

        self.elements
            .push(Element::new(tag.name, tag.attributes, self_closing));
        hierarchy::on_open(&mut self.elements, id);

        if self_closing {
            hierarchy::on_close(&mut self.elements, id);
            self.elements[id as usize].replace_escaped_characters();
        }
        Ok(())
    }

    /// Handle a closing tag starting at `pos` (just past `</`). Returns the
    /// position scanning should resume from.
    fn close_element(&mut self, line: &str, mut pos: usize) -> Result<usize, ParseError> {
        let bytes = line.as_bytes();

        let name_start = pos;
        while pos < bytes.len() && bytes[pos] != b'>' && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            return Err(ParseError::UnterminatedTag {
                tag: line[name_start..].to_string(),
            });
        }
        let name = &line[name_start..pos];

        // Innermost first: the most recently opened element with this name
        // that is not yet closed
        let id = self
            .elements
            .iter()
            .rposition(|elem| elem.name() == name && !elem.is_closed())
            .ok_or_else(|| ParseError::UnmatchedClosingTag {
                name: name.to_string(),
            })? as ElementId;

        self.elements[id as usize].close();
        hierarchy::on_close(&mut self.elements, id);
        self.elements[id as usize].replace_escaped_characters();
        trace!(name, id, "element closed");

        // Resume just past the '>'; if the line ends first, the next line
        // starts back in text mode
        match memchr(b'>', &bytes[pos..]) {
            Some(off) => Ok(pos + off + 1),
            None => Ok(bytes.len()),
        }
    }
}
