//! Parsed document
//!
//! The document is the element arena plus read-only accessors. Parsing
//! consumes the whole input before the document is published; afterwards
//! every element is immutable and may be freely read by any number of
//! cursors.

use super::element::{Element, ElementId};
use crate::core::scanner::DocumentScanner;
use crate::cursor::Cursor;
use crate::error::ParseError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A fully parsed document: every element in document order of tag opening.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
}

/// Everything there is to know about one element, for external formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSummary {
    /// Element name.
    pub name: String,
    /// Root-to-self path string, e.g. `/a/b`.
    pub path: String,
    /// Trimmed text content, or None when empty.
    pub value: Option<String>,
    /// Attribute (name, value) pairs in tag order.
    pub attributes: Vec<(String, String)>,
    /// Immediate children's names in document order.
    pub children: Vec<String>,
}

impl Document {
    /// Parse a document held in memory.
    pub fn parse_str(input: &str) -> Result<Document, ParseError> {
        let mut scanner = DocumentScanner::new();
        for line in input.lines() {
            scanner.feed_line(line)?;
        }
        Self::publish(scanner)
    }

    /// Parse a document from a buffered reader, one line at a time. Any I/O
    /// error aborts parsing; no partial document is published.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, ParseError> {
        let mut scanner = DocumentScanner::new();
        for line in reader.lines() {
            scanner.feed_line(&line?)?;
        }
        Self::publish(scanner)
    }

    /// Parse the document at the given path.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document, ParseError> {
        let file = File::open(path)?;
        Self::parse_reader(BufReader::new(file))
    }

    fn publish(scanner: DocumentScanner) -> Result<Document, ParseError> {
        let elements = scanner.finish()?;
        debug!(elements = elements.len(), "document parsed");
        Ok(Document { elements })
    }

    /// Number of parsed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the document holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by id.
    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id as usize)
    }

    /// All elements in document order of tag opening.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Ids of the parentless elements, in document order.
    pub fn root_elements(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, elem)| elem.parent().is_none())
            .map(|(index, _)| index as ElementId)
            .collect()
    }

    /// Path string for an element: one `/name` segment per path entry, root
    /// first. Empty for an unknown id.
    pub fn path_string(&self, id: ElementId) -> String {
        let Some(elem) = self.get(id) else {
            return String::new();
        };

        let mut path = String::new();
        for &ancestor in elem.path() {
            path.push('/');
            path.push_str(self.elements[ancestor as usize].name());
        }
        path
    }

    /// A cursor positioned at the first element.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Describe every element in document order. Supplies the data for an
    /// external display layer; formatting is not this crate's concern.
    pub fn summaries(&self) -> Vec<ElementSummary> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, elem)| {
                let value = elem.value();
                ElementSummary {
                    name: elem.name().to_string(),
                    path: self.path_string(index as ElementId),
                    value: (!value.is_empty()).then(|| value.to_string()),
                    attributes: elem
                        .attributes()
                        .iter()
                        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                        .collect(),
                    children: elem
                        .children()
                        .iter()
                        .map(|&child| self.elements[child as usize].name().to_string())
                        .collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_extends_parent_path() {
        let doc = Document::parse_str("<a><b><c/></b><d/></a>").unwrap();
        for elem in doc.elements() {
            match elem.parent() {
                Some(parent) => {
                    let parent_path = doc.get(parent).unwrap().path();
                    assert_eq!(&elem.path()[..parent_path.len()], parent_path);
                    assert_eq!(elem.path().len(), parent_path.len() + 1);
                }
                None => assert_eq!(elem.path().len(), 1),
            }
        }
    }

    #[test]
    fn test_all_elements_closed_after_parse() {
        let doc = Document::parse_str("<a><b>1</b><c>2</c></a>").unwrap();
        assert!(doc.elements().all(|elem| elem.is_closed()));
    }

    #[test]
    fn test_children_match_parent_links() {
        let doc = Document::parse_str("<a><b>1</b><c>2</c></a>").unwrap();
        let a = doc.get(0).unwrap();
        assert_eq!(a.children(), &[1, 2]);
        for &child in a.children() {
            assert_eq!(doc.get(child).unwrap().parent(), Some(0));
        }
    }

    #[test]
    fn test_path_string() {
        let doc = Document::parse_str("<a><b><c/></b></a>").unwrap();
        assert_eq!(doc.path_string(0), "/a");
        assert_eq!(doc.path_string(2), "/a/b/c");
        assert_eq!(doc.path_string(99), "");
    }

    #[test]
    fn test_root_elements() {
        let doc = Document::parse_str("<a/><b/><c/>").unwrap();
        assert_eq!(doc.root_elements(), vec![0, 1, 2]);
    }

    #[test]
    fn test_summaries() {
        let doc = Document::parse_str("<a id=\"1\"><b>text</b></a>").unwrap();
        let summaries = doc.summaries();
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].name, "a");
        assert_eq!(summaries[0].path, "/a");
        assert_eq!(summaries[0].value, None);
        assert_eq!(summaries[0].attributes, vec![("id".to_string(), "1".to_string())]);
        assert_eq!(summaries[0].children, vec!["b".to_string()]);

        assert_eq!(summaries[1].path, "/a/b");
        assert_eq!(summaries[1].value.as_deref(), Some("text"));
        assert!(summaries[1].children.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse_str("").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_parse_reader() {
        let input: &[u8] = b"<a>\n  <b>1</b>\n</a>\n";
        let doc = Document::parse_reader(input).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(1).unwrap().value(), "1");
    }
}
