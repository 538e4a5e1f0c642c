//! Navigation cursor
//!
//! A stateful position into the finished element list. Seeks return the
//! current element's path string, or None when the seek ran off either end
//! of the list (or, for named seeks, when no element with that name remains
//! in the chosen direction). The None sentinel is routine and never aborts
//! anything; it is how callers detect "no more elements". Element names are
//! never empty, so the sentinel cannot collide with a real result.

use crate::dom::{Document, Element, ElementId};
use std::collections::HashMap;

/// Cursor over a parsed document. Cheap to create; holds only a position.
#[derive(Debug)]
pub struct Cursor<'a> {
    doc: &'a Document,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor positioned at the first element.
    pub fn new(doc: &'a Document) -> Self {
        Cursor { doc, position: 0 }
    }

    /// Whether the position counter can be advanced.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.doc.len() > self.position + 1
    }

    /// Whether the position counter can be retreated.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Reset to the first element and return its path.
    pub fn root(&mut self) -> Option<String> {
        self.position = 0;
        self.current_path()
    }

    /// Advance by one element, returning its path.
    pub fn next(&mut self) -> Option<String> {
        if !self.has_next() {
            return None;
        }
        self.position += 1;
        self.current_path()
    }

    /// Retreat by one element, returning its path.
    pub fn previous(&mut self) -> Option<String> {
        if !self.has_previous() {
            return None;
        }
        self.position -= 1;
        self.current_path()
    }

    /// Advance until an element with the given name is found, returning its
    /// path. The search always moves at least one step, so the current
    /// element can never match itself. On failure the position rests at the
    /// last element.
    pub fn next_named(&mut self, name: &str) -> Option<String> {
        loop {
            if !self.has_next() {
                return None;
            }
            self.position += 1;
            if self.current()?.name() == name {
                return self.current_path();
            }
        }
    }

    /// Retreat until an element with the given name is found, returning its
    /// path. On failure the position rests at the first element.
    pub fn previous_named(&mut self, name: &str) -> Option<String> {
        loop {
            if !self.has_previous() {
                return None;
            }
            self.position -= 1;
            if self.current()?.name() == name {
                return self.current_path();
            }
        }
    }

    /// The current element, or None for an empty document.
    pub fn current(&self) -> Option<&'a Element> {
        self.doc.get(self.position as ElementId)
    }

    /// Path string of the current element.
    pub fn current_path(&self) -> Option<String> {
        self.current()?;
        Some(self.doc.path_string(self.position as ElementId))
    }

    /// Attribute name → value mapping for the current element. When the
    /// source tag repeats an attribute name, the later occurrence wins.
    pub fn current_attributes(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        if let Some(elem) = self.current() {
            for attr in elem.attributes() {
                map.insert(attr.name().to_string(), attr.value().to_string());
            }
        }
        map
    }

    /// Names of the current element's immediate children, in document order.
    pub fn current_children_names(&self) -> Vec<String> {
        self.current()
            .map(|elem| {
                elem.children()
                    .iter()
                    .filter_map(|&child| self.doc.get(child))
                    .map(|child| child.name().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Trimmed text content of the current element.
    pub fn current_value(&self) -> &'a str {
        self.current().map(|elem| elem.value()).unwrap_or("")
    }
}
