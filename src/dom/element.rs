//! Element representation
//!
//! Elements live in the document's arena (the element list itself) and
//! refer to each other through ElementId indices, so the parent, children,
//! and path links never form ownership cycles.

use crate::core::attributes::Attribute;
use crate::core::entities::replace_escaped_in_place;

/// Compact element identifier (index into the document element list).
pub type ElementId = u32;

/// A parsed element.
///
/// Created the instant its start tag's closing `>` is scanned; name,
/// attributes, and the self-close flag are fixed at creation. `closed` and
/// `children` are finalized when the matching end tag (or self-close marker)
/// is scanned. After parsing completes every element is immutable.
#[derive(Debug)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    closed: bool,
    value: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    path: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(name: String, attributes: Vec<Attribute>, self_closing: bool) -> Self {
        Element {
            name,
            attributes,
            closed: self_closing,
            value: String::new(),
            parent: None,
            children: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Element name. Never empty.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in tag order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute value by name (first occurrence in tag order).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value())
    }

    /// Whether the matching end tag has been scanned.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Accumulated text content, trimmed.
    #[inline]
    pub fn value(&self) -> &str {
        self.value.trim()
    }

    /// Parent element id, or None for a root.
    #[inline]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Immediate children ids, in document order.
    #[inline]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Root-to-self path ids, fixed at open time.
    #[inline]
    pub fn path(&self) -> &[ElementId] {
        &self.path
    }

    pub(crate) fn set_parent(&mut self, parent: ElementId) {
        self.parent = Some(parent);
    }

    pub(crate) fn set_path(&mut self, path: Vec<ElementId>) {
        self.path = path;
    }

    pub(crate) fn set_children(&mut self, children: Vec<ElementId>) {
        self.children = children;
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    /// Append text content. Only legal while the element is open.
    pub(crate) fn append_value(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// Replace escaped characters in the value and every attribute value.
    /// Runs once, when the element closes.
    pub(crate) fn replace_escaped_characters(&mut self) {
        replace_escaped_in_place(&mut self.value);
        for attr in &mut self.attributes {
            attr.replace_escaped_characters();
        }
    }
}
