//! Hierarchy maintenance over the element arena
//!
//! The element list is append-only in document order of tag opening, so
//! parentage is positional: when an element opens, its parent is the nearest
//! preceding element that is still open; when it closes, its children are
//! exactly the later-opened elements pointing back at it. Both walks run
//! backward over the list.
//!
//! A close scans back to the closed element's own position, so N siblings
//! closing in reverse order of opening approach O(N^2) total work. Accepted
//! for typical documents.

use super::element::{Element, ElementId};

/// Id of the most recently opened element that is not yet closed, if any.
pub(crate) fn newest_open(elements: &[Element]) -> Option<ElementId> {
    elements
        .iter()
        .rposition(|elem| !elem.is_closed())
        .map(|index| index as ElementId)
}

/// Open-time processing for the element just appended at `id`: assign the
/// parent (nearest preceding open element) and the fixed root-to-self path.
pub(crate) fn on_open(elements: &mut [Element], id: ElementId) {
    let index = id as usize;

    let parent = elements[..index]
        .iter()
        .rposition(|elem| !elem.is_closed())
        .map(|parent_index| parent_index as ElementId);

    if let Some(parent) = parent {
        elements[index].set_parent(parent);
    }

    // Follow parent links up to a root, then flip to root-first order
    let mut path = vec![id];
    let mut current = parent;
    while let Some(ancestor) = current {
        path.push(ancestor);
        current = elements[ancestor as usize].parent();
    }
    path.reverse();
    elements[index].set_path(path);
}

/// Close-time processing: populate the closed element's child list from the
/// elements appended after it. The backward scan stops at the element's own
/// position since nothing appended before it can be its child.
pub(crate) fn on_close(elements: &mut [Element], id: ElementId) {
    let index = id as usize;

    let mut children: Vec<ElementId> = elements[index + 1..]
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, elem)| elem.parent() == Some(id))
        .map(|(offset, _)| (index + 1 + offset) as ElementId)
        .collect();
    children.reverse();

    elements[index].set_children(children);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(elements: &mut Vec<Element>, name: &str) -> ElementId {
        let id = elements.len() as ElementId;
        elements.push(Element::new(name.into(), Vec::new(), false));
        on_open(elements, id);
        id
    }

    fn close(elements: &mut [Element], id: ElementId) {
        elements[id as usize].close();
        on_close(elements, id);
    }

    #[test]
    fn test_parent_is_nearest_open() {
        let mut elements = Vec::new();
        let a = open(&mut elements, "a");
        let b = open(&mut elements, "b");
        close(&mut elements, b);
        let c = open(&mut elements, "c");

        assert_eq!(elements[b as usize].parent(), Some(a));
        // b is closed by the time c opens, so c's parent is a, not b
        assert_eq!(elements[c as usize].parent(), Some(a));
        assert_eq!(elements[a as usize].parent(), None);
    }

    #[test]
    fn test_path_is_parent_path_plus_self() {
        let mut elements = Vec::new();
        let a = open(&mut elements, "a");
        let b = open(&mut elements, "b");
        let c = open(&mut elements, "c");

        assert_eq!(elements[a as usize].path(), &[a]);
        assert_eq!(elements[b as usize].path(), &[a, b]);
        assert_eq!(elements[c as usize].path(), &[a, b, c]);
    }

    #[test]
    fn test_children_in_document_order() {
        let mut elements = Vec::new();
        let a = open(&mut elements, "a");
        let b = open(&mut elements, "b");
        close(&mut elements, b);
        let c = open(&mut elements, "c");
        close(&mut elements, c);
        close(&mut elements, a);

        assert_eq!(elements[a as usize].children(), &[b, c]);
        assert!(elements[b as usize].children().is_empty());
    }

    #[test]
    fn test_sibling_roots() {
        let mut elements = Vec::new();
        let a = open(&mut elements, "a");
        close(&mut elements, a);
        let b = open(&mut elements, "b");

        assert_eq!(elements[b as usize].parent(), None);
        assert_eq!(elements[b as usize].path(), &[b]);
    }
}
