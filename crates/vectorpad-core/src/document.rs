//! The element collection with cheap, structurally shared snapshots.

use crate::shapes::{Element, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An ordered element collection. Insertion order is paint order, so the last
/// element is topmost.
///
/// Clones share storage; the first mutation after a clone copies the element
/// list (copy-on-write), which keeps history entries O(1) to take.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Element>", into = "Vec<Element>")]
pub struct Document {
    elements: Arc<Vec<Element>>,
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements) || self.elements == other.elements
    }
}

impl From<Vec<Element>> for Document {
    fn from(elements: Vec<Element>) -> Self {
        Self {
            elements: Arc::new(elements),
        }
    }
}

impl From<Document> for Vec<Element> {
    fn from(document: Document) -> Self {
        Arc::unwrap_or_clone(document.elements)
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements in paint order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by id.
    pub fn get(&self, id: ShapeId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Check whether an element with this id exists.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Append an element on top of the paint order.
    pub fn push(&mut self, element: Element) {
        Arc::make_mut(&mut self.elements).push(element);
    }

    /// Replace the element with the same id, keeping its position in the
    /// paint order. Returns false if no such element exists.
    pub fn replace(&mut self, element: Element) -> bool {
        let id = element.id();
        let Some(index) = self.elements.iter().position(|e| e.id() == id) else {
            return false;
        };
        Arc::make_mut(&mut self.elements)[index] = element;
        true
    }

    /// Topmost element hit by a canvas-space point.
    pub fn topmost_hit(&self, point: Point, line_tolerance: f64) -> Option<ShapeId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(point, line_tolerance))
            .map(Element::id)
    }

    /// Check whether two documents share the same storage.
    pub fn shares_storage(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Ellipse, Line, Rectangle, ShapeTrait};

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_push_keeps_paint_order() {
        let mut doc = Document::new();
        let rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 100.0, 100.0);
        let (id1, id2) = (rect.id(), ellipse.id());

        doc.push(rect.into());
        doc.push(ellipse.into());

        let ids: Vec<_> = doc.elements().iter().map(Element::id).collect();
        assert_eq!(ids, vec![id1, id2]);
        assert!(doc.contains(id1));
    }

    #[test]
    fn test_topmost_hit_prefers_front() {
        let mut doc = Document::new();
        let back = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let front = Rectangle::new(Point::new(50.0, 50.0), 100.0, 100.0);
        let (back_id, front_id) = (back.id(), front.id());
        doc.push(back.into());
        doc.push(front.into());

        assert_eq!(doc.topmost_hit(Point::new(75.0, 75.0), 6.0), Some(front_id));
        assert_eq!(doc.topmost_hit(Point::new(25.0, 25.0), 6.0), Some(back_id));
        assert_eq!(doc.topmost_hit(Point::new(500.0, 500.0), 6.0), None);
    }

    #[test]
    fn test_replace_in_place() {
        let mut doc = Document::new();
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let rect = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let line_id = line.id();
        doc.push(line.clone().into());
        doc.push(rect.into());

        let moved = Element::from(line).with_origin(Point::new(20.0, 20.0));
        assert!(doc.replace(moved.clone()));
        assert_eq!(doc.elements()[0], moved);
        assert_eq!(doc.get(line_id).map(Element::origin), Some(Point::new(20.0, 20.0)));

        let stranger = Rectangle::new(Point::ZERO, 1.0, 1.0);
        assert!(!doc.replace(stranger.into()));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_clone_is_shared_until_write() {
        let mut doc = Document::new();
        doc.push(Rectangle::new(Point::ZERO, 10.0, 10.0).into());
        let snapshot = doc.clone();
        assert!(doc.shares_storage(&snapshot));

        doc.push(Rectangle::new(Point::ZERO, 20.0, 20.0).into());
        assert!(!doc.shares_storage(&snapshot));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_structural_equality() {
        let rect: Element = Rectangle::new(Point::ZERO, 10.0, 10.0).into();
        let a = Document::from(vec![rect.clone()]);
        let b = Document::from(vec![rect]);
        assert!(!a.shares_storage(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut doc = Document::new();
        doc.push(Rectangle::new(Point::new(10.0, 20.0), 30.0, 40.0).into());
        doc.push(Line::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0)).into());
        let json = doc.to_json().unwrap();
        assert!(json.trim_start().starts_with('['));
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }
}
