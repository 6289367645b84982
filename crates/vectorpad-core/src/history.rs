//! Linear undo/redo history of document snapshots.

use crate::document::Document;

/// Two stacks of document snapshots. `past` grows on every commit; `future`
/// is filled only by undo and emptied by any new commit.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    past: Vec<Document>,
    future: Vec<Document>,
    limit: Option<usize>,
}

impl HistoryStack {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` undo entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Record a snapshot and invalidate the redo lineage.
    pub fn snapshot(&mut self, document: &Document) {
        self.past.push(document.clone());
        self.future.clear();

        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
        log::debug!("History snapshot ({} undo entries)", self.past.len());
    }

    /// Pop the most recent snapshot, parking `current` for redo.
    /// Returns the document to restore, or None if there is nothing to undo.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let previous = self.past.pop()?;
        self.future.push(current.clone());
        Some(previous)
    }

    /// Pop the most recently undone snapshot, parking `current` for undo.
    /// Returns the document to restore, or None if there is nothing to redo.
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let next = self.future.pop()?;
        self.past.push(current.clone());
        Some(next)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo entries.
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of redo entries.
    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;
    use kurbo::Point;

    fn doc_with(n: usize) -> Document {
        let mut doc = Document::new();
        for i in 0..n {
            doc.push(Rectangle::new(Point::new(i as f64 * 10.0, 0.0), 5.0, 5.0).into());
        }
        doc
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut history = HistoryStack::new();
        let current = doc_with(1);
        assert!(!history.can_undo());
        assert!(history.undo(&current).is_none());
        assert!(!history.can_redo());
        assert!(history.redo(&current).is_none());
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = HistoryStack::new();
        let before = doc_with(0);
        let after = doc_with(1);
        history.snapshot(&before);

        let restored = history.undo(&after).unwrap();
        assert_eq!(restored, before);
        assert_eq!(history.past_len(), 0);
        assert_eq!(history.future_len(), 1);

        let redone = history.redo(&restored).unwrap();
        assert_eq!(redone, after);
        assert_eq!(history.past_len(), 1);
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn test_snapshot_clears_redo() {
        let mut history = HistoryStack::new();
        history.snapshot(&doc_with(0));
        history.snapshot(&doc_with(1));
        let _ = history.undo(&doc_with(2));
        assert!(history.can_redo());

        history.snapshot(&doc_with(1));
        assert!(!history.can_redo());
        assert_eq!(history.past_len(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = HistoryStack::with_limit(Some(2));
        history.snapshot(&doc_with(0));
        history.snapshot(&doc_with(1));
        history.snapshot(&doc_with(2));
        assert_eq!(history.past_len(), 2);

        let restored = history.undo(&doc_with(3)).unwrap();
        assert_eq!(restored.len(), 2);
        let restored = history.undo(&restored).unwrap();
        assert_eq!(restored.len(), 1);
        assert!(history.undo(&restored).is_none());
    }
}
