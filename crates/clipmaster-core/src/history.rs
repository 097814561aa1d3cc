//! Ordered, deduplicated clipping history.
//!
//! Index 0 is always the newest clipping. Uniqueness is enforced on insert,
//! so reads never have to filter.

use crate::clipping::Clipping;

#[derive(Debug, Clone, Default)]
pub struct ClippingHistory {
    items: Vec<Clipping>,
}

impl ClippingHistory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Exact text match anywhere in the history
    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|c| c.text() == text)
    }

    /// Prepend `text` unless it is already present. Returns the new clipping
    /// on insert, `None` on duplicate.
    pub fn push_front(&mut self, text: String) -> Option<Clipping> {
        if self.contains(&text) {
            return None;
        }
        let clipping = Clipping::new(text);
        self.items.insert(0, clipping.clone());
        Some(clipping)
    }

    /// Get a specific clipping by index (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&Clipping> {
        self.items.get(index)
    }

    /// The `limit` newest clippings
    pub fn recent(&self, limit: usize) -> &[Clipping] {
        &self.items[..self.items.len().min(limit)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clipping> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
