use serde::{Deserialize, Serialize};
use std::fmt;

/// Ellipsis appended to truncated labels
pub const ELLIPSIS: char = '…';

/// A plain-text clipboard snapshot. Two clippings are the same clipping
/// when their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clipping(String);

impl Clipping {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Display label, truncated to `max_chars` characters plus an ellipsis.
    pub fn label(&self, max_chars: usize) -> String {
        truncate_label(&self.0, max_chars)
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for Clipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Clipping {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Clipping {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Keep `text` when it fits in `max_chars`, otherwise cut it at a char
/// boundary and append [`ELLIPSIS`].
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut label = String::with_capacity(cut + ELLIPSIS.len_utf8());
            label.push_str(&text[..cut]);
            label.push(ELLIPSIS);
            label
        }
    }
}
