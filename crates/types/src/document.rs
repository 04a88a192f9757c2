use serde::{Deserialize, Serialize};

/// An entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// The visible link text.
    pub text: String,
    /// The link target, usually an in-page fragment such as `#usage`.
    pub href: String,
}

impl HeadingEntry {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }

    /// Returns true when `href` points into the current page (`#...`).
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }
}
