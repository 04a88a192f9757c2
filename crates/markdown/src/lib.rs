//! Markdown to markup conversion.
//!
//! Page bodies and usage snippets arrive as markdown. This crate turns them into
//! [`MarkupNode`] fragments that templates can splice directly into a page.
//!
//! ## Key Abstractions
//!
//! - **`HypertextConverter`**: the seam templates call through; swap it out to
//!   render with a different engine or to inject failures in tests.
//! - **`MarkdownConverter`**: the default implementation, built on `pulldown-cmark`.
//! - **`MarkdownOptions`**: toggles for the CommonMark extensions in use.

mod anchors;
mod converter;

#[cfg(test)]
mod tests;

use docpage_markup::MarkupNode;
use std::fmt::Debug;
use thiserror::Error;

pub use anchors::AnchorSet;
pub use converter::MarkdownConverter;

/// Errors raised while converting source content into markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Unbalanced markup: closing '{0}' with no open element")]
    Unbalanced(String),

    #[error("Unbalanced markup: {0} element(s) left open at end of input")]
    Unclosed(usize),

    #[error("Conversion failed: {0}")]
    Other(String),
}

/// Converts markdown-like content into a sequence of markup nodes.
pub trait HypertextConverter: Send + Sync + Debug {
    fn convert(&self, content: &str) -> Result<Vec<MarkupNode>, ConvertError>;

    /// Converts content that shares a page with other fragments. Generated
    /// anchors are claimed from `anchors` so ids stay unique across the page.
    ///
    /// Converters that never generate ids can rely on the default, which
    /// ignores the set.
    fn convert_with_anchors(
        &self,
        content: &str,
        anchors: &mut AnchorSet,
    ) -> Result<Vec<MarkupNode>, ConvertError> {
        let _ = anchors;
        self.convert(content)
    }
}

/// Extensions enabled on top of CommonMark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub task_lists: bool,
    /// Gives every heading an `id`, taken from `{#id}` syntax or slugified text.
    pub heading_anchors: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: true,
            heading_anchors: true,
        }
    }
}
