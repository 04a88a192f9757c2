// src/renderer.rs

use crate::error::RenderError;
use crate::templates::native;
use docpage_markdown::{AnchorSet, HypertextConverter, MarkdownConverter, MarkdownOptions};
use docpage_markup::{MarkupNode, to_html, to_html_document};
use docpage_types::Page;
use std::sync::Arc;

/// What to do with a package identifier that has no `scope/name` separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageIdPolicy {
    /// Use the whole identifier as the package name and log a warning.
    #[default]
    FallbackToFullId,
    /// Fail the render with [`RenderError::InvalidPackageId`].
    Reject,
}

/// Renders native plugin pages. Immutable once built, so one instance can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    converter: Arc<dyn HypertextConverter>,
    package_id_policy: PackageIdPolicy,
}

impl Default for PageRenderer {
    fn default() -> Self {
        RendererBuilder::new().build()
    }
}

impl PageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    pub fn package_id_policy(&self) -> PackageIdPolicy {
        self.package_id_policy
    }

    /// Renders the page into a markup tree rooted at `<article>`.
    pub fn render(&self, page: &Page) -> Result<MarkupNode, RenderError> {
        native::render(self, page)
    }

    /// Renders the page as an HTML fragment.
    pub fn render_html(&self, page: &Page) -> Result<String, RenderError> {
        Ok(to_html(&self.render(page)?))
    }

    /// Renders the page as a standalone HTML document.
    pub fn render_document(&self, page: &Page) -> Result<String, RenderError> {
        Ok(to_html_document(&self.render(page)?, &page.title))
    }

    /// Converts markdown-like content through the configured converter. Generated
    /// heading ids are claimed from `anchors` so they stay unique across the page.
    pub fn to_hypertext_with_anchors(
        &self,
        content: &str,
        anchors: &mut AnchorSet,
    ) -> Result<Vec<MarkupNode>, RenderError> {
        Ok(self.converter.convert_with_anchors(content, anchors)?)
    }
}

#[derive(Default)]
pub struct RendererBuilder {
    converter: Option<Arc<dyn HypertextConverter>>,
    markdown_options: MarkdownOptions,
    package_id_policy: PackageIdPolicy,
}

impl RendererBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the markdown converter. Takes precedence over
    /// [`with_markdown_options`](Self::with_markdown_options).
    pub fn with_converter(mut self, converter: impl HypertextConverter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown_options = options;
        self
    }

    pub fn with_package_id_policy(mut self, policy: PackageIdPolicy) -> Self {
        self.package_id_policy = policy;
        self
    }

    pub fn build(self) -> PageRenderer {
        let converter: Arc<dyn HypertextConverter> = match self.converter {
            Some(converter) => converter,
            None => Arc::new(MarkdownConverter::new(self.markdown_options)),
        };
        PageRenderer {
            converter,
            package_id_policy: self.package_id_policy,
        }
    }
}
