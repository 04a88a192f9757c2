//! Renders native plugin documentation pages.
//!
//! ```
//! use docpage::{Page, PageRenderer};
//!
//! let page = Page {
//!     body: "Take pictures with the device camera.".into(),
//!     cordova: Some("cordova-plugin-camera".into()),
//!     package: Some("@ionic-native/camera".into()),
//!     platforms: vec!["Android".into(), "iOS".into()],
//!     ..Page::new("Camera", "/docs/native/camera")
//! };
//!
//! let html = PageRenderer::new().render_html(&page).unwrap();
//! assert!(html.contains("npm install @ionic-enterprise/camera"));
//! ```

pub mod error;
pub mod loader;
pub mod renderer;
pub mod templates;

pub use error::{DocpageError, LoadError, RenderError};
pub use renderer::{PackageIdPolicy, PageRenderer, RendererBuilder};

pub use docpage_markdown::{
    AnchorSet, ConvertError, HypertextConverter, MarkdownConverter, MarkdownOptions,
};
pub use docpage_markup::{Element, MarkupNode, to_html, to_html_document};
pub use docpage_types::{HeadingEntry, Page};
