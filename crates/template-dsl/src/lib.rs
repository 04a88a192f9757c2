//! A fluent, code-based API for building page markup.
//!
//! This crate provides a collection of builder structs that allow you to construct
//! a markup tree programmatically, plus the widget functions the documentation site
//! is assembled from (table of contents, tabs, command prompts, promo cards).
//!
//! # Creating Reusable Components
//!
//! A "widget function" takes your component's data and returns a pre-configured
//! builder, which composes like any other builder.
//!
//! ```
//! use docpage_template_dsl::builders::*;
//! use docpage_template_dsl::{Attributed, TemplateBuilder, anchored_h2};
//!
//! fn note(title: &str, body: &str) -> Section {
//!     Section::new()
//!         .class("note")
//!         .child(anchored_h2("note", title))
//!         .child(Paragraph::new().text(body))
//! }
//!
//! let node = Box::new(Article::new().child(note("Heads up", "Read this first."))).build();
//! assert_eq!(node.find_by_id("note").map(|h| h.tag.as_str()), Some("h2"));
//! ```

mod attrs;
mod block;
mod component;
mod heading;
mod image;
mod list;
mod node;
mod text;
mod widgets;

pub mod icons;


/// Contains all the building blocks for creating markup.
///
/// Import with `use docpage_template_dsl::builders::*;` for convenience.
pub mod builders {
    pub use super::block::{Article, Blockquote, Div, Nav, Paragraph, Section};
    pub use super::component::Component;
    pub use super::heading::Heading;
    pub use super::image::Image;
    pub use super::list::{ListItem, UnorderedList};
    pub use super::text::{Hyperlink, Text};
}

pub use self::attrs::Attributed;
pub use self::node::{CloneTemplateBuilder, TemplateBuilder};
pub use self::widgets::*;

use docpage_markup::MarkupNode;

/// Builds any builder into its finished markup node.
pub fn render(builder: impl TemplateBuilder + 'static) -> MarkupNode {
    Box::new(builder).build()
}
