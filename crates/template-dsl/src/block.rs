use crate::attrs::impl_attributed;
use crate::builders::Text;
use crate::node::TemplateBuilder;
use docpage_markup::{Attribute, Element, MarkupNode};

macro_rules! define_container_builder {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Default, Clone)]
        pub struct $name {
            attrs: Vec<Attribute>,
            children: Vec<Box<dyn TemplateBuilder>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn child(mut self, child: impl TemplateBuilder + 'static) -> Self {
                self.children.push(Box::new(child));
                self
            }

            /// Adds the child when present; `None` contributes nothing.
            pub fn maybe_child(self, child: Option<impl TemplateBuilder + 'static>) -> Self {
                match child {
                    Some(child) => self.child(child),
                    None => self,
                }
            }

            pub fn children<B: TemplateBuilder + 'static>(
                mut self,
                children: impl IntoIterator<Item = B>,
            ) -> Self {
                self.children
                    .extend(children.into_iter().map(|c| Box::new(c) as Box<dyn TemplateBuilder>));
                self
            }

            pub fn text(self, content: &str) -> Self {
                self.child(Text::new(content))
            }
        }

        impl TemplateBuilder for $name {
            fn build(self: Box<Self>) -> MarkupNode {
                MarkupNode::Element(Element {
                    tag: $tag.to_string(),
                    attrs: self.attrs,
                    children: self.children.into_iter().map(|c| c.build()).collect(),
                })
            }
        }
    };
}

define_container_builder!(Article, "article");
define_container_builder!(Section, "section");
define_container_builder!(Div, "div");
define_container_builder!(Nav, "nav");
define_container_builder!(Blockquote, "blockquote");
define_container_builder!(
    /// Builder for a `<p>` node.
    Paragraph,
    "p"
);

impl_attributed!(Article, Section, Div, Nav, Blockquote, Paragraph);
