use crate::attrs::impl_attributed;
use crate::node::TemplateBuilder;
use docpage_markup::{Attribute, Element, MarkupNode};

/// Builder for a plain text node.
#[derive(Clone)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl TemplateBuilder for Text {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Text {
            content: self.content,
        }
    }
}

/// Builder for an `<a>` node.
#[derive(Clone)]
pub struct Hyperlink {
    attrs: Vec<Attribute>,
    children: Vec<Box<dyn TemplateBuilder>>,
}

impl Hyperlink {
    pub fn new(href: &str) -> Self {
        Self {
            attrs: vec![Attribute::new("href", href)],
            children: vec![],
        }
    }

    pub fn child(mut self, child: impl TemplateBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn text(self, content: &str) -> Self {
        self.child(Text::new(content))
    }
}

impl TemplateBuilder for Hyperlink {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Element(Element {
            tag: "a".to_string(),
            attrs: self.attrs,
            children: self.children.into_iter().map(|c| c.build()).collect(),
        })
    }
}

impl_attributed!(Hyperlink);
