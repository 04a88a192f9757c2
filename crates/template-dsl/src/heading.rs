use crate::attrs::impl_attributed;
use crate::builders::Text;
use crate::node::TemplateBuilder;
use docpage_markup::{Attribute, Element, MarkupNode};

/// Builder for an `<h1>`..`<h6>` node.
#[derive(Clone)]
pub struct Heading {
    level: u8,
    attrs: Vec<Attribute>,
    children: Vec<Box<dyn TemplateBuilder>>,
}

impl Heading {
    /// Levels outside `1..=6` are clamped into range.
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(1, 6),
            attrs: vec![],
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

impl TemplateBuilder for Heading {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Element(Element {
            tag: format!("h{}", self.level),
            attrs: self.attrs,
            children: self.children.into_iter().map(|c| c.build()).collect(),
        })
    }
}

impl_attributed!(Heading);
