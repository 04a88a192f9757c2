use crate::attrs::impl_attributed;
use crate::node::TemplateBuilder;
use docpage_markup::{Attribute, Element, MarkupNode};

/// Builder for an `<img>` node.
#[derive(Clone)]
pub struct Image {
    attrs: Vec<Attribute>,
}

impl Image {
    pub fn new(src: &str) -> Self {
        Self {
            attrs: vec![Attribute::new("src", src)],
        }
    }
}

impl TemplateBuilder for Image {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Element(Element {
            tag: "img".to_string(),
            attrs: self.attrs,
            children: vec![],
        })
    }
}

impl_attributed!(Image);
