use crate::attrs::impl_attributed;
use crate::builders::Text;
use crate::node::TemplateBuilder;
use docpage_markup::{Attribute, Element, MarkupNode};

/// Builder for an element with an arbitrary tag, used for the site's
/// custom elements (`docs-tabs`, `command-line`, ...) and inline SVG.
#[derive(Clone)]
pub struct Component {
    tag: String,
    attrs: Vec<Attribute>,
    children: Vec<Box<dyn TemplateBuilder>>,
}

impl Component {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
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

impl TemplateBuilder for Component {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Element(Element {
            tag: self.tag,
            attrs: self.attrs,
            children: self.children.into_iter().map(|c| c.build()).collect(),
        })
    }
}

impl_attributed!(Component);
