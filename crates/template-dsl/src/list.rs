use crate::attrs::impl_attributed;
use crate::builders::Text;
use crate::node::TemplateBuilder;
use docpage_markup::{Attribute, Element, MarkupNode};

/// Builder for a `<ul>` node.
#[derive(Default, Clone)]
pub struct UnorderedList {
    attrs: Vec<Attribute>,
    children: Vec<ListItem>,
}

impl UnorderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(mut self, items: impl IntoIterator<Item = ListItem>) -> Self {
        self.children.extend(items);
        self
    }
}

impl TemplateBuilder for UnorderedList {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Element(Element {
            tag: "ul".to_string(),
            attrs: self.attrs,
            children: self
                .children
                .into_iter()
                .map(|item| Box::new(item).build())
                .collect(),
        })
    }
}

/// Builder for an `<li>` node.
#[derive(Default, Clone)]
pub struct ListItem {
    attrs: Vec<Attribute>,
    children: Vec<Box<dyn TemplateBuilder>>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list item holding a single run of plain text.
    pub fn text_item(content: &str) -> Self {
        Self::new().child(Text::new(content))
    }

    pub fn child(mut self, child: impl TemplateBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl TemplateBuilder for ListItem {
    fn build(self: Box<Self>) -> MarkupNode {
        MarkupNode::Element(Element {
            tag: "li".to_string(),
            attrs: self.attrs,
            children: self.children.into_iter().map(|c| c.build()).collect(),
        })
    }
}

impl_attributed!(UnorderedList, ListItem);
