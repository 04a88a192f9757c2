use docpage_markup::MarkupNode;

/// A helper trait for cloning trait objects of `TemplateBuilder`.
pub trait CloneTemplateBuilder {
    fn clone_box(&self) -> Box<dyn TemplateBuilder>;
}

impl<T> CloneTemplateBuilder for T
where
    T: 'static + TemplateBuilder + Clone,
{
    fn clone_box(&self) -> Box<dyn TemplateBuilder> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn TemplateBuilder> {
    fn clone(&self) -> Box<dyn TemplateBuilder> {
        self.clone_box()
    }
}

/// The central trait for all builder structs.
///
/// It allows for polymorphic composition, enabling different builders
/// (like `Section` or `Hyperlink`) to be stored in a `Vec` as children.
pub trait TemplateBuilder: CloneTemplateBuilder + Send + Sync {
    /// Consumes the builder and returns the finished markup node.
    fn build(self: Box<Self>) -> MarkupNode;
}

/// Already-built markup (for example converted markdown) can be used as a child directly.
impl TemplateBuilder for MarkupNode {
    fn build(self: Box<Self>) -> MarkupNode {
        *self
    }
}
