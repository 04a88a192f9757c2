use docpage_markup::Attribute;
use itertools::Itertools;

/// The core trait for adding attributes fluently.
pub trait Attributed: Sized {
    fn attrs_mut(&mut self) -> &mut Vec<Attribute>;

    /// Sets an attribute, replacing an earlier value of the same name.
    fn attr(mut self, name: &str, value: &str) -> Self {
        set(self.attrs_mut(), name, Some(value.to_string()));
        self
    }

    /// Sets a boolean attribute such as `hidden`.
    fn flag(mut self, name: &str) -> Self {
        set(self.attrs_mut(), name, None);
        self
    }

    fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Adds a class, keeping any classes already present.
    fn class(mut self, class: &str) -> Self {
        let attrs = self.attrs_mut();
        let existing = attrs
            .iter()
            .find(|a| a.name == "class")
            .and_then(|a| a.value.clone())
            .unwrap_or_default();
        let merged = existing
            .split_whitespace()
            .chain(class.split_whitespace())
            .unique()
            .join(" ");
        set(attrs, "class", Some(merged));
        self
    }

    fn slot(self, slot: &str) -> Self {
        self.attr("slot", slot)
    }
}

fn set(attrs: &mut Vec<Attribute>, name: &str, value: Option<String>) {
    match attrs.iter_mut().find(|a| a.name == name) {
        Some(existing) => existing.value = value,
        None => attrs.push(Attribute {
            name: name.to_string(),
            value,
        }),
    }
}

/// A macro to implement the trait for any builder struct that has
/// an `attrs: Vec<Attribute>` field.
macro_rules! impl_attributed {
    ($($t:ty),+) => {
        $(
            impl $crate::attrs::Attributed for $t {
                fn attrs_mut(&mut self) -> &mut Vec<::docpage_markup::Attribute> {
                    &mut self.attrs
                }
            }
        )+
    };
}

pub(crate) use impl_attributed;
