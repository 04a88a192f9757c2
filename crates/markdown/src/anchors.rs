use std::collections::HashSet;

/// The element ids already taken on a page.
///
/// Generated heading anchors are claimed through this set so that a repeated
/// heading, or one that collides with a reserved section id, gets a `-1`, `-2`,
/// ... suffix instead of a duplicate id.
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    used: HashSet<String>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with `ids` already taken.
    pub fn with_reserved<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.reserve(id);
        }
        set
    }

    /// Marks `id` as taken without rewriting it. Used for explicit `{#id}` anchors.
    pub fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Returns `base` if it is free, otherwise the first free `base-N`, and marks it taken.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
