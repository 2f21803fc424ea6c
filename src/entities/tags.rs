//! Ordered set of unique tag labels.

/// Tags seeded into a fresh ledger.
pub const DEFAULT_TAGS: [&str; 4] = ["Normal", "Arbitrage", "Value Bet", "Sure Bet"];

/// Insertion-ordered set of unique tag strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from labels, keeping the first of any duplicates.
    /// Returns the set and the labels that were dropped.
    pub fn from_tags<I, S>(tags: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        let mut duplicates = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if set.contains(&tag) {
                duplicates.push(tag);
            } else {
                set.tags.push(tag);
            }
        }
        (set, duplicates)
    }

    /// The four default tags.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_tags(DEFAULT_TAGS).0
    }

    /// True when the label is in the set.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Appends a label unless present. Returns whether it was added.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Replaces `old` with `new` in place. Returns false when `old` is absent.
    pub fn rename(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.tags.iter_mut().find(|t| t.as_str() == old) {
            Some(slot) => {
                *slot = new.into();
                true
            }
            None => false,
        }
    }

    /// Removes a label. Returns whether it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Labels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
