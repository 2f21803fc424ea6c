//! Ordered, name-keyed storage for teams, championships and strategies.
//!
//! Names are matched exactly (case-sensitive). Insertion order is kept since
//! it is the display order of every registry listing.

/// A record identified by a unique name.
pub trait Named {
    /// The record's unique name.
    fn name(&self) -> &str;
    /// Replaces the record's name.
    fn set_name(&mut self, name: String);
}

/// Insertion-ordered collection of uniquely named records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Named> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from records, keeping the first of any duplicated
    /// names. Returns the registry and the names that were dropped.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> (Self, Vec<String>) {
        let mut registry = Self::new();
        let mut duplicates = Vec::new();
        for item in items {
            let name = item.name().to_string();
            if !registry.insert(item) {
                duplicates.push(name);
            }
        }
        (registry, duplicates)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Named::name)
    }

    /// True when a record with exactly this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Record with exactly this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Mutable record with exactly this name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    /// Mutable access to every record, in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Appends a record unless its name is taken. Returns whether it was added.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(item.name()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes and returns the record with this name, keeping the order of
    /// the rest.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let idx = self.position(name)?;
        Some(self.items.remove(idx))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
