//! The set of style names a destination document declares.

use std::collections::BTreeSet;

/// Style every office document is guaranteed to carry.
pub const UNIVERSAL_STYLE: &str = "Normal";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleCatalog {
    names: BTreeSet<String>,
}

impl StyleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of a blank document: only the universal style.
    pub fn minimal() -> Self {
        let mut catalog = Self::new();
        catalog.insert(UNIVERSAL_STYLE);
        catalog
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StyleCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for StyleCatalog {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
