//! Category → concrete style name candidates.

use crate::category::StyleCategory;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A primary style name followed by the names to try when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleChoice {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
}

impl StyleChoice {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallbacks: Vec::new(),
        }
    }

    pub fn with_fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallbacks = fallbacks.into_iter().map(Into::into).collect();
        self
    }

    /// Primary first, then fallbacks, in order.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.fallbacks.iter().map(String::as_str))
    }
}

/// Configured entries are laid over the built-in defaults, so a partial
/// mapping only overrides the categories it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMapping {
    entries: BTreeMap<StyleCategory, StyleChoice>,
}

impl Default for StyleMapping {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        for level in 1..=6u8 {
            entries.insert(
                StyleCategory::Heading(level),
                StyleChoice::new(format!("Heading {}", level)),
            );
        }
        entries.insert(StyleCategory::Paragraph, StyleChoice::new("Normal"));
        entries.insert(
            StyleCategory::Quote,
            StyleChoice::new("Quote").with_fallbacks(["Intense Quote"]),
        );
        entries.insert(
            StyleCategory::CodeBlock,
            StyleChoice::new("Code Block").with_fallbacks(["HTML Preformatted"]),
        );
        entries.insert(
            StyleCategory::CodeInline,
            StyleChoice::new("Code Char").with_fallbacks(["HTML Code"]),
        );
        // Prefixes are written as literal text, so list paragraphs avoid the
        // auto-numbering list styles.
        entries.insert(StyleCategory::ListBullet, StyleChoice::new("List Paragraph"));
        entries.insert(StyleCategory::ListNumber, StyleChoice::new("List Paragraph"));
        entries.insert(StyleCategory::Table, StyleChoice::new("Table Grid"));
        entries.insert(StyleCategory::Caption, StyleChoice::new("Caption"));
        Self { entries }
    }
}

impl StyleMapping {
    /// A mapping with no entries; every category resolves to the universal style.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, category: StyleCategory, choice: StyleChoice) {
        self.entries.insert(category, choice);
    }

    pub fn with(mut self, category: StyleCategory, choice: StyleChoice) -> Self {
        self.set(category, choice);
        self
    }

    pub fn get(&self, category: StyleCategory) -> Option<&StyleChoice> {
        self.entries.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleCategory, &StyleChoice)> {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for StyleMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ChoiceDef {
            Names(Vec<String>),
            Name(String),
            Full(StyleChoice),
        }

        let overrides = BTreeMap::<StyleCategory, ChoiceDef>::deserialize(deserializer)?;
        let mut mapping = StyleMapping::default();
        for (category, def) in overrides {
            let choice = match def {
                ChoiceDef::Name(name) => StyleChoice::new(name),
                ChoiceDef::Full(choice) => choice,
                ChoiceDef::Names(names) => {
                    let mut names = names.into_iter();
                    match names.next() {
                        Some(primary) => StyleChoice::new(primary).with_fallbacks(names),
                        None => {
                            return Err(serde::de::Error::custom(format!(
                                "style category '{}' needs at least one name",
                                category
                            )));
                        }
                    }
                }
            };
            mapping.set(category, choice);
        }
        Ok(mapping)
    }
}
