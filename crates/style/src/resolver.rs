//! Resolves style categories against one destination catalog.
//!
//! Resolution walks `[primary, ..fallbacks]` and takes the first name the
//! catalog declares; when none is declared the universal style is used.
//! It never fails. Each answer is computed once per resolver, which lives
//! for exactly one document build, and every non-primary answer is recorded.

use crate::catalog::{StyleCatalog, UNIVERSAL_STYLE};
use crate::category::StyleCategory;
use crate::mapping::StyleMapping;
use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

/// A resolution that could not use the primary name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFallback {
    pub category: StyleCategory,
    /// The primary name, or `None` when the category has no mapping entry.
    pub requested: Option<String>,
    pub resolved: String,
    /// Nothing in the candidate list was declared.
    pub universal: bool,
}

#[derive(Debug)]
pub struct StyleResolver {
    mapping: Arc<StyleMapping>,
    catalog: StyleCatalog,
    resolved: HashMap<StyleCategory, String>,
    fallbacks: Vec<StyleFallback>,
}

impl StyleResolver {
    pub fn new(mapping: Arc<StyleMapping>, catalog: StyleCatalog) -> Self {
        Self {
            mapping,
            catalog,
            resolved: HashMap::new(),
            fallbacks: Vec::new(),
        }
    }

    pub fn resolve(&mut self, category: StyleCategory) -> &str {
        if !self.resolved.contains_key(&category) {
            let name = self.compute(category);
            self.resolved.insert(category, name);
        }
        self.resolved
            .get(&category)
            .map(String::as_str)
            .unwrap_or(UNIVERSAL_STYLE)
    }

    fn compute(&mut self, category: StyleCategory) -> String {
        let Some(choice) = self.mapping.get(category) else {
            warn!("No style mapping for category '{}'; using '{}'.", category, UNIVERSAL_STYLE);
            self.fallbacks.push(StyleFallback {
                category,
                requested: None,
                resolved: UNIVERSAL_STYLE.to_string(),
                universal: true,
            });
            return UNIVERSAL_STYLE.to_string();
        };

        if let Some(name) = choice.candidates().find(|name| self.catalog.contains(name)) {
            if name != choice.primary {
                warn!(
                    "Style '{}' for category '{}' not in template; using fallback '{}'.",
                    choice.primary, category, name
                );
                self.fallbacks.push(StyleFallback {
                    category,
                    requested: Some(choice.primary.clone()),
                    resolved: name.to_string(),
                    universal: false,
                });
            }
            return name.to_string();
        }

        warn!(
            "No style for category '{}' matched the template (wanted '{}'); using '{}'.",
            category, choice.primary, UNIVERSAL_STYLE
        );
        self.fallbacks.push(StyleFallback {
            category,
            requested: Some(choice.primary.clone()),
            resolved: UNIVERSAL_STYLE.to_string(),
            universal: true,
        });
        UNIVERSAL_STYLE.to_string()
    }

    /// Drains the fallbacks recorded so far, in resolution order.
    pub fn take_fallbacks(&mut self) -> Vec<StyleFallback> {
        std::mem::take(&mut self.fallbacks)
    }
}
