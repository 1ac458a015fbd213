//! Document-unique heading anchors.

use std::collections::HashSet;

const EMPTY_SLUG: &str = "section";

/// Hands out slugs, suffixing `-1`, `-2`, ... on collision in order of
/// first occurrence.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    used: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, text: &str) -> String {
        let mut base = slug::slugify(text);
        if base.is_empty() {
            base = EMPTY_SLUG.to_string();
        }

        let mut candidate = base.clone();
        let mut suffix = 0usize;
        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", base, suffix);
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
