use quire_style::{AdmonitionPalette, StyleMapping, TableTheme};
use std::sync::Arc;

/// Everything a build reads but never changes.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    pub styles: Arc<StyleMapping>,
    pub table_theme: TableTheme,
    pub admonitions: AdmonitionPalette,
}

impl BuildConfig {
    pub fn new(
        styles: StyleMapping,
        table_theme: TableTheme,
        admonitions: AdmonitionPalette,
    ) -> Self {
        Self {
            styles: Arc::new(styles),
            table_theme,
            admonitions,
        }
    }
}
