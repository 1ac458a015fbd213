use quire_builder::BuildConfig;
use quire_style::{AdmonitionPalette, StyleMapping, TableTheme};
use serde::{Deserialize, Serialize};

/// Style mapping, table colors, and callout palette in one deserializable
/// bundle. Every field is optional and falls back to the built-in defaults.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterConfig {
    pub styles: StyleMapping,
    pub table_theme: TableTheme,
    pub admonitions: AdmonitionPalette,
}

impl ConverterConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub(crate) fn into_build_config(self) -> BuildConfig {
        BuildConfig::new(self.styles, self.table_theme, self.admonitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_style::StyleCategory;
    use quire_types::{AdmonitionKind, Color};

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ConverterConfig::from_json(
            r##"{
                "styles": { "heading-1": ["Title", "Heading 1"] },
                "tableTheme": { "headerBackground": "#112233" }
            }"##,
        )
        .unwrap();

        let heading = config.styles.get(StyleCategory::Heading(1)).unwrap();
        assert_eq!(heading.primary, "Title");
        assert_eq!(config.styles.get(StyleCategory::Quote).unwrap().primary, "Quote");
        assert_eq!(config.table_theme.header_background, Color::from_u32(0x112233));
        assert!(config.table_theme.alternating_rows);
        assert!(config.admonitions.get(AdmonitionKind::Note).is_some());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ConverterConfig::from_json("{}").unwrap(), ConverterConfig::default());
    }
}
