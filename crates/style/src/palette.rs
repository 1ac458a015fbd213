//! Color configuration for tables and callouts.

use quire_types::{AdmonitionKind, Color};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

/// Header and banding colors for markdown tables.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableTheme {
    #[serde(default = "TableTheme::default_header_background")]
    pub header_background: Color,
    #[serde(default = "TableTheme::default_header_text")]
    pub header_text: Color,
    #[serde(default = "default_true")]
    pub alternating_rows: bool,
    #[serde(default = "TableTheme::default_alternating_background")]
    pub alternating_background: Color,
}

impl TableTheme {
    fn default_header_background() -> Color {
        Color::from_u32(0x4472C4)
    }

    fn default_header_text() -> Color {
        Color::WHITE
    }

    fn default_alternating_background() -> Color {
        Color::from_u32(0xD9E2F3)
    }
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_background: Self::default_header_background(),
            header_text: Self::default_header_text(),
            alternating_rows: true,
            alternating_background: Self::default_alternating_background(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdmonitionColors {
    /// Glyph shown in the narrow leading column.
    pub icon: String,
    /// Border, icon, and content text color.
    pub color: Color,
    pub background: Color,
}

impl AdmonitionColors {
    pub fn new(icon: impl Into<String>, color: Color, background: Color) -> Self {
        Self {
            icon: icon.into(),
            color,
            background,
        }
    }

    /// Used for a type the palette does not configure.
    pub fn neutral() -> Self {
        Self::new("i", Color::from_u32(0x6E7781), Color::from_u32(0xF6F8FA))
    }
}

/// Admonition type → colors. A configured palette replaces the defaults
/// wholesale; types it leaves out render in neutral gray.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AdmonitionPalette {
    entries: BTreeMap<AdmonitionKind, AdmonitionColors>,
}

impl Default for AdmonitionPalette {
    fn default() -> Self {
        let entries = [
            (
                AdmonitionKind::Note,
                AdmonitionColors::new("i", Color::from_u32(0x0969DA), Color::from_u32(0xDDF4FF)),
            ),
            (
                AdmonitionKind::Tip,
                AdmonitionColors::new("?", Color::from_u32(0x1A7F37), Color::from_u32(0xDCFFE4)),
            ),
            (
                AdmonitionKind::Important,
                AdmonitionColors::new("!", Color::from_u32(0x8250DF), Color::from_u32(0xFBEFFF)),
            ),
            (
                AdmonitionKind::Warning,
                AdmonitionColors::new("!", Color::from_u32(0x9A6700), Color::from_u32(0xFFF8C5)),
            ),
            (
                AdmonitionKind::Caution,
                AdmonitionColors::new("X", Color::from_u32(0xCF222E), Color::from_u32(0xFFEBE9)),
            ),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl AdmonitionPalette {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn with(mut self, kind: AdmonitionKind, colors: AdmonitionColors) -> Self {
        self.entries.insert(kind, colors);
        self
    }

    pub fn get(&self, kind: AdmonitionKind) -> Option<&AdmonitionColors> {
        self.entries.get(&kind)
    }
}
