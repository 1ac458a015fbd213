//! Abstract formatting roles, independent of any template's style names.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleConfigError {
    #[error("Unknown style category: '{0}'")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleCategory {
    Heading(u8),
    Paragraph,
    Quote,
    CodeBlock,
    CodeInline,
    ListBullet,
    ListNumber,
    Table,
    Caption,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 14] = [
        StyleCategory::Heading(1),
        StyleCategory::Heading(2),
        StyleCategory::Heading(3),
        StyleCategory::Heading(4),
        StyleCategory::Heading(5),
        StyleCategory::Heading(6),
        StyleCategory::Paragraph,
        StyleCategory::Quote,
        StyleCategory::CodeBlock,
        StyleCategory::CodeInline,
        StyleCategory::ListBullet,
        StyleCategory::ListNumber,
        StyleCategory::Table,
        StyleCategory::Caption,
    ];

    /// Heading category for `level`, clamped into 1..=6.
    pub fn heading(level: u8) -> Self {
        StyleCategory::Heading(level.clamp(1, 6))
    }

    pub fn key(&self) -> String {
        match self {
            StyleCategory::Heading(level) => format!("heading-{}", level),
            StyleCategory::Paragraph => "paragraph".to_string(),
            StyleCategory::Quote => "quote".to_string(),
            StyleCategory::CodeBlock => "code-block".to_string(),
            StyleCategory::CodeInline => "code-inline".to_string(),
            StyleCategory::ListBullet => "list-bullet".to_string(),
            StyleCategory::ListNumber => "list-number".to_string(),
            StyleCategory::Table => "table".to_string(),
            StyleCategory::Caption => "caption".to_string(),
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for StyleCategory {
    type Err = StyleConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(level) = key.strip_prefix("heading-") {
            return match level.parse::<u8>() {
                Ok(n @ 1..=6) => Ok(StyleCategory::Heading(n)),
                _ => Err(StyleConfigError::UnknownCategory(s.to_string())),
            };
        }
        match key.as_str() {
            "paragraph" => Ok(StyleCategory::Paragraph),
            "quote" => Ok(StyleCategory::Quote),
            "code-block" => Ok(StyleCategory::CodeBlock),
            "code-inline" => Ok(StyleCategory::CodeInline),
            "list-bullet" => Ok(StyleCategory::ListBullet),
            "list-number" => Ok(StyleCategory::ListNumber),
            "table" => Ok(StyleCategory::Table),
            "caption" => Ok(StyleCategory::Caption),
            _ => Err(StyleConfigError::UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for StyleCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for StyleCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
