use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid hex color length: expected 3 or 6 digits, got {0}")]
    Length(usize),
    #[error("Invalid {component} component in '{input}'")]
    Component { component: &'static str, input: String },
}

/// An opaque RGB color as used by run, shading, and border properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Upper-case `RRGGBB`, the form office documents store colors in.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (`RGB`, `RRGGBB`, optionally prefixed with `#`).
    pub fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let component = |digits: &str, name: &'static str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::Component {
                component: name,
                input: s.to_string(),
            })
        };

        match hex.len() {
            3 if hex.is_ascii() => {
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Color { r, g, b })
            }
            6 if hex.is_ascii() => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color { r, g, b })
            }
            len => Err(ColorParseError::Length(len)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Color::parse_hex("#4472C4").unwrap(), Color::rgb(0x44, 0x72, 0xC4));
        assert_eq!(Color::parse_hex("4472c4").unwrap(), Color::rgb(0x44, 0x72, 0xC4));
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Color::parse_hex("#12345"), Err(ColorParseError::Length(5)));
        assert!(matches!(
            Color::parse_hex("GG0000"),
            Err(ColorParseError::Component { component: "red", .. })
        ));
    }

    #[test]
    fn test_to_hex_is_upper_case() {
        assert_eq!(Color::from_u32(0x0563C1).to_hex(), "0563C1");
        assert_eq!(Color::gray(0x80).to_string(), "#808080");
    }

    #[test]
    fn test_deserialize_string_and_map() {
        let c: Color = serde_json::from_str("\"#DDF4FF\"").unwrap();
        assert_eq!(c, Color::from_u32(0xDDF4FF));
        let c: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(c, Color::rgb(1, 2, 3));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"010203\"");
    }
}
