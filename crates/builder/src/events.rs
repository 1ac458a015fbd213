use quire_style::StyleFallback;
use quire_types::AdmonitionKind;
use std::fmt;

/// A rendering decision that degraded gracefully instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackEvent {
    /// A style category resolved to something other than its primary name.
    Style(StyleFallback),
    /// An image could not be embedded and was replaced by placeholder text.
    ImagePlaceholder { src: String, reason: String },
    /// A merge marker had no cell to merge into and rendered as an empty cell.
    MergeIgnored { row: usize, column: usize, marker: &'static str },
    /// The palette has no entry for this admonition type.
    PaletteDefault { kind: AdmonitionKind },
}

impl FallbackEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            FallbackEvent::Style(_) => "style",
            FallbackEvent::ImagePlaceholder { .. } => "image-placeholder",
            FallbackEvent::MergeIgnored { .. } => "merge-ignored",
            FallbackEvent::PaletteDefault { .. } => "palette-default",
        }
    }
}

impl fmt::Display for FallbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackEvent::Style(fallback) => match &fallback.requested {
                Some(requested) => write!(
                    f,
                    "style '{}' for {} unavailable, used '{}'",
                    requested, fallback.category, fallback.resolved
                ),
                None => write!(
                    f,
                    "no style mapped for {}, used '{}'",
                    fallback.category, fallback.resolved
                ),
            },
            FallbackEvent::ImagePlaceholder { src, reason } => {
                write!(f, "image '{}' replaced by placeholder: {}", src, reason)
            }
            FallbackEvent::MergeIgnored { row, column, marker } => write!(
                f,
                "merge marker '{}' at row {}, column {} has no target",
                marker,
                row + 1,
                column + 1
            ),
            FallbackEvent::PaletteDefault { kind } => {
                write!(f, "no palette entry for {}, used neutral colors", kind)
            }
        }
    }
}
