pub mod catalog;
pub mod category;
pub mod mapping;
pub mod palette;
pub mod resolver;
pub mod text;

pub use catalog::{StyleCatalog, UNIVERSAL_STYLE};
pub use category::{StyleCategory, StyleConfigError};
pub use mapping::{StyleChoice, StyleMapping};
pub use palette::{AdmonitionColors, AdmonitionPalette, TableTheme};
pub use resolver::{StyleFallback, StyleResolver};
pub use text::TextAlign;
