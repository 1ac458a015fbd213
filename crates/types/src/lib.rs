pub mod admonition;
pub mod color;
pub mod length;

pub use admonition::{AdmonitionKind, UnknownAdmonitionKind};
pub use color::{Color, ColorParseError};
pub use length::Length;
