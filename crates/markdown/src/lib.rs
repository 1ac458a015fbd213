//! # quire-markdown
//!
//! Turns the event stream of `pulldown-cmark` into the closed IDF tree:
//! heading anchors are assigned, GitHub style callouts are promoted to
//! admonitions, and table merge markers are decoded into cell flags.

pub mod anchors;
pub mod builder;
pub mod callout;
pub mod cells;
pub mod error;
mod inline;
pub mod source;

pub use anchors::AnchorRegistry;
pub use builder::AstBuilder;
pub use error::ParseError;
pub use source::{
    decode_source, normalize_line_endings, parse_bytes, parse_file, parse_markdown, parser_options,
    read_source,
};
