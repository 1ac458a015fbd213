//! # quire-core
//!
//! Markdown to styled office document conversion.
//!
//! A conversion runs in five steps:
//! - **pass A**: handlebars expressions in the markdown source are rendered
//! - **parse**: the source becomes a tree of IDF nodes
//! - **build**: the nodes are assembled into a [`Document`], starting from
//!   the template's styles, headers, and footers when one is given
//! - **pass B**: `{{name}}` placeholders still present in the document
//!   (including template headers and footers) are filled in
//! - **write**: optional; any [`DocumentWriter`] can serialize the result
//!
//! Style lookups that miss the template degrade through fallbacks instead of
//! failing. Each degraded decision is returned as a [`FallbackEvent`].
//!
//! This crate has no filesystem access except the explicit `*_file`
//! entry points.

pub use quire_builder as builder;
pub use quire_document as document;
pub use quire_idf as idf;
pub use quire_markdown as markdown;
pub use quire_style as style;
pub use quire_template as template;
pub use quire_traits as traits;
pub use quire_types as types;

mod config;
mod converter;
mod error;

pub use config::ConverterConfig;
pub use converter::{Conversion, Converter, ConverterBuilder};
pub use error::ConversionError;

pub use quire_builder::{BuildState, DocumentBuilder, FallbackEvent};
pub use quire_document::{
    Document, DocumentWriter, DocxTemplateLoader, PlainTextWriter, TemplateLoader,
};
pub use quire_resource::FilesystemResourceProvider;
pub use quire_style::{AdmonitionColors, AdmonitionPalette, StyleCategory, StyleMapping, TableTheme};
pub use quire_template::Variables;
pub use quire_traits::{InMemoryResourceProvider, ResourceError, ResourceProvider};
pub use quire_types::{AdmonitionKind, Color, Length};
