//! # quire-builder
//!
//! Turns a tree of [`quire_idf::Node`]s into a [`quire_document::Document`].
//!
//! [`DocumentBuilder`] owns the destination document for one conversion and
//! walks `Uninitialized → Initialized → Populated → Finalized`. Lists,
//! tables, and admonitions each have their own assembler; every degraded
//! decision along the way is returned as a [`FallbackEvent`].

mod admonition;
mod blocks;
mod config;
mod context;
mod document;
mod error;
mod events;
mod inline;
mod list;
mod table;

pub use config::BuildConfig;
pub use document::{BuildOutput, BuildState, DocumentBuilder};
pub use error::BuildError;
pub use events::FallbackEvent;
