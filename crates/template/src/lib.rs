//! # quire-template
//!
//! Variables reach a document twice. Before parsing, the markdown source is
//! rendered as a Handlebars template ([`SourceRenderer`]). After the build,
//! strict `{{identifier}}` placeholders left in the document, including
//! those that came from the template's headers and footers, are replaced in
//! place ([`substitute_placeholders`]).

mod error;
mod placeholder;
mod source;

pub use error::SubstitutionError;
pub use placeholder::{extract_placeholders, substitute_placeholders};
pub use source::SourceRenderer;

use std::collections::BTreeMap;

/// Variable values keyed by name.
pub type Variables = BTreeMap<String, serde_json::Value>;
