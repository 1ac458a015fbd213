//! Template loading.
//!
//! A template contributes its style catalog and header/footer content to a
//! fresh document; whatever body it carries is discarded.

mod docx;
mod wordml;

pub use docx::DocxTemplateLoader;

use crate::model::Document;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template is not a valid document container: {0}")]
    Container(String),

    #[error("Template is missing required part '{0}'")]
    MissingPart(String),

    #[error("Malformed XML in template part '{part}': {message}")]
    Xml { part: String, message: String },

    #[error("I/O error while reading template: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for TemplateError {
    fn from(e: zip::result::ZipError) -> Self {
        TemplateError::Container(e.to_string())
    }
}

impl TemplateError {
    /// The container part the error refers to, if any.
    pub fn part(&self) -> Option<&str> {
        match self {
            TemplateError::MissingPart(part) | TemplateError::Xml { part, .. } => Some(part),
            TemplateError::Container(_) | TemplateError::Io(_) => None,
        }
    }
}

/// Turns template bytes into a document with no body content.
pub trait TemplateLoader: Send + Sync + Debug {
    fn load(&self, bytes: &[u8]) -> Result<Document, TemplateError>;

    /// Returns a human-readable name for this loader (for logging/debugging).
    fn name(&self) -> &'static str;
}
