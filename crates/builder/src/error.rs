use crate::document::BuildState;
use quire_document::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot {operation} a document that is {state}")]
    InvalidState { operation: &'static str, state: BuildState },

    #[error("Cannot render {kind}: {reason}")]
    Unrenderable { kind: &'static str, reason: String },

    #[error(transparent)]
    Template(#[from] TemplateError),
}
