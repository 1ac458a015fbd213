//! The unified error for a conversion.

use quire_builder::BuildError;
use quire_document::{TemplateError, WriteError};
use quire_markdown::ParseError;
use quire_template::SubstitutionError;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Building failed: {0}")]
    Build(BuildError),

    #[error("Template failed: {0}")]
    Template(#[from] TemplateError),

    #[error("Variable substitution failed: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Writing failed: {0}")]
    Write(#[from] WriteError),
}

impl From<BuildError> for ConversionError {
    fn from(e: BuildError) -> Self {
        match e {
            BuildError::Template(e) => ConversionError::Template(e),
            other => ConversionError::Build(other),
        }
    }
}

impl ConversionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Parse(_) => "parse",
            ConversionError::Build(_) => "build",
            ConversionError::Template(_) => "template",
            ConversionError::Substitution(_) => "substitution",
            ConversionError::Write(_) => "write",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Structured context for callers that report errors as data.
    pub fn details(&self) -> BTreeMap<String, String> {
        let mut details = BTreeMap::new();
        details.insert("kind".to_string(), self.kind().to_string());
        match self {
            ConversionError::Parse(ParseError::Read { path, source }) => {
                details.insert("path".into(), path.clone());
                details.insert("io_error".into(), source.kind().to_string());
            }
            ConversionError::Parse(ParseError::Encoding(e)) => {
                details.insert("valid_up_to".into(), e.utf8_error().valid_up_to().to_string());
            }
            ConversionError::Build(BuildError::InvalidState { operation, state }) => {
                details.insert("operation".into(), operation.to_string());
                details.insert("state".into(), state.to_string());
            }
            ConversionError::Build(BuildError::Unrenderable { kind, reason }) => {
                details.insert("node".into(), kind.to_string());
                details.insert("reason".into(), reason.clone());
            }
            ConversionError::Build(BuildError::Template(e)) | ConversionError::Template(e) => {
                if let Some(part) = e.part() {
                    details.insert("part".into(), part.to_string());
                }
            }
            ConversionError::Substitution(SubstitutionError::Render { line, column, .. }) => {
                if let Some(line) = line {
                    details.insert("line".into(), line.to_string());
                }
                if let Some(column) = column {
                    details.insert("column".into(), column.to_string());
                }
            }
            ConversionError::Write(_) => {}
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_builder::BuildState;

    #[test]
    fn test_build_template_errors_surface_as_template() {
        let missing = TemplateError::MissingPart("word/document.xml".into());
        let err: ConversionError = BuildError::Template(missing).into();
        assert_eq!(err.kind(), "template");
        assert_eq!(err.details().get("part").map(String::as_str), Some("word/document.xml"));
    }

    #[test]
    fn test_state_errors_carry_operation_and_state() {
        let err: ConversionError = BuildError::InvalidState {
            operation: "populate",
            state: BuildState::Finalized,
        }
        .into();
        assert_eq!(err.kind(), "build");
        let details = err.details();
        assert_eq!(details["operation"], "populate");
        assert_eq!(details["state"], "finalized");
        assert!(err.message().contains("populate"));
    }

    #[test]
    fn test_substitution_details_include_position() {
        let err = ConversionError::from(SubstitutionError::Render {
            message: "unclosed block".into(),
            line: Some(3),
            column: Some(1),
        });
        assert_eq!(err.details()["line"], "3");
        assert_eq!(err.kind(), "substitution");
    }
}
