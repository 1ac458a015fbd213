use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("Template rendering error{}: {message}", location(.line, .column))]
    Render {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
}

fn location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" at line {}, column {}", line, column),
        (Some(line), None) => format!(" at line {}", line),
        _ => String::new(),
    }
}

impl From<handlebars::RenderError> for SubstitutionError {
    fn from(e: handlebars::RenderError) -> Self {
        SubstitutionError::Render {
            message: e.reason().to_string(),
            line: e.line_no,
            column: e.column_no,
        }
    }
}
