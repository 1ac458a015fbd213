use thiserror::Error;

/// Markdown parsing never fails on malformed markup; only reading the
/// source can fail.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read markdown source '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Markdown source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
