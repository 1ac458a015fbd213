//! Reading markdown sources and running the tokenizer.

use crate::builder::AstBuilder;
use crate::error::ParseError;
use pulldown_cmark::{Options, Parser};
use quire_idf::Node;
use std::borrow::Cow;
use std::path::Path;

/// Tokenizer options: tables and strikethrough. Callouts are detected by
/// the builder itself, not by the tokenizer's GFM extension.
pub fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Rewrites `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(source: &str) -> Cow<'_, str> {
    if source.contains('\r') {
        Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(source)
    }
}

pub fn parse_markdown(source: &str) -> Vec<Node> {
    let source = normalize_line_endings(source);
    AstBuilder::new().build(Parser::new_ext(&source, parser_options()))
}

/// Decodes UTF-8 source bytes.
pub fn decode_source(bytes: Vec<u8>) -> Result<String, ParseError> {
    let text = String::from_utf8(bytes)?;
    Ok(normalize_line_endings(&text).into_owned())
}

pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, ParseError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ParseError::Read {
        path: path.display().to_string(),
        source,
    })?;
    decode_source(bytes)
}

pub fn parse_bytes(bytes: Vec<u8>) -> Result<Vec<Node>, ParseError> {
    Ok(parse_markdown(&decode_source(bytes)?))
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Node>, ParseError> {
    Ok(parse_markdown(&read_source(path)?))
}
