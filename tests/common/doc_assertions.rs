use quire::FallbackEvent;
use quire::document::{Block, Document, Paragraph, Table};

/// Body paragraphs, skipping tables.
pub fn body_paragraphs(doc: &Document) -> Vec<&Paragraph> {
    doc.body.iter().filter_map(Block::as_paragraph).collect()
}

pub fn body_tables(doc: &Document) -> Vec<&Table> {
    doc.body.iter().filter_map(Block::as_table).collect()
}

pub fn paragraph_texts(doc: &Document) -> Vec<String> {
    body_paragraphs(doc).iter().map(|p| p.text()).collect()
}

pub fn first_table(doc: &Document) -> &Table {
    body_tables(doc)
        .into_iter()
        .next()
        .expect("document has no table")
}

pub fn events_of_kind<'a>(events: &'a [FallbackEvent], kind: &str) -> Vec<&'a FallbackEvent> {
    events.iter().filter(|e| e.kind() == kind).collect()
}

/// Asserts some body paragraph's text equals `$text`.
#[macro_export]
macro_rules! assert_paragraph {
    ($doc:expr, $text:expr) => {
        let texts = $crate::common::doc_assertions::paragraph_texts(&$doc);
        assert!(
            texts.iter().any(|t| t == $text),
            "no paragraph with text {:?}; paragraphs were {:#?}",
            $text,
            texts
        );
    };
}

/// Asserts the paragraph with text `$text` uses style `$style`.
#[macro_export]
macro_rules! assert_paragraph_style {
    ($doc:expr, $text:expr, $style:expr) => {
        let paragraphs = $crate::common::doc_assertions::body_paragraphs(&$doc);
        let found = paragraphs.iter().find(|p| p.text() == $text);
        assert!(found.is_some(), "no paragraph with text {:?}", $text);
        assert_eq!(found.unwrap().style.as_deref(), Some($style), "style of {:?}", $text);
    };
}
