//! The hand-off point to serializers.
//!
//! Producing the final office file is not this crate's concern; a writer
//! receives a finalized [`Document`] and streams whatever format it owns.

use crate::model::{Block, Document, Paragraph};
use std::fmt::Debug;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait DocumentWriter: Send + Sync + Debug {
    fn write(&self, document: &Document, out: &mut dyn Write) -> Result<(), WriteError>;

    /// Returns a human-readable name for this writer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Writes the text of headers, body, and footers, one paragraph per line.
/// Table rows are written as tab-separated cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextWriter;

impl PlainTextWriter {
    fn write_paragraph(p: &Paragraph, out: &mut dyn Write) -> Result<(), WriteError> {
        writeln!(out, "{}", p.text())?;
        Ok(())
    }

    fn write_blocks(blocks: &[Block], out: &mut dyn Write) -> Result<(), WriteError> {
        for block in blocks {
            match block {
                Block::Paragraph(p) => Self::write_paragraph(p, out)?,
                Block::Table(table) => {
                    for row in &table.rows {
                        let cells: Vec<String> = row
                            .slots
                            .iter()
                            .map(|slot| {
                                slot.as_cell()
                                    .map(|c| c.text().replace('\n', " "))
                                    .unwrap_or_default()
                            })
                            .collect();
                        writeln!(out, "{}", cells.join("\t"))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl DocumentWriter for PlainTextWriter {
    fn write(&self, document: &Document, out: &mut dyn Write) -> Result<(), WriteError> {
        for header in &document.headers {
            Self::write_blocks(&header.blocks, out)?;
        }
        Self::write_blocks(&document.body, out)?;
        for footer in &document.footers {
            Self::write_blocks(&footer.blocks, out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "plain-text"
    }
}
