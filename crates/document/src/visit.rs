//! Paragraph traversal over every text-bearing part of a document.

use crate::model::{Block, Document, Paragraph};

fn visit_blocks<'a>(blocks: &'a [Block], f: &mut impl FnMut(&'a Paragraph)) {
    for block in blocks {
        match block {
            Block::Paragraph(p) => f(p),
            Block::Table(table) => {
                for cell in table.cells() {
                    visit_blocks(&cell.blocks, f);
                }
            }
        }
    }
}

fn visit_blocks_mut(blocks: &mut [Block], f: &mut impl FnMut(&mut Paragraph)) {
    for block in blocks {
        match block {
            Block::Paragraph(p) => f(p),
            Block::Table(table) => {
                for cell in table.cells_mut() {
                    visit_blocks_mut(&mut cell.blocks, f);
                }
            }
        }
    }
}

impl Document {
    /// Body first (tables recursively), then headers, then footers.
    pub fn for_each_paragraph<'a>(&'a self, mut f: impl FnMut(&'a Paragraph)) {
        visit_blocks(&self.body, &mut f);
        for part in self.headers.iter().chain(self.footers.iter()) {
            visit_blocks(&part.blocks, &mut f);
        }
    }

    pub fn for_each_paragraph_mut(&mut self, mut f: impl FnMut(&mut Paragraph)) {
        visit_blocks_mut(&mut self.body, &mut f);
        for part in self.headers.iter_mut().chain(self.footers.iter_mut()) {
            visit_blocks_mut(&mut part.blocks, &mut f);
        }
    }

    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        let mut out = Vec::new();
        self.for_each_paragraph(|p| out.push(p));
        out
    }
}
