//! Lists as indented paragraphs with literal markers.

use crate::context::RenderContext;
use crate::error::BuildError;
use quire_document::{Block, Paragraph, Run, TextAlign};
use quire_idf::{ListNode, Node};
use quire_style::StyleCategory;
use quire_types::Length;

const INDENT_STEP_INCHES: f32 = 0.35;
const SPACE_AFTER: Length = Length::pt(3.0);
const BULLETS: [&str; 3] = ["•", "◦", "▪"];

pub(crate) fn marker_text(ordered: bool, number: u64, level: usize) -> String {
    if ordered {
        format!("{}. ", number)
    } else {
        format!("{} ", BULLETS[level % BULLETS.len()])
    }
}

impl RenderContext<'_> {
    /// `base` is the indent of the block the list sits in; each level steps
    /// one increment further in.
    pub(crate) fn render_list(
        &mut self,
        list: &ListNode,
        level: usize,
        out: &mut Vec<Block>,
        base: Length,
    ) -> Result<(), BuildError> {
        self.enter("list")?;
        let category = if list.ordered {
            StyleCategory::ListNumber
        } else {
            StyleCategory::ListBullet
        };
        let style = self.style(category);
        let indent = base + Length::inches(INDENT_STEP_INCHES) * (level as f32 + 1.0);

        for (i, item) in list.items.iter().enumerate() {
            let mut p = Paragraph::styled(style.clone())
                .with_align(TextAlign::Left)
                .with_indent(indent)
                .with_space_after(SPACE_AFTER)
                .with_run(Run::plain(marker_text(list.ordered, list.start + i as u64, level)));
            p.inlines.extend(self.inlines(&item.spans));
            out.push(Block::Paragraph(p));

            for child in &item.children {
                match child {
                    Node::List(nested) => self.render_list(nested, level + 1, out, base)?,
                    other => self.render_node(other, out, indent)?,
                }
            }
        }
        self.leave();
        Ok(())
    }
}
