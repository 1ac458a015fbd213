//! Callouts as a shaded two-column table: glyph on the left, content on the right.

use crate::context::RenderContext;
use crate::error::BuildError;
use crate::events::FallbackEvent;
use quire_document::{
    Block, BorderLine, Paragraph, Run, RunProps, Table, TableBorders, TableWidth, TextAlign,
    VerticalAlign,
};
use quire_idf::Node;
use quire_style::AdmonitionColors;
use quire_types::{AdmonitionKind, Length};

const ICON_COLUMN_INCHES: f32 = 0.6;
const CONTENT_COLUMN_INCHES: f32 = 5.9;
const ICON_FONT: &str = "Arial";
const ICON_SIZE: f32 = 18.0;
const BORDER_WIDTH: Length = Length::pt(3.0);
const MIN_ROW_HEIGHT: Length = Length::pt(36.0);

impl RenderContext<'_> {
    pub(crate) fn render_admonition(
        &mut self,
        kind: AdmonitionKind,
        children: &[Node],
    ) -> Result<Table, BuildError> {
        self.enter("admonition")?;
        let config = self.config;
        let colors = match config.admonitions.get(kind) {
            Some(colors) => colors.clone(),
            None => {
                self.record(FallbackEvent::PaletteDefault { kind });
                AdmonitionColors::neutral()
            }
        };

        let mut content = Vec::new();
        for child in children {
            self.render_node(child, &mut content, Length::ZERO)?;
        }
        for block in &mut content {
            if let Block::Paragraph(p) = block {
                for run in p.runs_mut() {
                    run.props.color.get_or_insert(colors.color);
                }
            }
        }
        if content.is_empty() {
            content.push(Block::Paragraph(Paragraph::new()));
        }

        let icon = Paragraph::new().with_align(TextAlign::Center).with_run(Run::new(
            colors.icon.clone(),
            RunProps::default().bold().font(ICON_FONT, ICON_SIZE).color(colors.color),
        ));

        let mut table = Table::new(1, 2);
        table.width = TableWidth::Percent(100);
        table.column_widths = vec![
            Length::inches(ICON_COLUMN_INCHES),
            Length::inches(CONTENT_COLUMN_INCHES),
        ];
        table.borders = Some(TableBorders {
            left: Some(BorderLine::new(colors.color, BORDER_WIDTH)),
            ..Default::default()
        });
        table.rows[0].min_height = Some(MIN_ROW_HEIGHT);
        for (cell, blocks) in table.cells_mut().zip([vec![Block::Paragraph(icon)], content]) {
            cell.blocks = blocks;
            cell.shading = Some(colors.background);
            cell.v_align = Some(VerticalAlign::Center);
        }

        self.leave();
        Ok(table)
    }
}
