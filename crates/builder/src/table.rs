//! Markdown tables with `^^`/`>>` cell merges.
//!
//! Pass one lays out the grid: a `^^` cell grows the cell above it (following
//! an already merged slot back to its origin) by one row, a `>>` cell grows
//! the cell to its left by one column. `^^` is tried before `>>`. A marker
//! with nothing to merge into stays an ordinary empty cell. Pass two fills
//! and colours every cell that survived.

use crate::context::RenderContext;
use crate::error::BuildError;
use crate::events::FallbackEvent;
use log::debug;
use quire_document::{Block, Cell, GridSlot, Paragraph, Table, TextAlign, VerticalAlign};
use quire_idf::{TableCell, TableNode};
use quire_style::StyleCategory;
use quire_types::Color;

fn source_cell(node: &TableNode, row: usize, column: usize) -> Option<&TableCell> {
    node.rows.get(row)?.cells.get(column)
}

fn marker_label(cell: &TableCell) -> &'static str {
    match (cell.merge_up, cell.merge_left) {
        (true, true) => "^^ >>",
        (true, false) => "^^",
        _ => ">>",
    }
}

/// Grows the cell above `(row, column)` down over this row. The cell above
/// may span several columns; every slot it would cover in this row must
/// itself be a `^^` marker.
fn try_merge_up(table: &mut Table, node: &TableNode, row: usize, column: usize) -> bool {
    if row == 0 {
        return false;
    }
    let Some((origin_row, origin_col)) = table.owner_of(row - 1, column) else {
        return false;
    };
    let Some(col_span) = table.cell(origin_row, origin_col).map(|c| c.col_span) else {
        return false;
    };
    let covered = origin_col..origin_col + col_span;
    if covered.clone().any(|c| !source_cell(node, row, c).is_some_and(|cell| cell.merge_up)) {
        return false;
    }
    if let Some(origin) = table.cell_mut(origin_row, origin_col) {
        origin.row_span = row - origin_row + 1;
    }
    for c in covered {
        if let Some(slot) = table.slot_mut(row, c) {
            *slot = GridSlot::Merged {
                origin: (origin_row, origin_col),
            };
        }
    }
    true
}

/// Grows the cell to the left of `(row, column)` across this column. Only a
/// cell that starts in this row can grow sideways.
fn try_merge_left(table: &mut Table, row: usize, column: usize) -> bool {
    if column == 0 {
        return false;
    }
    let Some((origin_row, origin_col)) = table.owner_of(row, column - 1) else {
        return false;
    };
    if origin_row != row {
        return false;
    }
    if let Some(origin) = table.cell_mut(origin_row, origin_col) {
        origin.col_span = column - origin_col + 1;
    }
    if let Some(slot) = table.slot_mut(row, column) {
        *slot = GridSlot::Merged {
            origin: (origin_row, origin_col),
        };
    }
    true
}

impl RenderContext<'_> {
    pub(crate) fn render_table(&mut self, node: &TableNode) -> Result<Table, BuildError> {
        let rows = node.rows.len();
        let columns = node.column_count();
        let mut table = Table::new(rows, columns);
        table.style = Some(self.style(StyleCategory::Table));
        table.align = Some(TextAlign::Center);
        if rows == 0 {
            return Ok(table);
        }

        for row in 0..rows {
            for column in 0..columns {
                if matches!(table.slot(row, column), Some(GridSlot::Merged { .. })) {
                    continue;
                }
                let Some(cell) = source_cell(node, row, column) else {
                    continue;
                };
                if !cell.is_merge_marker() {
                    continue;
                }
                let merged = (cell.merge_up && try_merge_up(&mut table, node, row, column))
                    || (cell.merge_left && try_merge_left(&mut table, row, column));
                if !merged {
                    self.record(FallbackEvent::MergeIgnored {
                        row,
                        column,
                        marker: marker_label(cell),
                    });
                }
            }
        }

        let config = self.config;
        let theme = &config.table_theme;
        for (row, table_row) in table.rows.iter_mut().enumerate() {
            let is_header = row == 0 && node.has_header;
            table_row.header = is_header;
            let banded = !is_header && theme.alternating_rows && row % 2 == 0;

            for (column, slot) in table_row.slots.iter_mut().enumerate() {
                let GridSlot::Cell(cell) = slot else { continue };
                let spans = source_cell(node, row, column)
                    .filter(|c| !c.is_merge_marker())
                    .map(|c| c.spans.as_slice())
                    .unwrap_or_default();

                let mut p = Paragraph::new();
                p.inlines = self.inlines(spans);
                if is_header {
                    p.align = Some(TextAlign::Center);
                    for run in p.runs_mut() {
                        run.props.bold = true;
                        run.props.color = Some(theme.header_text);
                    }
                }
                let shading = if is_header {
                    Some(theme.header_background)
                } else if banded {
                    Some(theme.alternating_background)
                } else {
                    None
                };
                fill_cell(cell, p, shading);
            }
        }

        debug!(
            "Table {}x{} rendered with {} addressable cells.",
            rows,
            columns,
            table.addressable_cells()
        );
        Ok(table)
    }
}

fn fill_cell(cell: &mut Cell, paragraph: Paragraph, shading: Option<Color>) {
    cell.blocks = vec![Block::Paragraph(paragraph)];
    cell.shading = shading;
    cell.v_align = Some(VerticalAlign::Center);
}
