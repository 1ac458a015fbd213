//! Table grids with row and column spans.
//!
//! A table is a dense `rows × columns` grid of slots. A slot either holds a
//! cell (which may span further slots down and to the right) or is covered by
//! the cell at `origin`. Only cell slots are addressable.

use crate::model::{Block, BorderLine};
use quire_style::TextAlign;
use quire_types::{Color, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TableWidth {
    #[default]
    Auto,
    /// Percentage of the text column.
    Percent(u8),
}

/// Per-edge table borders. `None` means explicitly no border.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TableBorders {
    pub top: Option<BorderLine>,
    pub left: Option<BorderLine>,
    pub bottom: Option<BorderLine>,
    pub right: Option<BorderLine>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub blocks: Vec<Block>,
    pub row_span: usize,
    pub col_span: usize,
    pub shading: Option<Color>,
    pub v_align: Option<VerticalAlign>,
}

impl Cell {
    pub fn empty() -> Self {
        Self {
            row_span: 1,
            col_span: 1,
            ..Default::default()
        }
    }

    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridSlot {
    Cell(Cell),
    /// Covered by the spanning cell at `(row, column)`.
    Merged { origin: (usize, usize) },
}

impl GridSlot {
    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            GridSlot::Cell(cell) => Some(cell),
            GridSlot::Merged { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub slots: Vec<GridSlot>,
    pub min_height: Option<Length>,
    /// Repeats as a header row.
    pub header: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub style: Option<String>,
    pub align: Option<TextAlign>,
    pub width: TableWidth,
    pub column_widths: Vec<Length>,
    /// `None` leaves borders to the table style.
    pub borders: Option<TableBorders>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// A grid of empty, unspanned cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| TableRow {
                    slots: (0..columns).map(|_| GridSlot::Cell(Cell::empty())).collect(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.slots.len()).unwrap_or(0)
    }

    pub fn slot(&self, row: usize, column: usize) -> Option<&GridSlot> {
        self.rows.get(row)?.slots.get(column)
    }

    pub fn slot_mut(&mut self, row: usize, column: usize) -> Option<&mut GridSlot> {
        self.rows.get_mut(row)?.slots.get_mut(column)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.slot(row, column)?.as_cell()
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        match self.slot_mut(row, column)? {
            GridSlot::Cell(cell) => Some(cell),
            GridSlot::Merged { .. } => None,
        }
    }

    /// Position of the cell covering `(row, column)`.
    pub fn owner_of(&self, row: usize, column: usize) -> Option<(usize, usize)> {
        match self.slot(row, column)? {
            GridSlot::Cell(_) => Some((row, column)),
            GridSlot::Merged { origin } => Some(*origin),
        }
    }

    /// Number of slots that hold a cell rather than being covered by one.
    pub fn addressable_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.slots.iter())
            .filter(|slot| matches!(slot, GridSlot::Cell(_)))
            .count()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .flat_map(|r| r.slots.iter())
            .filter_map(GridSlot::as_cell)
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows
            .iter_mut()
            .flat_map(|r| r.slots.iter_mut())
            .filter_map(|slot| match slot {
                GridSlot::Cell(cell) => Some(cell),
                GridSlot::Merged { .. } => None,
            })
    }
}
