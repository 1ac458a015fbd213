//! Table merge markers: `^^` fuses a cell into the one above, `>>` into the
//! one on its left. A marker must be the whole (trimmed) cell content;
//! `^^ >>` sets both flags.

pub const MERGE_UP: &str = "^^";
pub const MERGE_LEFT: &str = ">>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeMarkers {
    pub up: bool,
    pub left: bool,
}

impl MergeMarkers {
    pub fn any(&self) -> bool {
        self.up || self.left
    }
}

pub fn decode_markers(cell_text: &str) -> MergeMarkers {
    let mut markers = MergeMarkers::default();
    let mut rest = cell_text.trim();
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix(MERGE_UP) {
            markers.up = true;
            rest = tail.trim_start();
        } else if let Some(tail) = rest.strip_prefix(MERGE_LEFT) {
            markers.left = true;
            rest = tail.trim_start();
        } else {
            return MergeMarkers::default();
        }
    }
    markers
}
