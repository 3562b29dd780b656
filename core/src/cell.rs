use serde::{Deserialize, Serialize};

/// What a cell holds. Fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    Empty(u8),
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty(0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub(crate) const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
            flagged: false,
        }
    }

    pub(crate) const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Whether revealing this cell cascades into its neighbors.
    pub(crate) const fn is_zero(self) -> bool {
        matches!(self.kind, CellKind::Empty(0))
    }

    pub(crate) const fn view(self) -> CellView {
        CellView {
            kind: self.kind,
            revealed: self.revealed,
            flagged: self.flagged,
        }
    }
}

/// Read-only projection of a cell, enough for a renderer to pick a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub kind: CellKind,
    pub revealed: bool,
    pub flagged: bool,
}

impl CellView {
    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Neighboring mine count, `None` for mines.
    pub const fn adjacent_count(self) -> Option<u8> {
        match self.kind {
            CellKind::Mine => None,
            CellKind::Empty(count) => Some(count),
        }
    }
}
