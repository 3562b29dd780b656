use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// Mine positions of a board, before adjacency counts are derived.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: usize,
}

impl MineLayout {
    pub(crate) fn empty() -> Self {
        Self {
            mine_mask: Array2::default((ROWS, COLS)),
            mine_count: 0,
        }
    }

    /// Builds a layout from explicit mine coordinates; duplicates collapse, so exactly `MINES` distinct
    /// coordinates are required.
    pub fn from_mine_coords(mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty();

        for &coords in mine_coords {
            let pos = validate_coords(coords)?;
            layout.place(pos);
        }

        if layout.mine_count != MINES {
            return Err(GameError::InvalidMineCount);
        }
        Ok(layout)
    }

    /// Marks `pos` as a mine, returning whether it was newly placed.
    pub(crate) fn place(&mut self, pos: Pos) -> bool {
        if self[pos] {
            return false;
        }
        self[pos] = true;
        self.mine_count += 1;
        true
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Pos) -> bool {
        self[pos]
    }

    pub fn adjacent_mine_count(&self, pos: Pos) -> u8 {
        let count = NeighborIter::new(pos).filter(|&neighbor| self[neighbor]).count();
        // at most 8 neighbors
        count as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Pos> + '_ {
        iter_positions().filter(|&pos| self[pos])
    }
}

impl Index<Pos> for MineLayout {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mine_mask[pos.to_nd_index()]
    }
}

impl IndexMut<Pos> for MineLayout {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.mine_mask[pos.to_nd_index()]
    }
}
