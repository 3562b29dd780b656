use crate::*;

/// Single coordinate axis as supplied by the controller, signed so out-of-range input stays representable.
pub type Coord = i32;

/// Controller-facing coordinates `(row, col)`, both 0-based.
pub type Coord2 = (Coord, Coord);

/// Validated in-bounds position `(row, col)`.
pub type Pos = (usize, usize);

pub const ROWS: usize = 10;
pub const COLS: usize = 10;
pub const MINES: usize = 10;
pub const CELLS: usize = ROWS * COLS;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Pos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

/// Checks `coords` against the fixed board bounds.
pub fn validate_coords((row, col): Coord2) -> Result<Pos> {
    let row = usize::try_from(row).map_err(|_| GameError::OutOfBounds)?;
    let col = usize::try_from(col).map_err(|_| GameError::OutOfBounds)?;
    if row < ROWS && col < COLS {
        Ok((row, col))
    } else {
        Err(GameError::OutOfBounds)
    }
}

/// Row-major flat index of `pos`, the order used by the persisted record.
pub const fn flat_index((row, col): Pos) -> usize {
    row * COLS + col
}

pub const fn from_flat_index(index: usize) -> Pos {
    (index / COLS, index % COLS)
}

/// Iterates every board position in row-major order.
pub fn iter_positions() -> impl Iterator<Item = Pos> {
    (0..CELLS).map(from_flat_index)
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta(pos: Pos, delta: (isize, isize)) -> Option<Pos> {
    let (row, col) = pos;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= ROWS {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= COLS {
        return None;
    }

    Some((next_row, next_col))
}

/// Moore neighborhood of a position, clipped to the board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Pos,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Pos) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
