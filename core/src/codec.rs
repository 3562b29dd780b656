//! Fixed-size binary record for a board.
//!
//! Layout: the magic bytes `MNDO`, one version byte, then one byte per cell in row-major order.
//!
//! ```text
//! bit  0   mine
//! bit  1   revealed
//! bit  2   flagged
//! bit  3   reserved, always 0
//! bits 4-7 adjacent mine count, 0 for mines
//! ```

use std::io::{Read, Write};

use crate::*;

pub const MAGIC: [u8; 4] = *b"MNDO";
pub const FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 1;
pub const RECORD_LEN: usize = HEADER_LEN + CELLS;

const MINE_BIT: u8 = 1 << 0;
const REVEALED_BIT: u8 = 1 << 1;
const FLAGGED_BIT: u8 = 1 << 2;
const RESERVED_BIT: u8 = 1 << 3;
const COUNT_SHIFT: u32 = 4;

fn encode_cell(cell: Cell) -> u8 {
    let mut byte = match cell.kind {
        CellKind::Mine => MINE_BIT,
        CellKind::Empty(count) => count << COUNT_SHIFT,
    };
    if cell.revealed {
        byte |= REVEALED_BIT;
    }
    if cell.flagged {
        byte |= FLAGGED_BIT;
    }
    byte
}

fn decode_cell(index: usize, byte: u8) -> Result<Cell> {
    let corrupt = |kind| Err(GameError::CorruptData(kind));

    if byte & RESERVED_BIT != 0 {
        return corrupt(CorruptKind::ReservedBits(index));
    }

    let count = byte >> COUNT_SHIFT;
    let kind = if byte & MINE_BIT != 0 {
        if count != 0 {
            return corrupt(CorruptKind::MineWithCount(index));
        }
        CellKind::Mine
    } else {
        if count > 8 {
            return corrupt(CorruptKind::AdjacentRange(index));
        }
        CellKind::Empty(count)
    };

    Ok(Cell {
        kind,
        revealed: byte & REVEALED_BIT != 0,
        flagged: byte & FLAGGED_BIT != 0,
    })
}

/// Serializes the full board state. Identical states always produce identical bytes.
pub fn encode(board: &Board) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(RECORD_LEN);
    bytes.extend_from_slice(&MAGIC);
    bytes.push(FORMAT_VERSION);
    bytes.extend(iter_positions().map(|pos| encode_cell(board.cell(pos))));
    bytes
}

/// Rebuilds a board from a record produced by [`encode`].
///
/// The record must also describe a board that generation could have produced: exactly `MINES` mines and
/// adjacency counts that agree with them.
pub fn decode(bytes: &[u8]) -> Result<Board> {
    let corrupt = |kind| Err(GameError::CorruptData(kind));

    if bytes.len() != RECORD_LEN {
        return corrupt(CorruptKind::Length {
            expected: RECORD_LEN,
            found: bytes.len(),
        });
    }

    let (header, body) = bytes.split_at(HEADER_LEN);
    if header[..MAGIC.len()] != MAGIC {
        return corrupt(CorruptKind::Magic);
    }
    let version = header[MAGIC.len()];
    if version != FORMAT_VERSION {
        return corrupt(CorruptKind::Version(version));
    }

    let cells = body
        .iter()
        .enumerate()
        .map(|(index, &byte)| decode_cell(index, byte))
        .collect::<Result<Vec<_>>>()?;

    let mut layout = MineLayout::empty();
    for (index, cell) in cells.iter().enumerate() {
        if cell.is_mine() {
            layout.place(from_flat_index(index));
        }
    }
    if layout.mine_count() != MINES {
        return corrupt(CorruptKind::MineCount {
            expected: MINES,
            found: layout.mine_count(),
        });
    }

    for (index, cell) in cells.iter().enumerate() {
        if let CellKind::Empty(count) = cell.kind {
            if count != layout.adjacent_mine_count(from_flat_index(index)) {
                return corrupt(CorruptKind::AdjacentMismatch(index));
            }
        }
    }

    Ok(Board::from_cells(cells))
}

pub fn write_board(board: &Board, mut writer: impl Write) -> Result<()> {
    writer.write_all(&encode(board))?;
    writer.flush()?;
    Ok(())
}

/// Reads one record to the end of `reader` and decodes it. At most one byte past a full record is read, so
/// oversized input is rejected without buffering all of it.
pub fn read_board(reader: impl Read) -> Result<Board> {
    let mut bytes = Vec::with_capacity(RECORD_LEN + 1);
    reader.take(RECORD_LEN as u64 + 1).read_to_end(&mut bytes)?;
    decode(&bytes)
}
