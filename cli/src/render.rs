use core::fmt::Write;

use minado_core::{Board, COLS, CellKind, CellView, ROWS};

use crate::coords::{column_labels, row_label};

/// Picks the glyph for one cell. `game_over` uncovers every mine.
pub fn glyph(view: CellView, game_over: bool) -> char {
    match view.kind {
        CellKind::Mine if view.revealed || game_over => '*',
        _ if view.flagged => 'X',
        _ if !view.revealed => '-',
        CellKind::Mine => '*',
        CellKind::Empty(0) => 'O',
        CellKind::Empty(count) => char::from(b'0' + count),
    }
}

/// Draws the board with row letters and 1-based column numbers.
pub fn render(board: &Board, game_over: bool) -> String {
    let mut out = String::from("   ");
    for col in column_labels() {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    let mut cells = board.iter_cells();
    for row in 0..ROWS {
        let _ = write!(out, "{:>3}", row_label(row));
        for (_, view) in cells.by_ref().take(COLS) {
            let _ = write!(out, "{:>3}", glyph(view, game_over));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::{Coord2, MINES, MineLayout};

    const TOP_ROW: [Coord2; MINES] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 5),
        (0, 6),
        (0, 7),
        (0, 8),
        (0, 9),
    ];

    fn view(kind: CellKind, revealed: bool, flagged: bool) -> CellView {
        CellView {
            kind,
            revealed,
            flagged,
        }
    }

    #[test]
    fn glyphs_follow_cell_state() {
        assert_eq!(glyph(view(CellKind::Mine, false, false), false), '-');
        assert_eq!(glyph(view(CellKind::Mine, false, true), false), 'X');
        assert_eq!(glyph(view(CellKind::Mine, false, true), true), '*');
        assert_eq!(glyph(view(CellKind::Mine, true, false), false), '*');
        assert_eq!(glyph(view(CellKind::Empty(3), false, true), true), 'X');
        assert_eq!(glyph(view(CellKind::Empty(0), true, false), false), 'O');
        assert_eq!(glyph(view(CellKind::Empty(3), true, false), false), '3');
    }

    #[test]
    fn render_draws_labelled_grid() {
        let mut board = Board::from_layout(&MineLayout::from_mine_coords(&TOP_ROW).unwrap());
        board.reveal((9, 9)).unwrap();

        let text = render(&board, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[0].trim_start().starts_with("1  2"));
        assert!(lines[0].ends_with("10"));
        assert_eq!(lines[1].split_whitespace().collect::<String>(), "A----------");
        assert_eq!(lines[2].split_whitespace().collect::<String>(), "B2333333332");
        assert_eq!(lines[10].split_whitespace().collect::<String>(), "JOOOOOOOOOO");
    }
}
