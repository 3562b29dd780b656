use minado_core::{COLS, Coord, Coord2, ROWS};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordsError {
    #[error("coordinate is too short, expected a letter and a number such as A5")]
    TooShort,
    #[error("row must be a letter")]
    InvalidRow,
    #[error("column must be a number")]
    InvalidColumn,
}

/// Parses `A5`-style input into 0-based `(row, col)`.
///
/// Only the shape is checked here; a well-formed but out-of-range coordinate such as `K1` or `A11` is passed
/// through for the board to reject.
pub fn parse_coords(input: &str) -> Result<Coord2, ParseCoordsError> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = chars.next().ok_or(ParseCoordsError::TooShort)?;
    let number = chars.as_str().trim();
    if number.is_empty() {
        return Err(ParseCoordsError::TooShort);
    }

    if !letter.is_ascii_alphabetic() {
        return Err(ParseCoordsError::InvalidRow);
    }
    let row = Coord::from(letter.to_ascii_uppercase() as u8 - b'A');

    let col: Coord = number
        .parse()
        .map_err(|_| ParseCoordsError::InvalidColumn)?;

    let col = col.checked_sub(1).ok_or(ParseCoordsError::InvalidColumn)?;

    Ok((row, col))
}

pub fn row_label(row: usize) -> char {
    debug_assert!(row < ROWS);
    char::from(b'A' + row as u8)
}

pub fn column_labels() -> impl Iterator<Item = usize> {
    1..=COLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_and_one_based_column() {
        assert_eq!(parse_coords("A5"), Ok((0, 4)));
        assert_eq!(parse_coords("j10"), Ok((9, 9)));
        assert_eq!(parse_coords("  c 3 "), Ok((2, 2)));
    }

    #[test]
    fn passes_out_of_range_values_through() {
        assert_eq!(parse_coords("K1"), Ok((10, 0)));
        assert_eq!(parse_coords("A11"), Ok((0, 10)));
        assert_eq!(parse_coords("A0"), Ok((0, -1)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_coords(""), Err(ParseCoordsError::TooShort));
        assert_eq!(parse_coords("A"), Err(ParseCoordsError::TooShort));
        assert_eq!(parse_coords("55"), Err(ParseCoordsError::InvalidRow));
        assert_eq!(parse_coords("Ax"), Err(ParseCoordsError::InvalidColumn));
    }

    #[test]
    fn rejects_columns_outside_the_integer_range() {
        assert_eq!(
            parse_coords("A-2147483648"),
            Err(ParseCoordsError::InvalidColumn)
        );
        assert_eq!(
            parse_coords("A99999999999"),
            Err(ParseCoordsError::InvalidColumn)
        );
        assert_eq!(parse_coords("A-5"), Ok((0, -6)));
    }

    #[test]
    fn labels_cover_the_board() {
        assert_eq!(row_label(0), 'A');
        assert_eq!(row_label(9), 'J');
        assert_eq!(column_labels().count(), COLS);
    }
}
