use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::*;

/// One game in progress: a board plus whether play has ended.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    board: Board,
    ended: bool,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::from_board(Board::new(seed))
    }

    pub fn random() -> Self {
        Self::from_board(Board::random())
    }

    pub fn from_board(board: Board) -> Self {
        let ended = Self::is_over(&board);
        Self { board, ended }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the game is over. Callers stop accepting moves once set.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    fn is_over(board: &Board) -> bool {
        board.has_revealed_mine() || board.is_cleared()
    }

    /// Reveals a cell, ending the session if a mine went off.
    pub fn reveal(&mut self, coords: Coord2) -> Result<bool> {
        let exploded = self.board.reveal(coords)?;
        if exploded {
            log::info!("Mine hit at {:?}, game over", coords);
            self.ended = true;
        }
        Ok(exploded)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        self.board.toggle_flag(coords)
    }

    /// Checks for a win, ending the session when the board is cleared.
    pub fn check_cleared(&mut self) -> bool {
        let cleared = self.board.is_cleared();
        if cleared && !self.ended {
            log::info!("Board cleared");
            self.ended = true;
        }
        cleared
    }

    /// Writes the board next to `path` first and renames it into place, so a failed save leaves any previous
    /// file intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut staged = NamedTempFile::new_in(dir)?;
        write_board(&self.board, BufWriter::new(staged.as_file_mut()))?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|err| err.error)?;

        log::info!("Saved board to {}", path.display());
        Ok(())
    }

    /// Replaces the board with the one stored at `path`. The current board stays in place unless the whole
    /// file reads and decodes cleanly.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let staged = File::open(path)
            .map_err(GameError::from)
            .and_then(|file| read_board(BufReader::new(file)))
            .inspect_err(|err| log::warn!("Could not load {}: {}", path.display(), err))?;

        self.ended = Self::is_over(&staged);
        self.board = staged;
        log::info!("Loaded board from {}", path.display());
        Ok(())
    }
}
