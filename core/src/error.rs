use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Cell already revealed")]
    AlreadyRevealed,
    #[error("Mine layout must contain exactly the configured number of mines")]
    InvalidMineCount,
    #[error("Corrupt save data: {0}")]
    CorruptData(CorruptKind),
    #[error("Storage failure: {0}")]
    IoFailure(std::io::ErrorKind),
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::IoFailure(err.kind())
    }
}

/// Why a persisted record was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CorruptKind {
    #[error("expected {expected} bytes, found {found}")]
    Length { expected: usize, found: usize },
    #[error("bad magic header")]
    Magic,
    #[error("unsupported format version {0}")]
    Version(u8),
    #[error("reserved bits set in cell {0}")]
    ReservedBits(usize),
    #[error("adjacent count out of range in cell {0}")]
    AdjacentRange(usize),
    #[error("mine cell {0} carries an adjacent count")]
    MineWithCount(usize),
    #[error("expected {expected} mines, found {found}")]
    MineCount { expected: usize, found: usize },
    #[error("adjacent count of cell {0} disagrees with its neighborhood")]
    AdjacentMismatch(usize),
}

pub type Result<T> = core::result::Result<T, GameError>;
