//! Engine for a fixed 10x10 minesweeper board with 10 mines: generation, reveal with flood fill, flagging,
//! win detection and a binary save format.

pub use board::*;
pub use cell::CellKind;
pub use cell::CellView;
pub use codec::{FORMAT_VERSION, MAGIC, RECORD_LEN, decode, encode, read_board, write_board};
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use session::*;
pub use types::*;

pub(crate) use cell::Cell;

mod board;
mod cell;
mod codec;
mod error;
mod generator;
mod layout;
mod session;
mod types;
