use crate::*;
pub use random::*;

mod random;

/// Strategy for placing exactly `MINES` mines on an empty board.
pub trait MinefieldGenerator {
    fn generate(self) -> MineLayout;
}
