pub mod attacks;
pub mod board;
pub mod errors;
pub mod eval;
pub mod magic;
pub mod movegen;
pub mod moves;
pub mod utils;
pub mod zobrist;

pub use board::{Board, Color, GameStage, Piece, PieceKind, START_FEN};
pub use errors::ErrorKind;
pub use eval::Score;
pub use movegen::perft;
pub use moves::Move;

/// Build every lazily initialised table up front. The tables also
/// self-initialise on first use; calling this keeps the first search
/// move from paying the construction cost.
pub fn init() {
    magic::init();
    attacks::init();
    zobrist::init();
}
