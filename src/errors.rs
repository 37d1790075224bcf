//! Error kinds surfaced by the parsing entry points.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Malformed or illegal FEN string. The board is left in the empty
    /// state after a failed load.
    #[error("invalid FEN: {0}")]
    ParseFen(String),
    /// Move string that does not parse or does not match a legal move in
    /// the current position. The board is unchanged.
    #[error("invalid move: {0}")]
    ParseMove(String),
}
