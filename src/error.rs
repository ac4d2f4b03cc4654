//! Error types raised by the board and notation layers.

use thiserror::Error;

/// Errors surfaced by the public board API.
///
/// A failed operation never leaves the board partially mutated: a rejected
/// push changes nothing, a rejected parse produces no board.
#[derive(Debug, Error)]
pub enum Error {
    /// A move was pushed that is not among the legal moves of the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// FEN or PDN text that does not parse.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    /// A notation ply that matches more than one legal move.
    #[error("ambiguous notation: {0}")]
    AmbiguousNotation(String),

    /// `pop` was called with no move on the stack.
    #[error("no moves to undo")]
    EmptyStack,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
