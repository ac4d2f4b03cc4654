//! # Dammen: a bitboard draughts engine
//!
//! A high-performance Rust implementation of draughts (checkers) covering
//! four rule sets (international Standard 10×10, American 8×8, Frisian
//! 10×10 and Russian 8×8) with bitboard move generation, make/unmake
//! with incremental Zobrist hashing, FEN/PDN serialization and an alpha-beta
//! search engine.
//!
//! ## Overview
//!
//! All rule differences live in static [`Variant`] records: board size,
//! flying kings, backward man captures, the maximum-capture rule, Frisian
//! orthogonal captures and capture-value weighting, promotion timing inside
//! capture chains, and the per-variant draw rules. Captures are mandatory in
//! every supported variant: whenever a capture exists, only captures are
//! legal.
//!
//! ## Quick start
//!
//! ```rust
//! use dammen::{Board, Color, Engine, EngineConfig, STANDARD};
//!
//! // The standard 10×10 starting position; white moves first.
//! let mut board = Board::new(&STANDARD);
//! assert_eq!(board.color_to_move(), Color::White);
//! assert_eq!(board.legal_moves().len(), 9);
//!
//! // Play by notation or by generated move.
//! board.push_from_notation("32-28").unwrap();
//! let reply = board.legal_moves()[0];
//! board.push(&reply).unwrap();
//!
//! // Ask the engine for the best continuation.
//! let mut engine = Engine::new(EngineConfig { depth_limit: 4, ..Default::default() });
//! if let Some(best) = engine.get_best_move(&mut board) {
//!     board.push(&best).unwrap();
//! }
//!
//! // Perfect undo, including the position hash.
//! board.pop().unwrap();
//! ```
//!
//! ## Board representation
//!
//! A board of side N has N²/2 playable (dark) squares, numbered 0…S−1 from
//! the top-left dark square; textual notation is 1-based. The position is
//! four disjoint `u64` bitboards (white men, white kings, black men, black
//! kings) plus the side to move, the halfmove clock, a repetition window
//! and the incrementally maintained 64-bit Zobrist key.
//!
//! ```text
//!    . b . b . b . b      b on squares 1..12
//!    b . b . b . b .
//!    . b . b . b . b
//!    . . . . . . . .
//!    . . . . . . . .
//!    w . w . w . w .      w on squares 21..32
//!    . w . w . w . w
//!    w . w . w . w .
//! ```
//!
//! ## Move notation
//!
//! | Move type | Format | Example |
//! |-----------|--------|---------|
//! | Quiet move | `from-to` | `32-28` |
//! | Single capture | `fromxto` | `28x19` |
//! | Multi-capture | `fromxmidx…xto` | `23x13x6` |
//! | Algebraic | `from-to` | `c3-d4` |
//!
//! Writers always emit the full visited path so games round-trip; the reader
//! also accepts the dialect that interleaves captured squares, and fails
//! with [`Error::AmbiguousNotation`] when a ply matches more than one legal
//! move.
//!
//! ## Key types
//!
//! - [`Board`]: position, move generation, make/unmake, FEN/PDN, draw rules
//! - [`Move`]: visited path, captured squares, promotion flag
//! - [`Variant`]: rule record ([`STANDARD`], [`AMERICAN`], [`FRISIAN`],
//!   [`RUSSIAN`])
//! - [`Engine`]: iterative-deepening alpha-beta search with a transposition
//!   table
//! - [`Geometry`]: shared step/ray/between tables for one board size
//!
//! ## Concurrency
//!
//! Boards and engines are single-owner: a position or engine instance must
//! not be shared between concurrent mutators. Geometry, evaluation and
//! Zobrist tables are process-wide immutable state initialized once.
//! [`Board::perft_parallel`] parallelizes internally with one board clone
//! per worker.

mod board;
mod color;
mod error;
mod eval;
mod fen;
mod geometry;
mod movegen;
mod moves;
mod pdn;
mod perft;
mod piece;
mod search;
mod tt;
mod variant;
mod zobrist;

pub use board::Board;
pub use color::Color;
pub use error::{Error, Result};
pub use eval::{evaluate, KING_VALUE, MAN_VALUE};
pub use geometry::Geometry;
pub use moves::Move;
pub use piece::Piece;
pub use search::{Engine, EngineConfig, SearchReport};
pub use variant::{
    EndgameDrawRule, MidChainPromotion, Variant, VariantId, AMERICAN, FRISIAN, RUSSIAN, STANDARD,
};
