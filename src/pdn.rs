//! PDN game serialization and single-ply notation.
//!
//! The writer emits a `GameType`/`Variant`/`Result` header block followed by
//! the numbered move list, rendering every ply with its full visited path
//! (`a-b` or `axbx…xk`) so games round-trip without ambiguity.
//!
//! The reader is tolerant: it skips tag pairs and comments, accepts plies in
//! either capture dialect (landing squares only, or with captured squares
//! interleaved) as well as algebraic square names on any board, and rebuilds
//! each ply by matching it against the generated legal moves. A ply matching
//! more than one legal move fails loudly with
//! [`Error::AmbiguousNotation`].

use std::sync::OnceLock;

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::{Board, Variant};

impl Board {
    /// The PDN text for the game played so far.
    #[must_use]
    pub fn pdn(&self) -> String {
        let result = self.result();
        let mut out = format!(
            "[GameType \"{}\"]\n[Variant \"{}\"]\n[Result \"{}\"]\n",
            self.variant().game_type,
            self.variant().name,
            result,
        );
        for (index, mv) in self.move_stack().iter().enumerate() {
            if index % 2 == 0 {
                if index > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{}. {}", index / 2 + 1, mv));
            } else {
                out.push_str(&format!(" {mv}"));
            }
        }
        if result != "-" {
            out.push(' ');
            out.push_str(result);
        }
        out
    }

    /// Replays a PDN move list from the variant's starting position.
    ///
    /// # Errors
    /// [`Error::InvalidNotation`] for text that does not parse,
    /// [`Error::IllegalMove`] for a ply with no legal interpretation, and
    /// [`Error::AmbiguousNotation`] for a ply matching several legal moves.
    pub fn from_pdn(variant: &'static Variant, pdn: &str) -> Result<Self> {
        let mut board = Self::new(variant);
        for token in ply_tokens(pdn) {
            board.push_from_notation(token)?;
        }
        debug!("replayed {} plies from PDN", board.move_count());
        Ok(board)
    }

    /// Parses one ply (`"31-27"`, `"26x17"`, `"23x13x6"`, or algebraic
    /// `"c3-d4"`) and pushes the unique matching legal move.
    ///
    /// # Errors
    /// [`Error::InvalidNotation`] if the text does not parse,
    /// [`Error::IllegalMove`] if no legal move matches, and
    /// [`Error::AmbiguousNotation`] if more than one does.
    pub fn push_from_notation(&mut self, ply: &str) -> Result<()> {
        let (squares, capture) = parse_ply(self.geo, ply)?;
        let legal = self.legal_moves();
        let mut matched = legal
            .iter()
            .filter(|m| m.matches_squares(&squares, capture));
        let Some(first) = matched.next() else {
            return Err(Error::IllegalMove(ply.to_string()));
        };
        if matched.next().is_some() {
            return Err(Error::AmbiguousNotation(ply.to_string()));
        }
        let mv = *first;
        self.push_unchecked(&mv);
        Ok(())
    }
}

/// Splits a ply into its 1-based squares and resolves them to indices.
fn parse_ply(geo: &'static Geometry, ply: &str) -> Result<(Vec<u8>, bool)> {
    let text = ply.trim().to_ascii_lowercase();
    let capture = text.contains('x');
    let separator = if capture { 'x' } else { '-' };
    if !capture && !text.contains('-') {
        return Err(Error::InvalidNotation(format!("no move separator in {ply:?}")));
    }
    let mut squares = Vec::new();
    for token in text.split(separator) {
        if token.is_empty() {
            return Err(Error::InvalidNotation(format!("empty square in {ply:?}")));
        }
        let sq = if token.chars().all(|c| c.is_ascii_digit()) {
            let number: usize = token
                .parse()
                .map_err(|_| Error::InvalidNotation(format!("bad square in {ply:?}")))?;
            if number == 0 || number > geo.squares() {
                return Err(Error::InvalidNotation(format!(
                    "square {number} out of range in {ply:?}"
                )));
            }
            (number - 1) as u8
        } else {
            *name_map(geo).get(token).ok_or_else(|| {
                Error::InvalidNotation(format!("unknown square {token:?} in {ply:?}"))
            })?
        };
        squares.push(sq);
    }
    if squares.len() < 2 {
        return Err(Error::InvalidNotation(format!("too few squares in {ply:?}")));
    }
    Ok((squares, capture))
}

/// Algebraic-name lookup, built once per board size.
fn name_map(geo: &'static Geometry) -> &'static FxHashMap<String, u8> {
    static MAP_8: OnceLock<FxHashMap<String, u8>> = OnceLock::new();
    static MAP_10: OnceLock<FxHashMap<String, u8>> = OnceLock::new();
    let cell = if geo.side() == 8 { &MAP_8 } else { &MAP_10 };
    cell.get_or_init(|| {
        (0..geo.squares() as u8)
            .map(|sq| (geo.square_name(sq).to_string(), sq))
            .collect()
    })
}

/// Iterates the move plies of a PDN text, skipping tag pairs, comments, move
/// numbers and results.
fn ply_tokens(pdn: &str) -> impl Iterator<Item = &str> {
    const RESULTS: [&str; 8] = ["1-0", "0-1", "1/2-1/2", "2-0", "0-2", "1-1", "*", "-"];
    pdn.lines()
        .filter(|line| !line.trim_start().starts_with('['))
        .flat_map(str::split_whitespace)
        .filter(|token| {
            !token.ends_with('.')
                && !token.starts_with('{')
                && !token.ends_with('}')
                && !RESULTS.contains(token)
        })
}
