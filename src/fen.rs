//! FEN position serialization.
//!
//! The writer emits the draughts FEN body exactly: side letter, then the
//! white and black square lists, comma-separated, with `K` marking kings and
//! 1-based square numbers:
//!
//! ```text
//! W:W31,32,K40:B1,2,K10
//! ```
//!
//! The reader is tolerant. It strips a surrounding `[FEN "…"]` tag, accepts
//! an extra leading field, ignores `G…`/`P…` annotation entries, and accepts
//! the lists in either order of kind within a side. Variants are never
//! auto-detected; the caller picks the variant.

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::{Board, Color, Variant};

impl Board {
    /// The FEN string for the current position.
    #[must_use]
    pub fn fen(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push(self.color_to_move().letter());
        for color in [Color::White, Color::Black] {
            out.push(':');
            out.push(color.letter());
            let mut first = true;
            for sq in 0..self.geo.squares() as u8 {
                let bit = 1u64 << sq;
                let king = self.kings(color) & bit != 0;
                if self.men(color) & bit == 0 && !king {
                    continue;
                }
                if !first {
                    out.push(',');
                }
                first = false;
                if king {
                    out.push('K');
                }
                out.push_str(&(sq + 1).to_string());
            }
        }
        out
    }

    /// Parses a FEN string into a position for the given variant.
    ///
    /// # Errors
    /// [`Error::InvalidNotation`] when the text does not parse, names a
    /// square out of range, stacks two pieces on one square, or puts a man
    /// on its promotion row.
    pub fn from_fen(variant: &'static Variant, fen: &str) -> Result<Self> {
        let text = strip_fen_tag(fen.trim()).to_ascii_uppercase();
        let mut parts: Vec<&str> = text.split(':').collect();
        if parts.len() == 4 {
            // Tolerate a stray leading field, as some exports double the
            // side letter.
            parts.remove(0);
        }
        if parts.len() != 3 {
            return Err(Error::InvalidNotation(format!(
                "expected side:white:black fields in {fen:?}"
            )));
        }
        let turn = match parts[0] {
            "W" => Color::White,
            "B" => Color::Black,
            other => {
                return Err(Error::InvalidNotation(format!(
                    "bad side-to-move field {other:?} in {fen:?}"
                )))
            }
        };

        let mut boards = [[0u64; 2], [0u64; 2]];
        let mut occupied = 0u64;
        for (field, color) in [(parts[1], Color::White), (parts[2], Color::Black)] {
            if !field.starts_with(color.letter()) {
                return Err(Error::InvalidNotation(format!(
                    "expected {} piece list, found {field:?}",
                    color.letter()
                )));
            }
            for entry in field[1..].split(',') {
                if entry.is_empty() || entry.starts_with('G') || entry.starts_with('P') {
                    continue;
                }
                let (king, digits) = match entry.strip_prefix('K') {
                    Some(rest) => (true, rest),
                    None => (false, entry),
                };
                let number: usize = digits.parse().map_err(|_| {
                    Error::InvalidNotation(format!("bad square entry {entry:?} in {fen:?}"))
                })?;
                if number == 0 || number > variant.square_count() {
                    return Err(Error::InvalidNotation(format!(
                        "square {number} out of range for {variant}"
                    )));
                }
                let bit = 1u64 << (number - 1);
                if occupied & bit != 0 {
                    return Err(Error::InvalidNotation(format!(
                        "square {number} is occupied twice in {fen:?}"
                    )));
                }
                occupied |= bit;
                boards[color.index()][usize::from(king)] |= bit;
            }
        }

        let geo = Geometry::of(variant);
        for color in [Color::White, Color::Black] {
            if boards[color.index()][0] & geo.promotion[color.index()] != 0 {
                return Err(Error::InvalidNotation(format!(
                    "{color} man on its promotion row in {fen:?}"
                )));
            }
        }

        debug!("parsed FEN {fen:?} for {variant}");
        Ok(Self::from_bitboards(variant, boards[0], boards[1], turn))
    }
}

fn strip_fen_tag(fen: &str) -> &str {
    let inner = fen
        .strip_prefix("[FEN")
        .map(str::trim_start)
        .unwrap_or(fen)
        .trim_end_matches(']')
        .trim();
    inner.trim_matches('"')
}
