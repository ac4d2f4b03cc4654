//! Static evaluation: material, piece-square tables, tempo.
//!
//! Scores are side-to-move-relative: positive means the side to move stands
//! better. Material counts a man as 100 and a king as 300; the piece-square
//! tables stay within ±30 and reward men for advancing toward their
//! promotion row and kings for holding the center; the mover gets a small
//! tempo bonus.

use std::sync::OnceLock;

use crate::geometry::Geometry;
use crate::{Board, Color};

/// Material value of a man.
pub const MAN_VALUE: i32 = 100;
/// Material value of a king.
pub const KING_VALUE: i32 = 300;

const TEMPO: i32 = 5;
const MAN_PSQ_SPAN: i32 = 25;
const MAN_CENTER_SPAN: i32 = 5;
const KING_PSQ_SPAN: i32 = 30;

struct PsqTables {
    man: [Vec<i32>; 2],
    king: Vec<i32>,
}

fn tables(geo: &'static Geometry) -> &'static PsqTables {
    static TABLES_8: OnceLock<PsqTables> = OnceLock::new();
    static TABLES_10: OnceLock<PsqTables> = OnceLock::new();
    let cell = if geo.side() == 8 { &TABLES_8 } else { &TABLES_10 };
    cell.get_or_init(|| build(geo))
}

fn build(geo: &'static Geometry) -> PsqTables {
    let n = geo.side() as i32;
    let squares = geo.squares();
    let mut man = [vec![0; squares], vec![0; squares]];
    let mut king = vec![0; squares];
    for sq in 0..squares as u8 {
        let row = geo.row(sq) as i32;
        let col = geo.grid_col(sq) as i32;
        // Centered files get a small extra nudge.
        let center = (n - 1 - (2 * col - (n - 1)).abs()) * MAN_CENTER_SPAN / (n - 1);
        man[Color::White.index()][sq as usize] =
            (n - 1 - row) * MAN_PSQ_SPAN / (n - 1) + center;
        man[Color::Black.index()][sq as usize] = row * MAN_PSQ_SPAN / (n - 1) + center;
        let distance = (2 * row - (n - 1)).abs() + (2 * col - (n - 1)).abs();
        king[sq as usize] = (2 * (n - 1) - distance) * KING_PSQ_SPAN / (2 * (n - 1));
    }
    PsqTables { man, king }
}

/// Evaluates a position from the side to move's point of view.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let psq = tables(board.geometry());
    let us = board.color_to_move();
    let them = us.opponent();
    side_score(board, psq, us) - side_score(board, psq, them) + TEMPO
}

fn side_score(board: &Board, psq: &PsqTables, color: Color) -> i32 {
    let mut score = 0;
    let mut men = board.men(color);
    score += men.count_ones() as i32 * MAN_VALUE;
    while men != 0 {
        score += psq.man[color.index()][men.trailing_zeros() as usize];
        men &= men - 1;
    }
    let mut kings = board.kings(color);
    score += kings.count_ones() as i32 * KING_VALUE;
    while kings != 0 {
        score += psq.king[kings.trailing_zeros() as usize];
        kings &= kings - 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STANDARD;

    #[test]
    fn starting_position_is_tempo_only() {
        // The start is symmetric, so only the tempo term remains.
        let board = Board::new(&STANDARD);
        assert_eq!(evaluate(&board), TEMPO);
    }

    #[test]
    fn symmetric_for_both_sides() {
        let white = Board::from_fen(&STANDARD, "W:W31,32:B19,20").unwrap();
        let black = Board::from_fen(&STANDARD, "B:W31,32:B19,20").unwrap();
        assert_eq!(evaluate(&white), evaluate(&black));
    }

    #[test]
    fn extra_material_dominates() {
        let board = Board::from_fen(&STANDARD, "W:W28,29,30:B20").unwrap();
        assert!(evaluate(&board) > MAN_VALUE);
    }

    #[test]
    fn king_outweighs_man() {
        let kings = Board::from_fen(&STANDARD, "W:WK28:B20").unwrap();
        let men = Board::from_fen(&STANDARD, "W:W28:B20").unwrap();
        assert!(evaluate(&kings) > evaluate(&men));
    }

    #[test]
    fn advancement_is_rewarded() {
        // A white man deep in enemy territory beats one at home.
        let advanced = Board::from_fen(&STANDARD, "W:W8:B45").unwrap();
        let home = Board::from_fen(&STANDARD, "W:W43:B45").unwrap();
        assert!(evaluate(&advanced) > evaluate(&home));
    }

    #[test]
    fn tables_stay_in_band() {
        for geo in [Geometry::for_side(8), Geometry::for_side(10)] {
            let psq = tables(geo);
            for sq in 0..geo.squares() {
                assert!(psq.man[0][sq] <= MAN_PSQ_SPAN + MAN_CENTER_SPAN);
                assert!(psq.man[1][sq] <= MAN_PSQ_SPAN + MAN_CENTER_SPAN);
                assert!((0..=KING_PSQ_SPAN).contains(&psq.king[sq]));
            }
        }
    }
}
