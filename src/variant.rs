//! Per-variant rule parameters.
//!
//! Every rule difference between the supported games is expressed as data in
//! a [`Variant`] record; the move generator, the draw logic and the notation
//! layer consult the record and never branch on which variant they are
//! running. Boards keep a `&'static Variant` chosen at construction.
//!
//! | Variant | Board | Kings | Men capture | Max capture |
//! |---------|-------|-------|-------------|-------------|
//! | [`STANDARD`] | 10×10 | flying | forward + backward | by count |
//! | [`AMERICAN`] | 8×8 | short | forward only | no |
//! | [`FRISIAN`] | 10×10 | flying | 8 directions | by piece value |
//! | [`RUSSIAN`] | 8×8 | flying | forward + backward | no |
//!
//! Captures are mandatory in all four variants; "max capture" describes the
//! additional filter applied when several capture chains exist.

use std::fmt;

/// Identifies a built-in variant; used to key the cached geometry and
/// evaluation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantId {
    /// International draughts on 10×10.
    Standard,
    /// American (English) checkers on 8×8.
    American,
    /// Frisian draughts on 10×10.
    Frisian,
    /// Russian draughts on 8×8.
    Russian,
}

/// What happens when a man reaches its promotion row in the middle of a
/// capture chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidChainPromotion {
    /// The chain ends on the promotion square and the man promotes
    /// (American).
    Stop,
    /// The man promotes immediately and continues capturing as a king
    /// (Russian).
    ContinueAsKing,
    /// The man passes through without promoting; it promotes only if the
    /// chain ends on the promotion row (Standard, Frisian).
    PassThrough,
}

/// A material-based endgame draw rule: the position is drawn once the side
/// totals drop to `max_pieces` with weighted strength (2·kings + men) of at
/// least `min_weight` and the halfmove clock reaches `plies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndgameDrawRule {
    /// Upper bound on the total piece count for the rule to apply.
    pub max_pieces: u32,
    /// Lower bound on 2·kings + men over both sides.
    pub min_weight: u32,
    /// The rule fires only when no men remain on the board.
    pub kings_only: bool,
    /// Halfmove-clock threshold.
    pub plies: u16,
}

/// The full rule record for one draughts variant.
#[derive(Debug)]
pub struct Variant {
    /// Identity for table caching and `Display`.
    pub id: VariantId,
    /// Human-readable name, used in PDN headers.
    pub name: &'static str,
    /// PDN `GameType` tag value.
    pub game_type: u8,
    /// Board side length N; the playable square count is N²/2.
    pub board_side: usize,
    /// Kings slide any distance when true, one step otherwise.
    pub flying_kings: bool,
    /// Men may capture toward their own back row.
    pub men_capture_backward: bool,
    /// Only capture chains of maximal weight are legal.
    pub maximum_capture: bool,
    /// Orthogonal jumps are legal capture directions (Frisian).
    pub orthogonal_captures: bool,
    /// Among equal-weight capture chains, chains started by a king are the
    /// only legal ones (Frisian).
    pub king_capture_priority: bool,
    /// Promotion timing inside capture chains.
    pub mid_chain_promotion: MidChainPromotion,
    /// Weight of a captured man under the maximum-capture rule.
    pub capture_man_value: u32,
    /// Weight of a captured king under the maximum-capture rule.
    pub capture_king_value: u32,
    /// Draw after this many plies without a capture or man move, if set.
    pub no_progress_plies: Option<u16>,
    /// Material-based endgame draw rules.
    pub endgame_rules: &'static [EndgameDrawRule],
}

impl Variant {
    /// Number of playable squares on this variant's board.
    #[inline]
    #[must_use]
    pub const fn square_count(&self) -> usize {
        self.board_side * self.board_side / 2
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variant {}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// International draughts: 10×10, flying kings, backward man captures,
/// maximum capture by count.
pub static STANDARD: Variant = Variant {
    id: VariantId::Standard,
    name: "Standard (international) checkers",
    game_type: 20,
    board_side: 10,
    flying_kings: true,
    men_capture_backward: true,
    maximum_capture: true,
    orthogonal_captures: false,
    king_capture_priority: false,
    mid_chain_promotion: MidChainPromotion::PassThrough,
    capture_man_value: 1,
    capture_king_value: 1,
    no_progress_plies: Some(50),
    endgame_rules: &[
        // 1 king vs up to two pieces: 5 moves each to convert.
        EndgameDrawRule {
            max_pieces: 3,
            min_weight: 5,
            kings_only: false,
            plies: 10,
        },
        // Small endgames with three or more kings: 16 moves each.
        EndgameDrawRule {
            max_pieces: 4,
            min_weight: 6,
            kings_only: false,
            plies: 32,
        },
    ],
};

/// American checkers: 8×8, short kings, men capture forward only.
pub static AMERICAN: Variant = Variant {
    id: VariantId::American,
    name: "American checkers",
    game_type: 23,
    board_side: 8,
    flying_kings: false,
    men_capture_backward: false,
    maximum_capture: false,
    orthogonal_captures: false,
    king_capture_priority: false,
    mid_chain_promotion: MidChainPromotion::Stop,
    capture_man_value: 1,
    capture_king_value: 1,
    no_progress_plies: None,
    endgame_rules: &[],
};

/// Frisian draughts: 10×10, captures in eight directions, maximum capture by
/// piece value (man = 1, king = 1.5, stored ×2), king priority on ties.
pub static FRISIAN: Variant = Variant {
    id: VariantId::Frisian,
    name: "Frisian draughts",
    game_type: 40,
    board_side: 10,
    flying_kings: true,
    men_capture_backward: true,
    maximum_capture: true,
    orthogonal_captures: true,
    king_capture_priority: true,
    mid_chain_promotion: MidChainPromotion::PassThrough,
    capture_man_value: 2,
    capture_king_value: 3,
    no_progress_plies: Some(50),
    endgame_rules: &[
        // One king each: 2 moves per side.
        EndgameDrawRule {
            max_pieces: 2,
            min_weight: 4,
            kings_only: true,
            plies: 4,
        },
        // Two kings vs one: 7 moves per side.
        EndgameDrawRule {
            max_pieces: 3,
            min_weight: 6,
            kings_only: true,
            plies: 14,
        },
    ],
};

/// Russian draughts: 8×8, flying kings, backward man captures, free choice
/// among capture chains, mid-chain promotion.
pub static RUSSIAN: Variant = Variant {
    id: VariantId::Russian,
    name: "Russian draughts",
    game_type: 25,
    board_side: 8,
    flying_kings: true,
    men_capture_backward: true,
    maximum_capture: false,
    orthogonal_captures: false,
    king_capture_priority: false,
    mid_chain_promotion: MidChainPromotion::ContinueAsKing,
    capture_man_value: 1,
    capture_king_value: 1,
    no_progress_plies: Some(30),
    endgame_rules: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&STANDARD => 50 ; "standard")]
    #[test_case(&AMERICAN => 32 ; "american")]
    #[test_case(&FRISIAN => 50 ; "frisian")]
    #[test_case(&RUSSIAN => 32 ; "russian")]
    fn square_count(variant: &Variant) -> usize {
        variant.square_count()
    }

    #[test]
    fn identity_equality() {
        assert_eq!(&STANDARD, &STANDARD);
        assert_ne!(&STANDARD, &FRISIAN);
    }

    #[test]
    fn frisian_weighting_prefers_two_men_over_one_king() {
        let two_men = 2 * FRISIAN.capture_man_value;
        let one_king = FRISIAN.capture_king_value;
        assert!(two_men > one_king);
        // Three men tie two kings under the 1 : 1.5 weighting.
        assert_eq!(3 * FRISIAN.capture_man_value, 2 * FRISIAN.capture_king_value);
    }

    #[test]
    fn names_match_pdn_headers() {
        assert_eq!(STANDARD.game_type, 20);
        assert_eq!(AMERICAN.game_type, 23);
        assert_eq!(RUSSIAN.game_type, 25);
        assert_eq!(FRISIAN.game_type, 40);
    }
}
