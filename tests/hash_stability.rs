//! Make/unmake stability over random playouts: 10,000 random legal games
//! (2,500 seeds across each of the four variants) of up to 200 plies, where
//! every pop must restore the position, clock and hash bit for bit, and the
//! incremental hash is cross-checked against a from-scratch rebuild.

use dammen::{Board, Variant, AMERICAN, FRISIAN, RUSSIAN, STANDARD};

const GAMES_PER_VARIANT: u64 = 2_500;
const MAX_PLIES: usize = 200;

/// Deterministic pseudo-random stream for reproducible playouts.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

#[derive(Clone, PartialEq, Debug)]
struct Snapshot {
    fen: String,
    hash: u64,
    clock: u16,
    stack_len: usize,
}

fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        fen: board.fen(),
        hash: board.hash_key(),
        clock: board.halfmove_clock(),
        stack_len: board.move_count(),
    }
}

fn random_playout(variant: &'static Variant, seed: u64) {
    let mut rng = SplitMix64::new(seed);
    let mut board = Board::new(variant);
    let mut snapshots = vec![snapshot(&board)];

    for ply in 0..MAX_PLIES {
        let moves = board.legal_moves();
        if moves.is_empty() || board.is_draw() {
            break;
        }
        let mv = moves[rng.below(moves.len())];
        board.push(&mv).unwrap();

        // Periodically rebuild the position through FEN: the incremental
        // hash must equal the from-scratch hash of the same position.
        if ply % 8 == 0 {
            let rebuilt = Board::from_fen(variant, &board.fen()).unwrap();
            assert_eq!(
                rebuilt.hash_key(),
                board.hash_key(),
                "{variant}: incremental hash diverged after {mv} (seed {seed})"
            );
        }

        snapshots.push(snapshot(&board));
    }

    while board.move_count() > 0 {
        board.pop().unwrap();
        snapshots.pop();
        assert_eq!(
            snapshot(&board),
            *snapshots.last().unwrap(),
            "{variant}: pop failed to restore the position (seed {seed})"
        );
    }
    assert_eq!(snapshot(&board), snapshots[0]);
}

#[test]
fn playouts_round_trip_standard() {
    for seed in 0..GAMES_PER_VARIANT {
        random_playout(&STANDARD, seed);
    }
}

#[test]
fn playouts_round_trip_american() {
    for seed in 0..GAMES_PER_VARIANT {
        random_playout(&AMERICAN, seed);
    }
}

#[test]
fn playouts_round_trip_frisian() {
    for seed in 0..GAMES_PER_VARIANT {
        random_playout(&FRISIAN, seed);
    }
}

#[test]
fn playouts_round_trip_russian() {
    for seed in 0..GAMES_PER_VARIANT {
        random_playout(&RUSSIAN, seed);
    }
}

#[test]
fn every_opening_move_round_trips_in_every_variant() {
    for variant in [&STANDARD, &AMERICAN, &FRISIAN, &RUSSIAN] {
        let mut board = Board::new(variant);
        let before = snapshot(&board);
        for mv in board.legal_moves() {
            board.push(&mv).unwrap();
            let undone = board.pop().unwrap();
            assert_eq!(undone, mv);
            assert_eq!(snapshot(&board), before);
        }
    }
}
