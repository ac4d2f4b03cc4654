//! Perft: move-generation verification by leaf counting.
//!
//! `perft(n)` counts the positions reachable in exactly `n` plies; a
//! position with no legal moves before the horizon contributes nothing, the
//! convention the published draughts tables use. Draw rules are not
//! consulted: perft exercises the generator, nothing else.
//!
//! The sequential walker reuses one scratch move buffer per depth level so
//! the hot path never allocates. The parallel variant fans the root moves
//! out over rayon and shares a lock-free transposition table of atomic
//! entries, detecting torn reads by XORing each key with its value.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use rayon::prelude::*;

use crate::{Board, Move};

impl Board {
    /// Counts leaf positions at the given depth.
    ///
    /// ```rust
    /// use dammen::{Board, STANDARD};
    ///
    /// let board = Board::new(&STANDARD);
    /// assert_eq!(board.perft(2), 81);
    /// ```
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut board = self.copy();
        let mut scratches: Vec<Vec<Move>> =
            (0..depth).map(|_| Vec::with_capacity(48)).collect();
        perft_inner(&mut board, &mut scratches)
    }

    /// Parallel perft with a transposition table of roughly `tt_size_mb`
    /// megabytes (0 disables the table).
    #[must_use]
    pub fn perft_parallel(&self, depth: u32, tt_size_mb: usize) -> u64 {
        if depth <= 2 {
            return self.perft(depth);
        }

        let table = PerftTable::new(tt_size_mb * 1024 * 1024 / PerftTable::ENTRY_BYTES);
        let hits = AtomicU64::new(0);
        let lookups = AtomicU64::new(0);

        let moves = self.legal_moves();
        let nodes = moves
            .par_iter()
            .map(|mv| {
                let mut board = self.copy();
                board.push_unchecked(mv);
                let mut scratches: Vec<Vec<Move>> =
                    (1..depth).map(|_| Vec::with_capacity(48)).collect();
                perft_table_inner(&mut board, &mut scratches, &table, &hits, &lookups)
            })
            .sum();

        let hit_count = hits.load(Ordering::Relaxed);
        let lookup_count = lookups.load(Ordering::Relaxed);
        if lookup_count > 0 {
            debug!(
                "perft table: {hit_count} hits / {lookup_count} lookups ({:.2}%)",
                hit_count as f64 / lookup_count as f64 * 100.0
            );
        }
        nodes
    }
}

fn perft_inner(board: &mut Board, scratches: &mut [Vec<Move>]) -> u64 {
    let (moves, rest) = scratches.split_first_mut().expect("scratch per level");
    board.legal_moves_into(moves);
    if rest.is_empty() {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for index in 0..moves.len() {
        let mv = moves[index];
        board.push_unchecked(&mv);
        nodes += perft_inner(board, rest);
        board.pop_unchecked();
    }
    nodes
}

fn perft_table_inner(
    board: &mut Board,
    scratches: &mut [Vec<Move>],
    table: &PerftTable,
    hits: &AtomicU64,
    lookups: &AtomicU64,
) -> u64 {
    let depth = scratches.len() as u32;
    if depth >= 3 {
        lookups.fetch_add(1, Ordering::Relaxed);
        if let Some(nodes) = table.get(board.hash_key(), depth as u8) {
            hits.fetch_add(1, Ordering::Relaxed);
            return nodes;
        }
    }

    let (moves, rest) = scratches.split_first_mut().expect("scratch per level");
    board.legal_moves_into(moves);
    if rest.is_empty() {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for index in 0..moves.len() {
        let mv = moves[index];
        board.push_unchecked(&mv);
        nodes += perft_table_inner(board, rest, table, hits, lookups);
        board.pop_unchecked();
    }

    if depth >= 3 {
        table.insert(board.hash_key(), depth as u8, nodes);
    }
    nodes
}

/// Lock-free node-count cache. Entries pack the verification key with the
/// depth; key and value are XORed on store so a torn read never verifies.
struct PerftTable {
    entries: Vec<AtomicEntry>,
    mask: usize,
}

struct AtomicEntry {
    key: AtomicU64,
    value: AtomicU64,
}

impl PerftTable {
    const ENTRY_BYTES: usize = 16;

    fn new(capacity: usize) -> Self {
        if capacity == 0 {
            return Self {
                entries: Vec::new(),
                mask: 0,
            };
        }
        let capacity = capacity.next_power_of_two();
        let mut entries = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            entries.push(AtomicEntry {
                key: AtomicU64::new(0),
                value: AtomicU64::new(0),
            });
        }
        Self {
            entries,
            mask: capacity - 1,
        }
    }

    #[inline]
    fn packed_key(hash: u64, depth: u8) -> u64 {
        (hash & !0xFF) | u64::from(depth)
    }

    #[inline]
    fn get(&self, hash: u64, depth: u8) -> Option<u64> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = &self.entries[(hash as usize) & self.mask];
        let value = entry.value.load(Ordering::Relaxed);
        let stored = entry.key.load(Ordering::Relaxed);
        (stored ^ value == Self::packed_key(hash, depth)).then_some(value)
    }

    #[inline]
    fn insert(&self, hash: u64, depth: u8, nodes: u64) {
        if self.entries.is_empty() {
            return;
        }
        let entry = &self.entries[(hash as usize) & self.mask];
        entry
            .key
            .store(Self::packed_key(hash, depth) ^ nodes, Ordering::Relaxed);
        entry.value.store(nodes, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AMERICAN, STANDARD};

    #[test]
    fn perft_depth_zero_is_one() {
        assert_eq!(Board::new(&STANDARD).perft(0), 1);
    }

    #[test]
    fn perft_depth_one_counts_legal_moves() {
        assert_eq!(Board::new(&STANDARD).perft(1), 9);
        assert_eq!(Board::new(&AMERICAN).perft(1), 7);
    }

    #[test]
    fn terminal_positions_contribute_nothing() {
        let board = Board::from_fen(&STANDARD, "W:W:B5").unwrap();
        assert_eq!(board.perft(1), 0);
        assert_eq!(board.perft(3), 0);
    }

    #[test]
    fn perft_leaves_the_board_untouched() {
        let board = Board::new(&STANDARD);
        let before = board.clone();
        board.perft(4);
        assert_eq!(board, before);
        assert_eq!(board.hash_key(), before.hash_key());
    }

    #[test]
    fn parallel_matches_sequential() {
        let board = Board::new(&STANDARD);
        let sequential = board.perft(5);
        assert_eq!(board.perft_parallel(5, 8), sequential);
        assert_eq!(board.perft_parallel(5, 0), sequential, "table disabled");
    }
}
