//! Precomputed board geometry over playable squares.
//!
//! A board of side N has N²/2 playable (dark) squares, numbered 0…S−1 in
//! row-major order over dark squares only, row 0 at the top. Rank
//! `r = sq / (N/2)`; the absolute grid column is `2·f + ((r+1) mod 2)` for
//! file `f = sq % (N/2)`, so a square is playable exactly when `r + c` is
//! odd. White sits on the high-numbered rows and moves toward row 0.
//!
//! For every square the tables hold, per diagonal direction: the single-step
//! target, the jump (over, landing) pair, and the full sliding ray used by
//! flying kings. Frisian orthogonal captures get their own jump and ray
//! tables over ranks and files, where neighboring playable squares sit two
//! grid squares apart.
//!
//! Tables are built once per board side and cached process-wide; readers do
//! not synchronize beyond the `OnceLock` acquire.

use std::fmt;
use std::sync::OnceLock;

use crate::{Color, Variant};

/// Diagonal directions, in table order.
///
/// 0 = up-right, 1 = up-left, 2 = down-right, 3 = down-left ("up" is toward
/// row 0, white's direction of play).
pub const DIAG_DIRS: usize = 4;

/// Orthogonal directions: 0 = up, 1 = right, 2 = down, 3 = left.
pub const ORTHO_DIRS: usize = 4;

/// Sentinel for "off board" in step and jump tables.
pub const OFF_BOARD: i8 = -1;

const DIAG_DELTAS: [(i32, i32); DIAG_DIRS] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];
const ORTHO_DELTAS: [(i32, i32); ORTHO_DIRS] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Geometry tables for one board side.
pub struct Geometry {
    side: usize,
    squares: usize,
    pub(crate) all_mask: u64,
    pub(crate) rows: Vec<u64>,
    /// Promotion-row masks indexed by color: white promotes on row 0, black
    /// on row N−1.
    pub(crate) promotion: [u64; 2],
    /// `diag_step[sq][d]`: one diagonal step, or [`OFF_BOARD`].
    pub(crate) diag_step: Vec<[i8; DIAG_DIRS]>,
    /// `diag_jump[sq][d]`: the landing square of a short jump over
    /// `diag_step[sq][d]`, or [`OFF_BOARD`].
    pub(crate) diag_jump: Vec<[i8; DIAG_DIRS]>,
    /// `diag_rays[sq][d]`: successive diagonal steps until the board edge.
    pub(crate) diag_rays: Vec<[Vec<u8>; DIAG_DIRS]>,
    /// `ortho_jump[sq][d]`: (over, landing) for an orthogonal jump.
    pub(crate) ortho_jump: Vec<[(i8, i8); ORTHO_DIRS]>,
    /// `ortho_rays[sq][d]`: successive orthogonal playable squares.
    pub(crate) ortho_rays: Vec<[Vec<u8>; ORTHO_DIRS]>,
    /// Forward single-step masks for men, indexed by color.
    pub(crate) man_steps: [Vec<u64>; 2],
    /// All four diagonal single-step targets, for short-range kings.
    pub(crate) king_steps: Vec<u64>,
    /// Squares strictly between two co-diagonal squares.
    between: Vec<Vec<u64>>,
    /// Algebraic names ("b8", "c3", …) in square order.
    square_names: Vec<String>,
}

impl Geometry {
    /// The cached geometry for a variant's board.
    #[must_use]
    pub fn of(variant: &Variant) -> &'static Self {
        Self::for_side(variant.board_side)
    }

    /// The cached geometry for a board of the given side (8 or 10).
    ///
    /// # Panics
    /// Panics if `side` is not 8 or 10.
    #[must_use]
    pub fn for_side(side: usize) -> &'static Self {
        static GEO_8: OnceLock<Geometry> = OnceLock::new();
        static GEO_10: OnceLock<Geometry> = OnceLock::new();
        match side {
            8 => GEO_8.get_or_init(|| Self::build(8)),
            10 => GEO_10.get_or_init(|| Self::build(10)),
            _ => panic!("unsupported board side: {side}"),
        }
    }

    /// Board side length N.
    #[inline]
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of playable squares.
    #[inline]
    #[must_use]
    pub const fn squares(&self) -> usize {
        self.squares
    }

    /// Row (rank from the top) of a square.
    #[inline]
    #[must_use]
    pub fn row(&self, sq: u8) -> usize {
        sq as usize / (self.side / 2)
    }

    /// Absolute grid column of a square.
    #[inline]
    #[must_use]
    pub fn grid_col(&self, sq: u8) -> usize {
        let half = self.side / 2;
        let r = sq as usize / half;
        2 * (sq as usize % half) + (r + 1) % 2
    }

    /// The mask of playable squares strictly between `a` and `b` on a shared
    /// diagonal, or 0 if the squares are not co-diagonal.
    #[inline]
    #[must_use]
    pub fn between(&self, a: u8, b: u8) -> u64 {
        self.between[a as usize][b as usize]
    }

    /// Algebraic name of a square ("b8", "d4", …).
    #[inline]
    #[must_use]
    pub fn square_name(&self, sq: u8) -> &str {
        &self.square_names[sq as usize]
    }

    /// Looks up a square by its algebraic name.
    #[must_use]
    pub fn square_by_name(&self, name: &str) -> Option<u8> {
        self.square_names
            .iter()
            .position(|n| n == name)
            .map(|idx| idx as u8)
    }

    fn playable(side: usize, r: i32, c: i32) -> Option<u8> {
        let n = side as i32;
        if r < 0 || r >= n || c < 0 || c >= n || (r + c) % 2 == 0 {
            return None;
        }
        Some((r * (n / 2) + c / 2) as u8)
    }

    fn build(side: usize) -> Self {
        let half = side / 2;
        let squares = side * half;
        let coords: Vec<(i32, i32)> = (0..squares)
            .map(|sq| {
                let r = (sq / half) as i32;
                let c = (2 * (sq % half) + (sq / half + 1) % 2) as i32;
                (r, c)
            })
            .collect();

        let mut rows = vec![0u64; side];
        for sq in 0..squares {
            rows[sq / half] |= 1u64 << sq;
        }

        let mut diag_step = Vec::with_capacity(squares);
        let mut diag_jump = Vec::with_capacity(squares);
        let mut diag_rays = Vec::with_capacity(squares);
        let mut ortho_jump = Vec::with_capacity(squares);
        let mut ortho_rays = Vec::with_capacity(squares);
        let mut king_steps = vec![0u64; squares];
        let mut man_steps = [vec![0u64; squares], vec![0u64; squares]];
        let mut square_names = Vec::with_capacity(squares);

        for sq in 0..squares {
            let (r, c) = coords[sq];

            let mut steps = [OFF_BOARD; DIAG_DIRS];
            let mut jumps = [OFF_BOARD; DIAG_DIRS];
            let mut rays: [Vec<u8>; DIAG_DIRS] = Default::default();
            for (d, &(dr, dc)) in DIAG_DELTAS.iter().enumerate() {
                if let Some(t) = Self::playable(side, r + dr, c + dc) {
                    steps[d] = t as i8;
                    king_steps[sq] |= 1u64 << t;
                    if let Some(l) = Self::playable(side, r + 2 * dr, c + 2 * dc) {
                        jumps[d] = l as i8;
                    }
                }
                let mut k = 1;
                while let Some(t) = Self::playable(side, r + k * dr, c + k * dc) {
                    rays[d].push(t);
                    k += 1;
                }
            }
            // White men advance toward row 0 (directions 0 and 1).
            man_steps[Color::White.index()][sq] = mask_of(steps[0]) | mask_of(steps[1]);
            man_steps[Color::Black.index()][sq] = mask_of(steps[2]) | mask_of(steps[3]);

            let mut o_jump = [(OFF_BOARD, OFF_BOARD); ORTHO_DIRS];
            let mut o_rays: [Vec<u8>; ORTHO_DIRS] = Default::default();
            for (d, &(dr, dc)) in ORTHO_DELTAS.iter().enumerate() {
                let mid = Self::playable(side, r + dr, c + dc);
                let land = Self::playable(side, r + 2 * dr, c + 2 * dc);
                if let (Some(m), Some(l)) = (mid, land) {
                    o_jump[d] = (m as i8, l as i8);
                }
                let mut k = 1;
                while let Some(t) = Self::playable(side, r + k * dr, c + k * dc) {
                    o_rays[d].push(t);
                    k += 1;
                }
            }

            let file = (b'a' + c as u8) as char;
            let rank = side - r as usize;
            square_names.push(format!("{file}{rank}"));

            diag_step.push(steps);
            diag_jump.push(jumps);
            diag_rays.push(rays);
            ortho_jump.push(o_jump);
            ortho_rays.push(o_rays);
        }

        let mut between = vec![vec![0u64; squares]; squares];
        for sq in 0..squares {
            for rays in &diag_rays[sq] {
                let mut mask = 0u64;
                for &t in rays {
                    between[sq][t as usize] = mask;
                    mask |= 1u64 << t;
                }
            }
        }

        Self {
            side,
            squares,
            all_mask: if squares == 64 {
                u64::MAX
            } else {
                (1u64 << squares) - 1
            },
            promotion: [rows[0], rows[side - 1]],
            rows,
            diag_step,
            diag_jump,
            diag_rays,
            ortho_jump,
            ortho_rays,
            man_steps,
            king_steps,
            between,
            square_names,
        }
    }
}

impl fmt::Debug for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Geometry")
            .field("side", &self.side)
            .field("squares", &self.squares)
            .finish_non_exhaustive()
    }
}

#[inline]
const fn mask_of(sq: i8) -> u64 {
    if sq < 0 {
        0
    } else {
        1u64 << sq
    }
}
