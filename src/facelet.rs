//! The facelet-level cube state: a flat array of 54 stickers, one cube
//! turn away from how a solver is scrambled by hand. This is the only part
//! of the model that knows how to physically turn a face; everything else
//! (coordinates, tables, search) works from the piece-level view derived
//! from it.

use rand::Rng;

use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Face, Move, ALL_MOVES};

/// One of the six sticker colors. Each face has a fixed home color:
/// `U -> White, D -> Yellow, L -> Green, R -> Blue, F -> Red, B -> Orange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

pub const ALL_COLORS: [Color; 6] = [
    Color::White,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::Orange,
];

impl Color {
    fn from_char(c: char) -> Result<Color, Error> {
        match c {
            'U' | 'W' => Ok(Color::White),
            'D' | 'Y' => Ok(Color::Yellow),
            'L' | 'G' => Ok(Color::Green),
            'R' | 'B' => Ok(Color::Blue),
            'F' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            _ => Err(Error::InvalidColor(c)),
        }
    }

    fn to_char(self) -> char {
        match self {
            Color::White => 'U',
            Color::Yellow => 'D',
            Color::Green => 'L',
            Color::Blue => 'R',
            Color::Red => 'F',
            Color::Orange => 'B',
        }
    }
}

const fn idx(face: Face, pos: usize) -> usize {
    face as usize * 9 + pos
}

/// Facelet index triples for each corner, U/D facelet first then clockwise,
/// in the order of [`crate::cubie::ALL_CORNERS`].
pub const CORNER_FACELET: [[usize; 3]; 8] = [
    [idx(Face::U, 8), idx(Face::R, 0), idx(Face::F, 2)], // URF
    [idx(Face::U, 6), idx(Face::F, 0), idx(Face::L, 2)], // UFL
    [idx(Face::U, 0), idx(Face::L, 0), idx(Face::B, 2)], // ULB
    [idx(Face::U, 2), idx(Face::B, 0), idx(Face::R, 2)], // UBR
    [idx(Face::D, 2), idx(Face::F, 8), idx(Face::R, 6)], // DFR
    [idx(Face::D, 0), idx(Face::L, 8), idx(Face::F, 6)], // DLF
    [idx(Face::D, 6), idx(Face::B, 8), idx(Face::L, 6)], // DBL
    [idx(Face::D, 8), idx(Face::R, 8), idx(Face::B, 6)], // DRB
];

/// Home colors of each corner, matching the facelet order in `CORNER_FACELET`.
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::White, Color::Blue, Color::Red],    // URF
    [Color::White, Color::Red, Color::Green],   // UFL
    [Color::White, Color::Green, Color::Orange],// ULB
    [Color::White, Color::Orange, Color::Blue], // UBR
    [Color::Yellow, Color::Red, Color::Blue],   // DFR
    [Color::Yellow, Color::Green, Color::Red],  // DLF
    [Color::Yellow, Color::Orange, Color::Green], // DBL
    [Color::Yellow, Color::Blue, Color::Orange],  // DRB
];

/// Facelet index pairs for each edge, in the order of [`crate::cubie::ALL_EDGES`].
pub const EDGE_FACELET: [[usize; 2]; 12] = [
    [idx(Face::U, 5), idx(Face::R, 1)], // UR
    [idx(Face::U, 7), idx(Face::F, 1)], // UF
    [idx(Face::U, 3), idx(Face::L, 1)], // UL
    [idx(Face::U, 1), idx(Face::B, 1)], // UB
    [idx(Face::D, 5), idx(Face::R, 7)], // DR
    [idx(Face::D, 1), idx(Face::F, 7)], // DF
    [idx(Face::D, 3), idx(Face::L, 7)], // DL
    [idx(Face::D, 7), idx(Face::B, 7)], // DB
    [idx(Face::F, 5), idx(Face::R, 3)], // FR
    [idx(Face::F, 3), idx(Face::L, 5)], // FL
    [idx(Face::B, 5), idx(Face::L, 3)], // BL
    [idx(Face::B, 3), idx(Face::R, 5)], // BR
];

/// Home colors of each edge, matching the facelet order in `EDGE_FACELET`.
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::White, Color::Blue],   // UR
    [Color::White, Color::Red],    // UF
    [Color::White, Color::Green],  // UL
    [Color::White, Color::Orange], // UB
    [Color::Yellow, Color::Blue],  // DR
    [Color::Yellow, Color::Red],   // DF
    [Color::Yellow, Color::Green], // DL
    [Color::Yellow, Color::Orange],// DB
    [Color::Red, Color::Blue],     // FR
    [Color::Red, Color::Green],    // FL
    [Color::Orange, Color::Green], // BL
    [Color::Orange, Color::Blue],  // BR
];

/// The 54-sticker cube state and the public API surface external callers
/// (a UI, a CLI, a scramble generator) interact with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCube {
    facelets: [Color; 54],
}

fn rotate_face_cw(f: &mut [Color; 54], face: Face) {
    let base = face as usize * 9;
    apply_4cycle(f, [base, base + 2, base + 8, base + 6]);
    apply_4cycle(f, [base + 1, base + 5, base + 7, base + 3]);
}

fn apply_4cycle(f: &mut [Color; 54], cyc: [usize; 4]) {
    let a = f[cyc[0]];
    let b = f[cyc[1]];
    let c = f[cyc[2]];
    let d = f[cyc[3]];
    f[cyc[1]] = a;
    f[cyc[2]] = b;
    f[cyc[3]] = c;
    f[cyc[0]] = d;
}

/// Neighbor facelet cycles touched by a clockwise turn of each face, in
/// global facelet indices.
fn neighbor_cycles(face: Face) -> [[usize; 4]; 3] {
    use Face::*;
    match face {
        U => [
            [idx(F, 0), idx(L, 0), idx(B, 0), idx(R, 0)],
            [idx(F, 1), idx(L, 1), idx(B, 1), idx(R, 1)],
            [idx(F, 2), idx(L, 2), idx(B, 2), idx(R, 2)],
        ],
        D => [
            [idx(F, 6), idx(R, 6), idx(B, 6), idx(L, 6)],
            [idx(F, 7), idx(R, 7), idx(B, 7), idx(L, 7)],
            [idx(F, 8), idx(R, 8), idx(B, 8), idx(L, 8)],
        ],
        L => [
            [idx(U, 0), idx(F, 0), idx(D, 0), idx(B, 8)],
            [idx(U, 3), idx(F, 3), idx(D, 3), idx(B, 5)],
            [idx(U, 6), idx(F, 6), idx(D, 6), idx(B, 2)],
        ],
        R => [
            [idx(U, 2), idx(B, 6), idx(D, 2), idx(F, 2)],
            [idx(U, 5), idx(B, 3), idx(D, 5), idx(F, 5)],
            [idx(U, 8), idx(B, 0), idx(D, 8), idx(F, 8)],
        ],
        F => [
            [idx(U, 6), idx(R, 0), idx(D, 2), idx(L, 8)],
            [idx(U, 7), idx(R, 3), idx(D, 1), idx(L, 5)],
            [idx(U, 8), idx(R, 6), idx(D, 0), idx(L, 2)],
        ],
        B => [
            [idx(U, 2), idx(L, 0), idx(D, 6), idx(R, 8)],
            [idx(U, 1), idx(L, 3), idx(D, 7), idx(R, 5)],
            [idx(U, 0), idx(L, 6), idx(D, 8), idx(R, 2)],
        ],
    }
}

fn turn_cw(f: &mut [Color; 54], face: Face) {
    rotate_face_cw(f, face);
    for cyc in neighbor_cycles(face) {
        apply_4cycle(f, cyc);
    }
}

impl FaceCube {
    /// Builds a solved cube: each face filled with its home color.
    pub fn solved() -> FaceCube {
        let mut facelets = [Color::White; 54];
        for &face in &[Face::U, Face::D, Face::L, Face::R, Face::F, Face::B] {
            let color = match face {
                Face::U => Color::White,
                Face::D => Color::Yellow,
                Face::L => Color::Green,
                Face::R => Color::Blue,
                Face::F => Color::Red,
                Face::B => Color::Orange,
            };
            for pos in 0..9 {
                facelets[idx(face, pos)] = color;
            }
        }
        FaceCube { facelets }
    }

    /// Resets `self` to the solved state in place.
    pub fn reset(&mut self) {
        *self = FaceCube::solved();
    }

    /// Applies one face turn in place.
    pub fn apply(&mut self, m: Move) {
        let face = m.face();
        for _ in 0..m.quarters() {
            turn_cw(&mut self.facelets, face);
        }
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply(m);
        }
    }

    /// Generates a scramble of `n` random face turns and applies it,
    /// returning the moves applied.
    pub fn scramble(&mut self, n: usize) -> Vec<Move> {
        self.scramble_with(n, &mut rand::thread_rng())
    }

    /// Like [`FaceCube::scramble`], but draws moves from the given RNG
    /// instead of the thread-local one, for reproducible tests.
    pub fn scramble_with<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<Move> {
        let mut applied: Vec<Move> = Vec::with_capacity(n);
        while applied.len() < n {
            let candidate = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
            if crate::solver::skip_face(&applied, candidate.face()) {
                continue;
            }
            self.apply(candidate);
            applied.push(candidate);
        }
        applied
    }

    /// True iff every face's nine facelets equal its center facelet.
    pub fn is_solved(&self) -> bool {
        for &face in &[Face::U, Face::D, Face::L, Face::R, Face::F, Face::B] {
            let center = self.facelets[idx(face, 4)];
            for pos in 0..9 {
                if self.facelets[idx(face, pos)] != center {
                    return false;
                }
            }
        }
        true
    }

    /// True iff every color appears exactly nine times and the facelets
    /// decode to a cubie state satisfying all five solvability invariants.
    pub fn is_solvable(&self) -> bool {
        let mut counts = [0u8; 6];
        for &c in &self.facelets {
            counts[c as usize] += 1;
        }
        if counts.iter().any(|&n| n != 9) {
            return false;
        }
        match CubieCube::try_from(self) {
            Ok(cc) => cc.is_solvable(),
            Err(_) => false,
        }
    }

    /// The raw 54-element facelet array.
    pub fn state(&self) -> [Color; 54] {
        self.facelets
    }

    /// Overwrites the facelets with `state`.
    pub fn set_state(&mut self, state: [Color; 54]) {
        self.facelets = state;
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    fn try_from(s: &str) -> Result<FaceCube, Error> {
        if s.chars().count() != 54 {
            return Err(Error::InvalidFaceletLength(s.chars().count()));
        }
        let mut facelets = [Color::White; 54];
        for (i, c) in s.chars().enumerate() {
            facelets[i] = Color::from_char(c)?;
        }
        Ok(FaceCube { facelets })
    }
}

impl std::fmt::Display for FaceCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.facelets {
            write!(f, "{}", c.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn solved_is_solved() {
        assert!(FaceCube::solved().is_solved());
        assert!(FaceCube::solved().is_solvable());
    }

    #[test]
    fn quarter_turn_four_times_is_identity() {
        let mut c = FaceCube::solved();
        for _ in 0..4 {
            c.apply(Move::U);
        }
        assert_eq!(c, FaceCube::solved());
    }

    #[test]
    fn half_turn_twice_is_identity() {
        let mut c = FaceCube::solved();
        c.apply(Move::R2);
        c.apply(Move::R2);
        assert_eq!(c, FaceCube::solved());
    }

    #[test]
    fn move_then_inverse_is_identity() {
        for &m in &ALL_MOVES {
            let mut c = FaceCube::solved();
            c.apply(m);
            c.apply(m.inverse());
            assert_eq!(c, FaceCube::solved(), "move {} failed to invert", m);
        }
    }

    #[test]
    fn centers_never_move() {
        let mut c = FaceCube::solved();
        for &m in &ALL_MOVES {
            c.apply(m);
        }
        for &face in &[Face::U, Face::D, Face::L, Face::R, Face::F, Face::B] {
            let expected = match face {
                Face::U => Color::White,
                Face::D => Color::Yellow,
                Face::L => Color::Green,
                Face::R => Color::Blue,
                Face::F => Color::Red,
                Face::B => Color::Orange,
            };
            assert_eq!(c.facelets[idx(face, 4)], expected);
        }
    }

    #[test]
    fn color_counts_preserved_after_moves() {
        let mut c = FaceCube::solved();
        for &m in &ALL_MOVES {
            c.apply(m);
            let mut counts = [0u8; 6];
            for &col in &c.facelets {
                counts[col as usize] += 1;
            }
            assert!(counts.iter().all(|&n| n == 9));
        }
    }

    #[test]
    fn sticker_swap_breaks_solvability() {
        let mut c = FaceCube::solved();
        c.facelets.swap(idx(Face::U, 8), idx(Face::F, 0));
        assert!(!c.is_solvable());
    }

    #[test]
    fn facelet_string_round_trip() {
        let mut c = FaceCube::solved();
        for &m in &[Move::R, Move::U, Move::F2] {
            c.apply(m);
        }
        let s = c.to_string();
        let back = FaceCube::try_from(s.as_str()).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn scramble_applies_requested_move_count_and_stays_solvable() {
        use rand::SeedableRng;
        let mut c = FaceCube::solved();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let moves = c.scramble_with(20, &mut rng);
        assert_eq!(moves.len(), 20);
        assert!(c.is_solvable());
        assert!(!c.is_solved());
    }

    #[test]
    fn scramble_never_repeats_a_face_immediately() {
        use rand::SeedableRng;
        let mut c = FaceCube::solved();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let moves = c.scramble_with(50, &mut rng);
        for pair in moves.windows(2) {
            assert_ne!(pair[0].face(), pair[1].face());
        }
    }
}
