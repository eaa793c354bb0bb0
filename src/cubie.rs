//! The piece-level (corner/edge permutation + orientation) model. This is
//! the representation the coordinate codec and the search engine operate
//! on; the facelet model in [`crate::facelet`] is the only thing that knows
//! how to turn a face, and cubie state is always derived from it.

use lazy_static::lazy_static;

use crate::error::Error;
use crate::facelet::{Color, FaceCube, CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET};
use crate::moves::{Move, ALL_MOVES};

/// The eight corner positions/identities, in canonical order.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

pub const ALL_CORNERS: [Corner; 8] = [
    Corner::URF,
    Corner::UFL,
    Corner::ULB,
    Corner::UBR,
    Corner::DFR,
    Corner::DLF,
    Corner::DBL,
    Corner::DRB,
];

/// The twelve edge positions/identities, in canonical order. The last four
/// (`FR, FL, BL, BR`) are the slice edges.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

pub const ALL_EDGES: [Edge; 12] = [
    Edge::UR,
    Edge::UF,
    Edge::UL,
    Edge::UB,
    Edge::DR,
    Edge::DF,
    Edge::DL,
    Edge::DB,
    Edge::FR,
    Edge::FL,
    Edge::BL,
    Edge::BR,
];

/// The piece-level state of a cube: for each position, which piece sits
/// there (`cp`/`ep`, indices into [`ALL_CORNERS`]/[`ALL_EDGES`]) and how it
/// is twisted/flipped (`co`/`eo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [u8; 8],
    pub co: [u8; 8],
    pub ep: [u8; 12],
    pub eo: [u8; 12],
}

impl CubieCube {
    /// The solved cube: every piece in its home position, no twist or flip.
    pub fn solved() -> CubieCube {
        CubieCube {
            cp: [0, 1, 2, 3, 4, 5, 6, 7],
            co: [0; 8],
            ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            eo: [0; 12],
        }
    }

    /// Composes `self` then `other`: the piece that ends up at position `i`
    /// is whatever piece `other` sends to `i`, read through `self`.
    /// Matches the convention `(self * other).apply_to(x) == other.apply_to(self.apply_to(x))`
    /// used to build up move effects incrementally.
    pub fn multiply(&self, other: &CubieCube) -> CubieCube {
        let mut cp = [0u8; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[other.cp[i] as usize];
            co[i] = (self.co[other.cp[i] as usize] + other.co[i]) % 3;
        }
        let mut ep = [0u8; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[other.ep[i] as usize];
            eo[i] = (self.eo[other.ep[i] as usize] + other.eo[i]) % 2;
        }
        CubieCube { cp, co, ep, eo }
    }

    fn corner_used_mask(&self) -> u8 {
        self.cp.iter().fold(0u8, |acc, &c| acc | (1 << c))
    }

    fn edge_used_mask(&self) -> u16 {
        self.ep.iter().fold(0u16, |acc, &e| acc | (1 << e))
    }

    fn corner_parity(&self) -> bool {
        num_inversions(&self.cp) % 2 != 0
    }

    fn edge_parity(&self) -> bool {
        num_inversions(&self.ep) % 2 != 0
    }

    /// Checks the five solvability invariants from the cube model: each
    /// piece used exactly once, orientations in range and summing to zero
    /// mod their respective modulus, and matching corner/edge parity.
    pub fn is_solvable(&self) -> bool {
        if self.corner_used_mask() != 0b1111_1111 {
            return false;
        }
        if self.edge_used_mask() != 0b1111_1111_1111 {
            return false;
        }
        if self.co.iter().any(|&c| c > 2) {
            return false;
        }
        if self.co.iter().map(|&c| c as u32).sum::<u32>() % 3 != 0 {
            return false;
        }
        if self.eo.iter().any(|&e| e > 1) {
            return false;
        }
        if self.eo.iter().map(|&e| e as u32).sum::<u32>() % 2 != 0 {
            return false;
        }
        self.corner_parity() == self.edge_parity()
    }
}

/// The piece-level effect of a single move, obtained by turning a solved
/// facelet cube once and decoding the result. This is the authoritative
/// definition of how a move transforms `(cp, co, ep, eo)`: composing any
/// state `s` with `move_cubie(m)` via [`CubieCube::multiply`] produces the
/// state after applying `m` to `s`.
pub fn move_cubie(m: Move) -> CubieCube {
    let mut fc = FaceCube::solved();
    fc.apply(m);
    CubieCube::try_from(&fc).expect("a single move on a solved cube is always decodable")
}

lazy_static! {
    /// The 18 per-move piece-level effect records, indexed by [`Move::index`].
    pub static ref MOVE_CUBIES: [CubieCube; 18] = {
        let mut table = [CubieCube::solved(); 18];
        for &m in &ALL_MOVES {
            table[m.index()] = move_cubie(m);
        }
        table
    };
}

fn num_inversions(perm: &[u8]) -> usize {
    let mut count = 0;
    for i in 0..perm.len() {
        for j in (i + 1)..perm.len() {
            if perm[i] > perm[j] {
                count += 1;
            }
        }
    }
    count
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    /// Decodes facelets into piece identity and orientation by matching
    /// each corner's/edge's color set against the canonical color triples
    /// and pairs in [`CORNER_COLOR`]/[`EDGE_COLOR`].
    fn try_from(fc: &FaceCube) -> Result<CubieCube, Error> {
        let mut cp = [0u8; 8];
        let mut co = [0u8; 8];
        for (i, &facelets) in CORNER_FACELET.iter().enumerate() {
            let colors: [Color; 3] = [
                fc.facelets[facelets[0]],
                fc.facelets[facelets[1]],
                fc.facelets[facelets[2]],
            ];
            let (corner, twist) = identify_corner(colors).ok_or(Error::InvalidFaceletValue)?;
            cp[i] = corner as u8;
            co[i] = twist;
        }
        let mut ep = [0u8; 12];
        let mut eo = [0u8; 12];
        for (i, &facelets) in EDGE_FACELET.iter().enumerate() {
            let colors: [Color; 2] = [fc.facelets[facelets[0]], fc.facelets[facelets[1]]];
            let (edge, flip) = identify_edge(colors).ok_or(Error::InvalidFaceletValue)?;
            ep[i] = edge as u8;
            eo[i] = flip;
        }
        Ok(CubieCube { cp, co, ep, eo })
    }
}

fn identify_corner(colors: [Color; 3]) -> Option<(Corner, u8)> {
    for (idx, &home) in CORNER_COLOR.iter().enumerate() {
        for twist in 0..3u8 {
            let rotated = [
                home[twist as usize % 3],
                home[(twist as usize + 1) % 3],
                home[(twist as usize + 2) % 3],
            ];
            if rotated == colors {
                return Some((ALL_CORNERS[idx], twist));
            }
        }
    }
    None
}

fn identify_edge(colors: [Color; 2]) -> Option<(Edge, u8)> {
    for (idx, &home) in EDGE_COLOR.iter().enumerate() {
        if home == colors {
            return Some((ALL_EDGES[idx], 0));
        }
        if home == [colors[1], colors[0]] {
            return Some((ALL_EDGES[idx], 1));
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_cube_is_solvable() {
        assert!(CubieCube::solved().is_solvable());
    }

    #[test]
    fn multiply_identity_is_noop() {
        let solved = CubieCube::solved();
        assert_eq!(solved.multiply(&solved), solved);
    }

    #[test]
    fn decode_solved_facelets() {
        let fc = FaceCube::solved();
        let cc = CubieCube::try_from(&fc).unwrap();
        assert_eq!(cc, CubieCube::solved());
    }

    #[test]
    fn move_cubies_are_solvable() {
        for &m in &ALL_MOVES {
            assert!(MOVE_CUBIES[m.index()].is_solvable());
        }
    }

    #[test]
    fn multiply_matches_facelet_application() {
        for &m in &[Move::U, Move::R3, Move::F2, Move::B, Move::L2] {
            let mut fc = FaceCube::solved();
            fc.apply(m);
            let expected = CubieCube::try_from(&fc).unwrap();
            let got = CubieCube::solved().multiply(&MOVE_CUBIES[m.index()]);
            assert_eq!(got, expected, "move {} mismatched", m);
        }
    }

    #[test]
    fn composing_two_moves_matches_sequential_application() {
        let mut fc = FaceCube::solved();
        fc.apply(Move::R);
        fc.apply(Move::U);
        let expected = CubieCube::try_from(&fc).unwrap();
        let after_r = CubieCube::solved().multiply(&MOVE_CUBIES[Move::R.index()]);
        let got = after_r.multiply(&MOVE_CUBIES[Move::U.index()]);
        assert_eq!(got, expected);
    }
}
