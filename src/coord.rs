//! Pure encode/decode functions between piece-level arrays and the six
//! scalar coordinates the search engine works with, plus the process-wide
//! transition tables giving the coordinate after each move.
//!
//! Every decoder here produces *a* cubie state consistent with the given
//! coordinate (other components left at identity); it exists only to
//! synthesize probe states while building the transition tables below, not
//! to reconstruct search state mid-search.

use lazy_static::lazy_static;

use crate::constants::{N_CO, N_CP, N_EO, N_EP, N_SLICE, N_SP, PHASE2_MOVES};
use crate::cubie::{CubieCube, MOVE_CUBIES};
use crate::moves::ALL_MOVES;

fn factorial(n: usize) -> u32 {
    (1..=n as u32).product()
}

/// The binomial coefficient C(n, k), computed without intermediate
/// factorials large enough to overflow.
fn choose(n: usize, k: usize) -> u32 {
    if k > n {
        return 0;
    }
    let mut result = 1u32;
    for i in 0..k {
        result = result * (n - i) as u32 / (i + 1) as u32;
    }
    result
}

/// Corner orientation coordinate: base-3 digits of `co[0..6]`, MSB first.
pub fn co_coord(co: &[u8; 8]) -> u16 {
    co[0..7].iter().fold(0u16, |acc, &d| acc * 3 + d as u16)
}

/// Inverse of [`co_coord`]: the eighth orientation is whatever brings the
/// sum to zero mod 3.
pub fn co_decode(mut coord: u16) -> [u8; 8] {
    let mut co = [0u8; 8];
    for i in (0..7).rev() {
        co[i] = (coord % 3) as u8;
        coord /= 3;
    }
    let sum: u16 = co[0..7].iter().map(|&c| c as u16).sum();
    co[7] = ((3 - (sum % 3)) % 3) as u8;
    co
}

/// Edge orientation coordinate: base-2 digits of `eo[0..10]`, MSB first.
pub fn eo_coord(eo: &[u8; 12]) -> u16 {
    eo[0..11].iter().fold(0u16, |acc, &d| acc * 2 + d as u16)
}

/// Inverse of [`eo_coord`]: the twelfth flip is whatever brings the sum to
/// zero mod 2.
pub fn eo_decode(mut coord: u16) -> [u8; 12] {
    let mut eo = [0u8; 12];
    for i in (0..11).rev() {
        eo[i] = (coord & 1) as u8;
        coord >>= 1;
    }
    let sum: u16 = eo[0..11].iter().map(|&e| e as u16).sum();
    eo[11] = (sum % 2) as u8;
    eo
}

/// Combinatorial rank of which four of the twelve edge positions hold a
/// slice edge (piece identity 8..11). Scans positions from 11 down to 0.
pub fn slice_coord(ep: &[u8; 12]) -> u16 {
    let mut coord = 0u32;
    let mut k: i32 = 3;
    for i in (0..12).rev() {
        if ep[i] < 8 {
            coord += choose(i, k as usize);
        } else {
            if k == 0 {
                break;
            }
            k -= 1;
        }
    }
    coord as u16
}

/// Inverse of [`slice_coord`]: produces a representative edge permutation
/// with slice identities `8..11` in the ranked positions, in increasing
/// order, and the remaining positions filled with `0..7` in increasing
/// order.
pub fn slice_decode(coord: u16) -> [u8; 12] {
    const UNFILLED: u8 = 0xFF;
    let mut ep = [UNFILLED; 12];
    let mut coord = coord as u32;
    let mut k: i32 = 3;
    for i in (0..12).rev() {
        let binomial = choose(i, k as usize);
        if binomial > coord {
            ep[i] = 8 + k as u8;
            if k == 0 {
                break;
            }
            k -= 1;
        } else {
            coord -= binomial;
        }
    }
    let mut next_non_slice = 0u8;
    for slot in ep.iter_mut() {
        if *slot == UNFILLED {
            *slot = next_non_slice;
            next_non_slice += 1;
        }
    }
    ep
}

fn lehmer_encode(perm: &[u8]) -> u32 {
    let n = perm.len();
    let mut coord = 0u32;
    for i in 0..n {
        let smaller_to_the_right = perm[i + 1..].iter().filter(|&&x| x < perm[i]).count() as u32;
        coord += smaller_to_the_right * factorial(n - 1 - i);
    }
    coord
}

fn lehmer_decode(coord: u32, n: usize) -> Vec<u8> {
    let mut available: Vec<u8> = (0..n as u8).collect();
    let mut remaining = coord;
    let mut perm = Vec::with_capacity(n);
    for i in 0..n {
        let f = factorial(n - 1 - i);
        let digit = (remaining / f) as usize;
        remaining %= f;
        perm.push(available.remove(digit));
    }
    perm
}

/// Corner permutation coordinate (Lehmer code, n=8).
pub fn cp_coord(cp: &[u8; 8]) -> u16 {
    lehmer_encode(cp) as u16
}

pub fn cp_decode(coord: u16) -> [u8; 8] {
    let v = lehmer_decode(coord as u32, 8);
    let mut cp = [0u8; 8];
    cp.copy_from_slice(&v);
    cp
}

/// Non-slice edge permutation coordinate, defined over `ep[0..8]` (Lehmer
/// code, n=8). Only meaningful once the cube has been reduced into G1.
pub fn ep_coord(ep: &[u8; 12]) -> u16 {
    lehmer_encode(&ep[0..8]) as u16
}

/// Inverse of [`ep_coord`]; fills the slice positions with the solved
/// slice edges `8..11`.
pub fn ep_decode(coord: u16) -> [u8; 12] {
    let v = lehmer_decode(coord as u32, 8);
    let mut ep = [0u8; 12];
    ep[0..8].copy_from_slice(&v);
    ep[8] = 8;
    ep[9] = 9;
    ep[10] = 10;
    ep[11] = 11;
    ep
}

/// Slice edge permutation coordinate, defined over `ep[8..12] - 8` (Lehmer
/// code, n=4).
pub fn sp_coord(ep: &[u8; 12]) -> u16 {
    let rel: Vec<u8> = ep[8..12].iter().map(|&e| e - 8).collect();
    lehmer_encode(&rel) as u16
}

/// Inverse of [`sp_coord`]; fills the non-slice positions with the solved
/// non-slice edges `0..7`.
pub fn sp_decode(coord: u16) -> [u8; 12] {
    let v = lehmer_decode(coord as u32, 4);
    let mut ep = [0u8; 12];
    for i in 0..8 {
        ep[i] = i as u8;
    }
    for (i, &e) in v.iter().enumerate() {
        ep[8 + i] = e + 8;
    }
    ep
}

fn build_co_table() -> Vec<[u16; 18]> {
    (0..N_CO)
        .map(|v| {
            let probe = CubieCube {
                cp: [0, 1, 2, 3, 4, 5, 6, 7],
                co: co_decode(v as u16),
                ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
                eo: [0; 12],
            };
            let mut row = [0u16; 18];
            for &m in &ALL_MOVES {
                let next = probe.multiply(&MOVE_CUBIES[m.index()]);
                row[m.index()] = co_coord(&next.co);
            }
            row
        })
        .collect()
}

fn build_eo_table() -> Vec<[u16; 18]> {
    (0..N_EO)
        .map(|v| {
            let probe = CubieCube {
                cp: [0, 1, 2, 3, 4, 5, 6, 7],
                co: [0; 8],
                ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
                eo: eo_decode(v as u16),
            };
            let mut row = [0u16; 18];
            for &m in &ALL_MOVES {
                let next = probe.multiply(&MOVE_CUBIES[m.index()]);
                row[m.index()] = eo_coord(&next.eo);
            }
            row
        })
        .collect()
}

fn build_slice_table() -> Vec<[u16; 18]> {
    (0..N_SLICE)
        .map(|v| {
            let probe = CubieCube {
                cp: [0, 1, 2, 3, 4, 5, 6, 7],
                co: [0; 8],
                ep: slice_decode(v as u16),
                eo: [0; 12],
            };
            let mut row = [0u16; 18];
            for &m in &ALL_MOVES {
                let next = probe.multiply(&MOVE_CUBIES[m.index()]);
                row[m.index()] = slice_coord(&next.ep);
            }
            row
        })
        .collect()
}

fn build_cp_table() -> Vec<[u16; 10]> {
    (0..N_CP)
        .map(|v| {
            let probe = CubieCube {
                cp: cp_decode(v as u16),
                co: [0; 8],
                ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
                eo: [0; 12],
            };
            let mut row = [0u16; 10];
            for (slot, &abs) in PHASE2_MOVES.iter().enumerate() {
                let m = ALL_MOVES[abs];
                let next = probe.multiply(&MOVE_CUBIES[m.index()]);
                row[slot] = cp_coord(&next.cp);
            }
            row
        })
        .collect()
}

fn build_ep_table() -> Vec<[u16; 10]> {
    (0..N_EP)
        .map(|v| {
            let probe = CubieCube {
                cp: [0, 1, 2, 3, 4, 5, 6, 7],
                co: [0; 8],
                ep: ep_decode(v as u16),
                eo: [0; 12],
            };
            let mut row = [0u16; 10];
            for (slot, &abs) in PHASE2_MOVES.iter().enumerate() {
                let m = ALL_MOVES[abs];
                let next = probe.multiply(&MOVE_CUBIES[m.index()]);
                row[slot] = ep_coord(&next.ep);
            }
            row
        })
        .collect()
}

fn build_sp_table() -> Vec<[u16; 10]> {
    (0..N_SP)
        .map(|v| {
            let probe = CubieCube {
                cp: [0, 1, 2, 3, 4, 5, 6, 7],
                co: [0; 8],
                ep: sp_decode(v as u16),
                eo: [0; 12],
            };
            let mut row = [0u16; 10];
            for (slot, &abs) in PHASE2_MOVES.iter().enumerate() {
                let m = ALL_MOVES[abs];
                let next = probe.multiply(&MOVE_CUBIES[m.index()]);
                row[slot] = sp_coord(&next.ep);
            }
            row
        })
        .collect()
}

lazy_static! {
    pub static ref CO_MOVE: Vec<[u16; 18]> = build_co_table();
    pub static ref EO_MOVE: Vec<[u16; 18]> = build_eo_table();
    pub static ref SLICE_MOVE: Vec<[u16; 18]> = build_slice_table();
    pub static ref CP_MOVE: Vec<[u16; 10]> = build_cp_table();
    pub static ref EP_MOVE: Vec<[u16; 10]> = build_ep_table();
    pub static ref SP_MOVE: Vec<[u16; 10]> = build_sp_table();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn co_round_trip() {
        for v in 0..N_CO {
            assert_eq!(co_coord(&co_decode(v as u16)), v as u16);
        }
    }

    #[test]
    fn eo_round_trip() {
        for v in 0..N_EO {
            assert_eq!(eo_coord(&eo_decode(v as u16)), v as u16);
        }
    }

    #[test]
    fn slice_round_trip() {
        for v in 0..N_SLICE {
            assert_eq!(slice_coord(&slice_decode(v as u16)), v as u16);
        }
    }

    #[test]
    fn cp_round_trip_exhaustive() {
        for v in 0..N_CP {
            assert_eq!(cp_coord(&cp_decode(v as u16)), v as u16);
        }
    }

    #[test]
    fn ep_round_trip_exhaustive() {
        for v in 0..N_EP {
            assert_eq!(ep_coord(&ep_decode(v as u16)), v as u16);
        }
    }

    #[test]
    fn sp_round_trip() {
        for v in 0..N_SP {
            assert_eq!(sp_coord(&sp_decode(v as u16)), v as u16);
        }
    }

    #[test]
    fn solved_cube_is_coordinate_zero_everywhere() {
        let solved = CubieCube::solved();
        assert_eq!(co_coord(&solved.co), 0);
        assert_eq!(eo_coord(&solved.eo), 0);
        assert_eq!(slice_coord(&solved.ep), 0);
        assert_eq!(cp_coord(&solved.cp), 0);
        assert_eq!(ep_coord(&solved.ep), 0);
        assert_eq!(sp_coord(&solved.ep), 0);
    }

    #[test]
    fn co_table_u_move_is_identity() {
        assert_eq!(CO_MOVE[0][crate::moves::Move::U.index()], 0);
    }

    #[test]
    fn slice_table_half_turns_preserve_zero() {
        for &m in &[
            crate::moves::Move::U2,
            crate::moves::Move::D2,
            crate::moves::Move::L2,
            crate::moves::Move::R2,
            crate::moves::Move::F2,
            crate::moves::Move::B2,
        ] {
            assert_eq!(SLICE_MOVE[0][m.index()], 0);
        }
    }
}
