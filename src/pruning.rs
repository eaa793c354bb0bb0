//! Breadth-first-search distance tables used as admissible lower bounds
//! during the two-phase search. Each table is built once, process-wide, by
//! BFS forward from the solved pair of coordinates.

use lazy_static::lazy_static;

use crate::constants::{N_CO, N_CP, N_EO, N_EP, N_SLICE, N_SP, PRUNE_UNVISITED};
use crate::coord::{CO_MOVE, CP_MOVE, EO_MOVE, EP_MOVE, SLICE_MOVE, SP_MOVE};

/// BFS over a pair of coordinates sharing the same move table width, from
/// `(0, 0)`, writing the distance into a flat `dim_a * dim_b` table indexed
/// `a * dim_b + b`. `num_moves` is the number of columns in each move table.
fn bfs_prune(
    move_a: &[impl AsRef<[u16]>],
    move_b: &[impl AsRef<[u16]>],
    dim_a: usize,
    dim_b: usize,
    num_moves: usize,
) -> Vec<u8> {
    let mut table = vec![PRUNE_UNVISITED; dim_a * dim_b];
    let mut frontier = vec![(0usize, 0usize)];
    table[0] = 0;
    let mut depth = 0u8;
    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for (a, b) in frontier {
            for mv in 0..num_moves {
                let na = move_a[a].as_ref()[mv] as usize;
                let nb = move_b[b].as_ref()[mv] as usize;
                let cell = na * dim_b + nb;
                if table[cell] == PRUNE_UNVISITED {
                    table[cell] = depth + 1;
                    next_frontier.push((na, nb));
                }
            }
        }
        frontier = next_frontier;
        depth += 1;
    }
    table
}

fn build_co_slice() -> Vec<u8> {
    bfs_prune(&CO_MOVE[..], &SLICE_MOVE[..], N_CO, N_SLICE, 18)
}

fn build_eo_slice() -> Vec<u8> {
    bfs_prune(&EO_MOVE[..], &SLICE_MOVE[..], N_EO, N_SLICE, 18)
}

fn build_cp_sp() -> Vec<u8> {
    bfs_prune(&CP_MOVE[..], &SP_MOVE[..], N_CP, N_SP, 10)
}

fn build_ep_sp() -> Vec<u8> {
    bfs_prune(&EP_MOVE[..], &SP_MOVE[..], N_EP, N_SP, 10)
}

lazy_static! {
    /// Minimum phase-1 moves to reach `(CO=0, SLICE=0)`, indexed `co * N_SLICE + slice`.
    pub static ref PRUNE_CO_SLICE: Vec<u8> = build_co_slice();
    /// Minimum phase-1 moves to reach `(EO=0, SLICE=0)`, indexed `eo * N_SLICE + slice`.
    pub static ref PRUNE_EO_SLICE: Vec<u8> = build_eo_slice();
    /// Minimum phase-2 moves to reach `(CP=0, SP=0)`, indexed `cp * N_SP + sp`.
    pub static ref PRUNE_CP_SP: Vec<u8> = build_cp_sp();
    /// Minimum phase-2 moves to reach `(EP=0, SP=0)`, indexed `ep * N_SP + sp`.
    pub static ref PRUNE_EP_SP: Vec<u8> = build_ep_sp();
}

/// Phase-1 admissible heuristic: the larger of the two partial-coordinate
/// distances.
pub fn phase1_heuristic(co: u16, eo: u16, slice: u16) -> u8 {
    let a = PRUNE_CO_SLICE[co as usize * N_SLICE + slice as usize];
    let b = PRUNE_EO_SLICE[eo as usize * N_SLICE + slice as usize];
    a.max(b)
}

/// Phase-2 admissible heuristic: the larger of the two partial-coordinate
/// distances.
pub fn phase2_heuristic(cp: u16, ep: u16, sp: u16) -> u8 {
    let a = PRUNE_CP_SP[cp as usize * N_SP + sp as usize];
    let b = PRUNE_EP_SP[ep as usize * N_SP + sp as usize];
    a.max(b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_pairs_have_zero_distance() {
        assert_eq!(PRUNE_CO_SLICE[0], 0);
        assert_eq!(PRUNE_EO_SLICE[0], 0);
        assert_eq!(PRUNE_CP_SP[0], 0);
        assert_eq!(PRUNE_EP_SP[0], 0);
    }

    #[test]
    fn every_cell_is_reachable() {
        assert!(PRUNE_CO_SLICE.iter().all(|&d| d != PRUNE_UNVISITED));
        assert!(PRUNE_EO_SLICE.iter().all(|&d| d != PRUNE_UNVISITED));
        assert!(PRUNE_CP_SP.iter().all(|&d| d != PRUNE_UNVISITED));
        assert!(PRUNE_EP_SP.iter().all(|&d| d != PRUNE_UNVISITED));
    }

    #[test]
    fn heuristic_is_zero_on_solved_state() {
        assert_eq!(phase1_heuristic(0, 0, 0), 0);
        assert_eq!(phase2_heuristic(0, 0, 0), 0);
    }
}
