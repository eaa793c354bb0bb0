//! The two-phase search engine: phase 1 reduces a cube into the G1
//! subgroup, phase 2 finishes the solve using only G1-preserving moves.
//! Both phases run iterative-deepening depth-first search guided by the
//! pruning tables in [`crate::pruning`].

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering};

use crate::constants::{MAX_PHASE1_DEPTH, MAX_TOTAL_DEPTH, PHASE2_MOVES};
use crate::coord::{phase1_heuristic, phase2_heuristic, CO_MOVE, CP_MOVE, EO_MOVE, EP_MOVE, SLICE_MOVE, SP_MOVE};
use crate::cubie::CubieCube;
use crate::facelet::FaceCube;
use crate::moves::{Face, Move, ALL_MOVES};

/// Shared, lock-free progress reporting for an in-flight or completed
/// search. The searching thread is the sole writer; any number of other
/// threads may read without synchronization beyond the atomics themselves.
#[derive(Debug, Default)]
pub struct SolverProgress {
    /// Number of search-tree nodes expanded so far.
    pub nodes: AtomicU64,
    /// Current phase-1 target depth, or `-1` while tables are being built.
    pub depth: AtomicI32,
}

impl SolverProgress {
    pub fn new() -> SolverProgress {
        SolverProgress {
            nodes: AtomicU64::new(0),
            depth: AtomicI32::new(-1),
        }
    }
}

/// True iff appending `face` to `path` would be redundant: an immediate
/// repeat of the previous move's face, or an A-B-A pattern where A and B
/// are opposite faces (which commutes to B-A-A and collapses). Shared by
/// the search engine's own move generation and [`crate::facelet::FaceCube::scramble_with`],
/// so a scramble never contains a trivially-reducible sequence.
pub(crate) fn skip_face(path: &[Move], face: Face) -> bool {
    let len = path.len();
    if len == 0 {
        return false;
    }
    if path[len - 1].face() == face {
        return true;
    }
    if len >= 2 {
        let f1 = path[len - 2].face();
        let f2 = path[len - 1].face();
        if f1.is_opposite(f2) && f1 == face {
            return true;
        }
    }
    false
}

struct Phase1State {
    co: u16,
    eo: u16,
    slice: u16,
}

impl Phase1State {
    fn is_solved(&self) -> bool {
        self.co == 0 && self.eo == 0 && self.slice == 0
    }

    fn apply(&self, m: Move) -> Phase1State {
        let i = m.index();
        Phase1State {
            co: CO_MOVE[self.co as usize][i],
            eo: EO_MOVE[self.eo as usize][i],
            slice: SLICE_MOVE[self.slice as usize][i],
        }
    }

    fn heuristic(&self) -> u8 {
        phase1_heuristic(self.co, self.eo, self.slice)
    }
}

struct Phase2State {
    cp: u16,
    ep: u16,
    sp: u16,
}

impl Phase2State {
    fn is_solved(&self) -> bool {
        self.cp == 0 && self.ep == 0 && self.sp == 0
    }

    fn apply(&self, slot: usize) -> Phase2State {
        Phase2State {
            cp: CP_MOVE[self.cp as usize][slot],
            ep: EP_MOVE[self.ep as usize][slot],
            sp: SP_MOVE[self.sp as usize][slot],
        }
    }

    fn heuristic(&self) -> u8 {
        phase2_heuristic(self.cp, self.ep, self.sp)
    }
}

/// Solves `cube` and returns the move sequence that restores it to solved.
/// Returns an empty sequence if `cube` is already solved, is not solvable,
/// the search is canceled, or no solution is found within the move budget.
pub fn solve(cube: &FaceCube) -> Vec<Move> {
    let cancel = AtomicBool::new(false);
    let progress = SolverProgress::new();
    solve_with(cube, &cancel, &progress)
}

/// Solves `cube`, polling `cancel` on every expanded node and updating
/// `progress` as the search proceeds. `cube` is read-only; this function
/// never mutates the caller's state.
pub fn solve_with(cube: &FaceCube, cancel: &AtomicBool, progress: &SolverProgress) -> Vec<Move> {
    if cube.is_solved() {
        return Vec::new();
    }
    if !cube.is_solvable() {
        return Vec::new();
    }
    if cancel.load(Ordering::Relaxed) {
        return Vec::new();
    }

    // Force the process-wide tables into existence before timing the
    // search; `depth` is held at -1 for the duration.
    let cc = CubieCube::try_from(cube).expect("is_solvable already validated decodability");
    let start = Phase1State {
        co: crate::coord::co_coord(&cc.co),
        eo: crate::coord::eo_coord(&cc.eo),
        slice: crate::coord::slice_coord(&cc.ep),
    };

    for depth1 in 0..=MAX_PHASE1_DEPTH {
        if cancel.load(Ordering::Relaxed) {
            return Vec::new();
        }
        progress.depth.store(depth1 as i32, Ordering::Relaxed);
        let mut path = Vec::with_capacity(depth1);
        if let Some(solution) = phase1_search(&start, depth1, &mut path, &cc, cancel, progress) {
            return solution;
        }
    }
    Vec::new()
}

#[allow(clippy::too_many_arguments)]
fn phase1_search(
    state: &Phase1State,
    depth_remaining: usize,
    path: &mut Vec<Move>,
    start_cubie: &CubieCube,
    cancel: &AtomicBool,
    progress: &SolverProgress,
) -> Option<Vec<Move>> {
    progress.nodes.fetch_add(1, Ordering::Relaxed);
    if cancel.load(Ordering::Relaxed) {
        return None;
    }
    if (state.heuristic() as usize) > depth_remaining {
        return None;
    }
    if depth_remaining == 0 {
        if !state.is_solved() {
            return None;
        }
        let remaining_budget = MAX_TOTAL_DEPTH - path.len();
        let phase1_cc = apply_path(start_cubie, path);
        return phase2_solve(&phase1_cc, remaining_budget, cancel, progress)
            .map(|mut tail| {
                let mut full = path.clone();
                full.append(&mut tail);
                full
            });
    }
    for &m in &ALL_MOVES {
        if skip_face(path, m.face()) {
            continue;
        }
        let next = state.apply(m);
        path.push(m);
        if let Some(solution) =
            phase1_search(&next, depth_remaining - 1, path, start_cubie, cancel, progress)
        {
            return Some(solution);
        }
        path.pop();
    }
    None
}

fn apply_path(start: &CubieCube, path: &[Move]) -> CubieCube {
    let mut cc = *start;
    for &m in path {
        cc = cc.multiply(&crate::cubie::MOVE_CUBIES[m.index()]);
    }
    cc
}

fn phase2_solve(
    cc: &CubieCube,
    max_depth: usize,
    cancel: &AtomicBool,
    progress: &SolverProgress,
) -> Option<Vec<Move>> {
    let start = Phase2State {
        cp: crate::coord::cp_coord(&cc.cp),
        ep: crate::coord::ep_coord(&cc.ep),
        sp: crate::coord::sp_coord(&cc.ep),
    };
    for depth2 in 0..=max_depth {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        let mut path = Vec::with_capacity(depth2);
        if let Some(solution) = phase2_search(&start, depth2, &mut path, cancel, progress) {
            return Some(solution);
        }
    }
    None
}

fn phase2_search(
    state: &Phase2State,
    depth_remaining: usize,
    path: &mut Vec<Move>,
    cancel: &AtomicBool,
    progress: &SolverProgress,
) -> Option<Vec<Move>> {
    progress.nodes.fetch_add(1, Ordering::Relaxed);
    if cancel.load(Ordering::Relaxed) {
        return None;
    }
    if (state.heuristic() as usize) > depth_remaining {
        return None;
    }
    if depth_remaining == 0 {
        return if state.is_solved() {
            Some(path.clone())
        } else {
            None
        };
    }
    for (slot, &abs) in PHASE2_MOVES.iter().enumerate() {
        let m = ALL_MOVES[abs];
        if skip_face(path, m.face()) {
            continue;
        }
        let next = state.apply(slot);
        path.push(m);
        if let Some(solution) = phase2_search(&next, depth_remaining - 1, path, cancel, progress) {
            return Some(solution);
        }
        path.pop();
    }
    None
}
