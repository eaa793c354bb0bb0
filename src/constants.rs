//! Sizes and fixed orderings shared across the coordinate codec, the
//! transition tables and the pruning tables.

/// Number of distinct corner orientation coordinates (3^7).
pub const N_CO: usize = 2187;
/// Number of distinct edge orientation coordinates (2^11).
pub const N_EO: usize = 2048;
/// Number of distinct slice-edge-position coordinates (C(12,4)).
pub const N_SLICE: usize = 495;
/// Number of distinct corner permutation coordinates (8!).
pub const N_CP: usize = 40320;
/// Number of distinct (non-slice) edge permutation coordinates (8!).
pub const N_EP: usize = 40320;
/// Number of distinct slice edge permutation coordinates (4!).
pub const N_SP: usize = 24;

/// Total number of face turns.
pub const N_MOVE: usize = 18;
/// Number of moves usable once phase 1 has reduced the cube into G1.
pub const N_MOVE_PHASE2: usize = 10;

/// Absolute move indices (into the 18-move table) usable in phase 2, in
/// the order phase-2 tables index them: U, U', U2, D, D', D2, L2, R2, F2, B2.
pub const PHASE2_MOVES: [usize; N_MOVE_PHASE2] = [0, 1, 2, 3, 4, 5, 8, 11, 14, 17];

/// Maximum phase-1 depth searched before giving up.
pub const MAX_PHASE1_DEPTH: usize = 12;
/// Maximum total solution length (phase 1 + phase 2 moves).
pub const MAX_TOTAL_DEPTH: usize = 31;

/// Sentinel value marking an unvisited cell in a pruning table.
pub const PRUNE_UNVISITED: u8 = 0xFF;
