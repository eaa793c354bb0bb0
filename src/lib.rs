//! # twophase
//! Crate for modeling and solving the 3x3x3 Rubik's cube with
//! [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).
//!
//! The cube is modeled at two levels: [`facelet::FaceCube`], a flat
//! 54-sticker array that is the only thing that knows how to turn a face,
//! and [`cubie::CubieCube`], the derived piece-level permutation and
//! orientation state the solver actually searches over. [`solver::solve`]
//! takes a [`facelet::FaceCube`] and returns the [`moves::Move`] sequence
//! that restores it to solved.

/// 3x3x3 cube size constants shared by the coordinate codec and the tables.
pub mod constants;

/// Module for encoding/decoding coordinates and building move tables.
pub mod coord;

/// Module for representing a cube on the cubie (piece) level.
pub mod cubie;

/// Error type returned by parsing and construction entry points.
pub mod error;

/// Module for representing a cube on the facelet (sticker) level.
pub mod facelet;

/// Module for representing a single face turn.
pub mod moves;

/// Module for building the pruning tables that bound the search.
pub mod pruning;

/// Module containing functions for scrambling and un-scrambling move lists.
pub mod scramble;

/// The two-phase search engine.
pub mod solver;

pub use error::Error;
pub use facelet::{Color, FaceCube};
pub use moves::Move;
pub use solver::{solve, solve_with, SolverProgress};
