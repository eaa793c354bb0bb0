//! End-to-end scenarios exercising the public solving API against
//! increasingly deep scrambles.

use twophase::{solve, FaceCube, Move};

fn solved_and_scrambled(moves: &[Move]) -> FaceCube {
    let mut c = FaceCube::solved();
    c.apply_all(moves);
    c
}

fn assert_solves(c: &FaceCube) {
    let solution = solve(c);
    let mut after = *c;
    after.apply_all(&solution);
    assert!(after.is_solved(), "solution {:?} did not solve the cube", solution);
    assert!(solution.len() <= 31);
}

#[test]
fn scenario_a_already_solved() {
    let c = FaceCube::solved();
    assert!(solve(&c).is_empty());
    assert!(c.is_solved());
}

#[test]
fn scenario_b_three_move_scramble() {
    use Move::*;
    let c = solved_and_scrambled(&[U, R, U3]);
    assert_solves(&c);
}

#[test]
fn scenario_c_sexy_move() {
    use Move::*;
    let c = solved_and_scrambled(&[F, R, U, R3, U3, F3]);
    assert_solves(&c);
}

#[test]
fn scenario_d_eleven_move_scramble() {
    use Move::*;
    let c = solved_and_scrambled(&[R, U, R3, U3, F, U, F3, U3, L2, D, B]);
    assert_solves(&c);
}

#[test]
fn scenario_e_twenty_move_scramble_leaves_input_untouched() {
    use Move::*;
    let moves = [
        R, U, R3, U3, F2, L2, D, B2, U2, R2, F3, L, D3, B, U, R, F3, D2, L3, B2,
    ];
    let c = solved_and_scrambled(&moves);
    assert!(c.is_solvable());
    let before = c;
    assert_solves(&c);
    assert_eq!(before, c, "solve must not mutate its input");
}

#[test]
fn scenario_f_sticker_swap_is_unsolvable() {
    let mut c = FaceCube::solved();
    let mut state = c.state();
    state.swap(0, 36); // swap a U sticker with a F sticker
    c.set_state(state);
    assert!(!c.is_solvable());
    assert!(solve(&c).is_empty());
}
