use std::str::FromStr;

use crate::error::Error;
use crate::moves::Move;

/// Parses a space-separated sequence of move strings, e.g. `"R U R' U'"`.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

/// Renders a move sequence back to its space-separated string form.
pub fn scramble_to_str(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn parses_space_separated_moves() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
    }

    #[test]
    fn renders_back_to_the_same_string() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(scramble_from_str("R U X").is_err());
    }
}
