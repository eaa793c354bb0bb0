use thiserror::Error;

/// Errors produced while parsing or constructing cube state from external
/// representations. The search engine itself never returns an error: a
/// cube that fails [`crate::facelet::FaceCube::is_solvable`] or a search
/// that exhausts its move budget both surface as an empty solution instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid color character: {0}")]
    InvalidColor(char),

    #[error("invalid move string: {0:?}")]
    InvalidMove(String),

    #[error("facelet string must have exactly 54 characters, got {0}")]
    InvalidFaceletLength(usize),

    #[error("facelet string does not decode to a physical cube")]
    InvalidFaceletValue,
}
