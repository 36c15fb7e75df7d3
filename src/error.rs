//! Error types for the noughts crate
//!
//! Gameplay has no failure path by design: clicking an occupied cell, moving
//! after the game is over, or moving out of turn are silent no-ops, not
//! errors. The variants here cover the genuine failure surfaces — parsing
//! board strings, policy preconditions, and configuration validation.

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("no moves available: the board has no empty cells")]
    NoMovesAvailable,

    #[error("not signed in: a session requires an authenticated visitor")]
    NotSignedIn,
}

/// Result type alias for the noughts crate
pub type Result<T> = std::result::Result<T, Error>;
