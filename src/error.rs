//! Setup errors.
//!
//! Battle construction is the only fallible surface in the crate; once a
//! battle exists, every runtime failure mode is absorbed as a no-op or a
//! debug assertion.

use thiserror::Error;

use crate::core::Coord;

/// Why a `BattleBuilder` refused to build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("board dimensions {width}x{height} are degenerate")]
    BadDimensions { width: i32, height: i32 },

    #[error("layout places a unit out of bounds at {pos} on a {width}x{height} board")]
    OutOfBounds {
        pos: Coord,
        width: i32,
        height: i32,
    },

    #[error("layout places two units on {pos}")]
    Overlap { pos: Coord },
}
