//! The two opposing factions.
//!
//! Every unit belongs to a `Side`; the turn controller tracks which side
//! acts next and the combat scan pairs units of opposite sides.

use serde::{Deserialize, Serialize};

/// One of the two factions partitioning all units.
///
/// Turns alternate between sides; combat only ever pairs opposite sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    /// The opposing side.
    ///
    /// ```
    /// use rust_tactics::core::Side;
    ///
    /// assert_eq!(Side::Ally.opponent(), Side::Enemy);
    /// assert_eq!(Side::Enemy.opponent(), Side::Ally);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Ally => Side::Enemy,
            Side::Enemy => Side::Ally,
        }
    }

    /// Whether `other` is the opposing side.
    #[must_use]
    pub const fn opposes(self, other: Side) -> bool {
        !matches!(
            (self, other),
            (Side::Ally, Side::Ally) | (Side::Enemy, Side::Enemy)
        )
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ally => write!(f, "Ally"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}
