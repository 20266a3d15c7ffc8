//! Unit instances - runtime combat state.
//!
//! A `Unit` is one combat entity on the board: an archetype row stamped
//! with a side and a position, plus the mutable health it accumulates over
//! the battle. Instances are owned by [`UnitStore`](super::UnitStore);
//! everything else refers to them through `UnitId` handles and re-validates
//! before use.

use serde::{Deserialize, Serialize};

use super::archetype::UnitKind;
use crate::core::{Coord, Side};

/// Handle to a unit in the store.
///
/// Handles held outside the store (selection, attack-queue entries) are
/// non-owning back-references: the unit may have died since the handle was
/// captured, so look it up again before acting on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A combat entity.
///
/// `attack` and `range` stay at their archetype base values for the whole
/// battle; `health` goes down under fire and is deliberately not clamped at
/// zero, so the final blow's overkill is visible to the presentation layer.
/// `pos` mirrors the tile that holds this unit's handle - the board is the
/// source of truth for occupancy, and the two are kept in lockstep by the
/// move/death paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub side: Side,
    pub pos: Coord,
    pub attack: i32,
    pub health: i32,
    pub range: u32,
}

impl Unit {
    /// Stamp an archetype row into an instance.
    ///
    /// The single factory for all archetypes - stats come from the static
    /// table, never from per-kind code.
    #[must_use]
    pub fn new(id: UnitId, kind: UnitKind, side: Side, pos: Coord) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            side,
            pos,
            attack: stats.attack,
            health: stats.health,
            range: stats.range,
        }
    }

    /// Whether this unit has been dropped to zero or below.
    ///
    /// Dead units are off the board but remain readable in the store; see
    /// `UnitStore`.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
