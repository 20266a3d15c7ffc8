//! Unit storage and handle allocation.
//!
//! `UnitStore` owns every `Unit` in a battle and hands out `UnitId`s.
//! Lookups return `Option`, which is what makes stale handles held by the
//! selection or the attack queue a plain validity check rather than a
//! dangling reference.
//!
//! Dead units are NOT evicted: an attack event queued before its attacker
//! died still needs the attacker's stats to resolve. Removal-on-death is a
//! board operation; "on the board" is the liveness predicate, and
//! [`is_alive`](UnitStore::is_alive) combines both checks callers care
//! about.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::archetype::UnitKind;
use super::unit::{Unit, UnitId};
use crate::core::{Coord, Side};

/// Owner of all unit instances in a battle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UnitStore {
    units: FxHashMap<UnitId, Unit>,
    next_id: u32,
}

impl UnitStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a handle and create a unit from its archetype row.
    pub fn spawn(&mut self, kind: UnitKind, side: Side, pos: Coord) -> UnitId {
        let id = UnitId::new(self.next_id);
        self.next_id += 1;
        self.units.insert(id, Unit::new(id, kind, side, pos));
        id
    }

    /// Look up a unit. `None` means the handle never existed.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Look up a unit mutably.
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    /// Whether the handle resolves to a unit with health above zero.
    #[must_use]
    pub fn is_alive(&self, id: UnitId) -> bool {
        self.units.get(&id).is_some_and(|u| !u.is_dead())
    }

    /// Number of units ever spawned (dead included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the store holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over all units, dead included.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Iterate over units still in the fight.
    pub fn alive(&self) -> impl Iterator<Item = &Unit> {
        self.units.values().filter(|u| !u.is_dead())
    }
}
