//! Unit archetypes - the static stat table.
//!
//! Archetypes differ only in data (attack, health, movement range), so they
//! are rows of one table keyed by `UnitKind` rather than a type per
//! archetype. `Unit::new` is the single factory that stamps a row onto an
//! instance.

use serde::{Deserialize, Serialize};

/// Archetype tag. Discriminants index into [`ARCHETYPES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Skeleton,
    Camel,
    Elephant,
    SkeletonKing,
    Wolf,
}

/// Static base stats for one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub kind: UnitKind,
    /// Display name, also the visual asset key for the presentation layer.
    pub name: &'static str,
    pub attack: i32,
    pub health: i32,
    /// Maximum ray length in cells.
    pub range: u32,
}

/// The full roster, one row per `UnitKind`, in discriminant order.
pub const ARCHETYPES: [Archetype; 5] = [
    Archetype {
        kind: UnitKind::Skeleton,
        name: "skeleton",
        attack: 1,
        health: 3,
        range: 1,
    },
    Archetype {
        kind: UnitKind::Camel,
        name: "camel",
        attack: 2,
        health: 3,
        range: 2,
    },
    Archetype {
        kind: UnitKind::Elephant,
        name: "elephant",
        attack: 3,
        health: 6,
        range: 2,
    },
    Archetype {
        kind: UnitKind::SkeletonKing,
        name: "skeleton_king",
        attack: 2,
        health: 2,
        range: 1,
    },
    Archetype {
        kind: UnitKind::Wolf,
        name: "wolf",
        attack: 3,
        health: 4,
        range: 10,
    },
];

impl UnitKind {
    /// All archetype tags, in table order.
    pub const ALL: [UnitKind; 5] = [
        UnitKind::Skeleton,
        UnitKind::Camel,
        UnitKind::Elephant,
        UnitKind::SkeletonKing,
        UnitKind::Wolf,
    ];

    /// The static stats for this archetype.
    ///
    /// ```
    /// use rust_tactics::units::UnitKind;
    ///
    /// let wolf = UnitKind::Wolf.stats();
    /// assert_eq!(wolf.attack, 3);
    /// assert_eq!(wolf.range, 10);
    /// ```
    #[must_use]
    pub const fn stats(self) -> Archetype {
        ARCHETYPES[self as usize]
    }

    /// Display name / asset key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.stats().name
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
