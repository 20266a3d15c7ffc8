//! Units: archetype definitions and per-battle instances.
//!
//! Mirrors the definition/instance split used for anything stat-bearing:
//! `Archetype` is the static row (base attack, health, movement range) keyed
//! by `UnitKind`; `Unit` is the mutable in-battle instance; `UnitStore`
//! allocates handles and owns the instances.

pub mod archetype;
pub mod store;
pub mod unit;

pub use archetype::{Archetype, UnitKind, ARCHETYPES};
pub use store::UnitStore;
pub use unit::{Unit, UnitId};
