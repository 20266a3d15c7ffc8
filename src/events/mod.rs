//! Engine events for the presentation layer.
//!
//! The engine never touches rendering primitives; instead it records what
//! happened each tick and the embedding loop drains the log, retiring
//! visual assets on `UnitDied`, updating health labels on `UnitStruck`,
//! and so on. Draining is the only consumption model - events are not
//! replayed or persisted.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Side};
use crate::units::UnitId;

/// Something observable that happened inside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A unit committed a legal move.
    UnitMoved {
        unit: UnitId,
        from: Coord,
        to: Coord,
    },
    /// An attack event left the queue and began animating.
    AttackStarted { attacker: UnitId, defender: UnitId },
    /// Damage landed (once per attack event, at the animation midpoint).
    UnitStruck {
        attacker: UnitId,
        defender: UnitId,
        damage: i32,
        health_after: i32,
    },
    /// A unit dropped to zero or below and left the board.
    UnitDied { unit: UnitId, at: Coord },
    /// The turn passed; `active` is the side that acts next.
    TurnPassed { active: Side },
}

/// Accumulates events until the presentation layer drains them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take everything recorded since the last drain.
    #[must_use]
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events without consuming them.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of undrained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether anything is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
