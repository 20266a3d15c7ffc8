//! The attack-queue drain state machine.
//!
//! Events resolve strictly one at a time, front of queue first. The cycle
//! for each event is: rest for [`ATTACK_DELAY_MS`], pop the next event
//! whose defender is still alive (stale events are discarded without
//! animating), animate for [`ATTACK_ANIMATION_MS`] applying damage once
//! past the midpoint, then rest again. When the queue runs dry the
//! machine reports [`CombatStatus::Drained`] and the turn controller takes
//! over.
//!
//! `CombatState` owns no units and no board - both are borrowed per tick,
//! which keeps the state a plain value inside `TurnState`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::animation::{ATTACK_ANIMATION_MS, ATTACK_DELAY_MS, STRIKE_POINT};
use super::event::AttackEvent;
use crate::board::Board;
use crate::events::{EventLog, GameEvent};
use crate::units::UnitStore;

/// Result of one drain tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatStatus {
    /// Events remain queued or in flight.
    InProgress,
    /// Queue exhausted and nothing animating; hand the turn over.
    Drained,
}

/// The event currently animating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveAttack {
    pub event: AttackEvent,
    /// Animation progress fraction; may exceed 1.0 on a coarse final tick.
    pub progress: f32,
}

/// Per-turn combat resolution state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CombatState {
    pending: VecDeque<AttackEvent>,
    current: Option<ActiveAttack>,
    animation_left: f32,
    delay_left: f32,
}

impl CombatState {
    /// Create an idle combat state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a freshly built queue at phase entry.
    ///
    /// Counters start at zero, so the first tick begins with the standard
    /// inter-event delay before the first attack.
    pub fn begin(&mut self, queue: VecDeque<AttackEvent>) {
        self.pending = queue;
        self.current = None;
        self.animation_left = 0.0;
        self.delay_left = 0.0;
    }

    /// Events still waiting (not counting the one in flight).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// The event currently animating, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ActiveAttack> {
        self.current.as_ref()
    }

    /// Whether an attack animation is mid-flight this tick.
    ///
    /// False during the inter-event delay, when the attacker has snapped
    /// back to its cell.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.current.is_some() && self.animation_left > 0.0
    }

    /// Whether nothing is queued or in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.current.is_none()
    }

    /// Advance the drain by `dt_ms`.
    ///
    /// Mutates unit health and board occupancy when a strike lands.
    /// Returns [`CombatStatus::Drained`] on the tick the queue is found
    /// exhausted; the caller flips the phase then.
    pub fn tick(
        &mut self,
        dt_ms: f32,
        board: &mut Board,
        units: &mut UnitStore,
        events: &mut EventLog,
    ) -> CombatStatus {
        // An animation just finished (or the phase was just entered):
        // the attacker rests at its cell for the inter-event delay.
        if self.animation_left <= 0.0 && self.delay_left <= 0.0 {
            self.delay_left = ATTACK_DELAY_MS;
        }

        if self.delay_left > 0.0 {
            self.delay_left -= dt_ms;
            if self.delay_left <= 0.0 {
                self.current = None;

                // Pop until an event with a live defender surfaces. Only
                // the defender is checked: an attacker that died earlier
                // in this drain still gets its licks in.
                while let Some(event) = self.pending.pop_front() {
                    if units.is_alive(event.defender) {
                        self.current = Some(ActiveAttack {
                            event,
                            progress: 0.0,
                        });
                        break;
                    }
                    trace!(
                        attacker = event.attacker.raw(),
                        defender = event.defender.raw(),
                        "skipping attack on dead defender"
                    );
                }

                match self.current {
                    Some(active) => {
                        self.animation_left = ATTACK_ANIMATION_MS;
                        events.push(GameEvent::AttackStarted {
                            attacker: active.event.attacker,
                            defender: active.event.defender,
                        });
                    }
                    None => return CombatStatus::Drained,
                }
            }
        }

        if self.animation_left > 0.0 {
            self.animation_left -= dt_ms;

            if let Some(active) = &mut self.current {
                active.progress = 1.0 - self.animation_left / ATTACK_ANIMATION_MS;

                if active.progress > STRIKE_POINT && !active.event.struck {
                    active.event.struck = true;
                    strike(active.event, board, units, events);
                }
            }
        }

        CombatStatus::InProgress
    }
}

/// Apply one event's damage and run the death check.
fn strike(event: AttackEvent, board: &mut Board, units: &mut UnitStore, events: &mut EventLog) {
    let Some(attacker) = units.get(event.attacker) else {
        debug_assert!(false, "attack event holds unknown attacker {}", event.attacker);
        return;
    };
    let damage = attacker.attack;

    let Some(defender) = units.get_mut(event.defender) else {
        debug_assert!(false, "attack event holds unknown defender {}", event.defender);
        return;
    };

    defender.health -= damage;
    let health_after = defender.health;
    let at = defender.pos;

    trace!(
        attacker = event.attacker.raw(),
        defender = event.defender.raw(),
        damage,
        health_after,
        "strike landed"
    );
    events.push(GameEvent::UnitStruck {
        attacker: event.attacker,
        defender: event.defender,
        damage,
        health_after,
    });

    // Removal runs in the same logical step as the damage that killed.
    if health_after <= 0 {
        debug_assert_eq!(board.get(at), Some(event.defender));
        board.set(at, None);
        debug!(unit = event.defender.raw(), at = %at, "unit died");
        events.push(GameEvent::UnitDied {
            unit: event.defender,
            at,
        });
    }
}
