//! # rust-tactics
//!
//! A turn-based grid combat engine for board-game-style strategy games.
//!
//! ## Design Principles
//!
//! 1. **Pure Logic Layer**: No rendering, no input polling, no asset
//!    loading. The embedding application owns the window and the frame
//!    loop; the engine owns the rules and the state.
//!
//! 2. **Frame-Driven**: All state transitions happen inside
//!    `Battle::update(input, dt)`, called once per tick with translated
//!    pointer input and an elapsed-time delta. Single-threaded by design.
//!
//! 3. **Handles Over References**: Selection and queued attacks hold
//!    `UnitId` handles into the unit store, re-validated before use, so a
//!    unit dying mid-queue is a plain validity check rather than a
//!    dangling pointer.
//!
//! ## Architecture
//!
//! A turn cycles through two phases. In `Moving`, the pointer selects a
//! unit, legal destinations come from an 8-direction ray walk, and a
//! committed move mutates the board. The board is then scanned for
//! adjacency between the mover's side and the opposing side; every
//! resulting (attacker, defender) pair is queued, and `AnimatingAttack`
//! drains the queue one timed lunge at a time, applying damage at each
//! animation's midpoint and removing the dead. When the queue is dry the
//! phase returns to `Moving` with the other side active.
//!
//! ## Modules
//!
//! - `core`: Coordinates, the 8 compass directions, continuous board
//!   space, sides
//! - `board`: The fixed tile lattice and occupancy
//! - `units`: Archetype stat table, unit instances, the unit store
//! - `movement`: Legal-move generation (pure ray walk)
//! - `combat`: Attack events, the adjacency scan, the timed drain
//! - `turn`: Phase state machine, selection sub-state, side handoff
//! - `battle`: The facade tying it together, plus setup via
//!   `BattleBuilder`
//! - `events`: Engine events drained by the presentation layer
//! - `error`: Setup errors

pub mod battle;
pub mod board;
pub mod combat;
pub mod core;
pub mod error;
pub mod events;
pub mod movement;
pub mod turn;
pub mod units;

// Re-export commonly used types
pub use crate::core::{Coord, Side, Vec2, DIRECTIONS};

pub use crate::board::Board;

pub use crate::units::{Archetype, Unit, UnitId, UnitKind, UnitStore, ARCHETYPES};

pub use crate::movement::{legal_moves, legal_moves_for};

pub use crate::combat::{
    build_attack_queue, lunge_pos, lunge_travel, ActiveAttack, AttackEvent, CombatState,
    CombatStatus, ATTACK_ANIMATION_MS, ATTACK_DELAY_MS, LUNGE_REACH, STRIKE_POINT,
};

pub use crate::turn::{SelectionState, TurnPhase, TurnState};

pub use crate::battle::{Battle, BattleBuilder, InputFrame, Placement, DRAG_THRESHOLD};

pub use crate::events::{EventLog, GameEvent};

pub use crate::error::SetupError;
