//! The battle facade.
//!
//! `Battle` owns the board, the unit store, the turn state, and the event
//! log, and exposes the whole engine surface the embedding layer needs:
//!
//! - `update(input, dt)` once per frame with translated pointer input
//! - read-only getters for rendering (positions, stats, hints, phase)
//! - `drain_events()` for retiring visuals and updating labels
//!
//! Pointer handling implements the selection sub-machine: press selects,
//! drag or a second click moves, a move onto an occupied cell re-targets
//! the selection, a confirmed second click on the selected unit deselects.
//! All of it is gated on the `Moving` phase - while the attack queue
//! drains, pointer edges are tracked but act on nothing.

pub mod builder;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::Board;
use crate::combat::{lunge_pos, ActiveAttack, CombatStatus};
use crate::core::{Coord, Side, Vec2};
use crate::events::{EventLog, GameEvent};
use crate::movement;
use crate::turn::{TurnPhase, TurnState};
use crate::units::{Unit, UnitId, UnitStore};

pub use builder::{BattleBuilder, Placement};

/// How far the cursor must travel from the press point, in cell units,
/// before the gesture counts as a drag rather than a click.
pub const DRAG_THRESHOLD: f32 = 0.1;

/// One frame of translated pointer input.
///
/// The input collaborator translates device coordinates into continuous
/// board space and reports button edges; the engine does the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Cursor position in cell units.
    pub cursor: Vec2,
    /// Button went down this frame.
    pub pressed: bool,
    /// Button went up this frame.
    pub released: bool,
}

impl InputFrame {
    /// A frame with no button activity.
    #[must_use]
    pub fn hover(cursor: Vec2) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// A press edge at `cursor`.
    #[must_use]
    pub fn press(cursor: Vec2) -> Self {
        Self {
            cursor,
            pressed: true,
            released: false,
        }
    }

    /// A release edge at `cursor`.
    #[must_use]
    pub fn release(cursor: Vec2) -> Self {
        Self {
            cursor,
            pressed: false,
            released: true,
        }
    }
}

/// A full game of turn-based grid combat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Battle {
    pub(crate) board: Board,
    pub(crate) units: UnitStore,
    pub(crate) turn: TurnState,
    pub(crate) events: EventLog,
}

impl Battle {
    // === Frame tick ===

    /// Advance the engine by one frame.
    ///
    /// Pointer edges are consumed first (acting only during `Moving`),
    /// then the attack queue drains by `dt_ms` if the battle is in
    /// `AnimatingAttack`.
    pub fn update(&mut self, input: &InputFrame, dt_ms: f32) {
        self.handle_pointer(input);

        if self.turn.phase == TurnPhase::AnimatingAttack {
            let status =
                self.turn
                    .combat
                    .tick(dt_ms, &mut self.board, &mut self.units, &mut self.events);
            if status == CombatStatus::Drained {
                self.turn.finish_combat(&mut self.events);
            }
        }

        self.debug_validate();
    }

    // === Presentation getters ===

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.board.width()
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.board.height()
    }

    /// Read-only board access.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only unit store access.
    #[must_use]
    pub fn units(&self) -> &UnitStore {
        &self.units
    }

    /// Look up a unit by handle.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id)
    }

    /// The occupant of a cell (out of bounds answers `None`).
    #[must_use]
    pub fn unit_at(&self, pos: Coord) -> Option<UnitId> {
        self.board.get(pos)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.turn.active_side
    }

    /// The currently selected unit, if any.
    #[must_use]
    pub fn selected(&self) -> Option<UnitId> {
        self.turn.selection.selected
    }

    /// Highlighted legal destinations for the current selection.
    #[must_use]
    pub fn move_hints(&self) -> &[Coord] {
        &self.turn.selection.hints
    }

    /// The attack event currently animating, if any.
    #[must_use]
    pub fn current_attack(&self) -> Option<&ActiveAttack> {
        self.turn.combat.current()
    }

    /// Where a unit should be drawn this frame, in cell units.
    ///
    /// The resting position is the unit's cell. While the unit is dragged
    /// it follows the cursor; while it is mid-lunge it follows the attack
    /// animation curve. `None` for unknown handles.
    #[must_use]
    pub fn render_pos(&self, id: UnitId) -> Option<Vec2> {
        let unit = self.units.get(id)?;

        let sel = &self.turn.selection;
        if sel.dragging && sel.selected == Some(id) {
            return Some(sel.drag_pos);
        }

        if self.turn.combat.is_animating() {
            if let Some(active) = self.turn.combat.current() {
                if active.event.attacker == id {
                    if let Some(defender) = self.units.get(active.event.defender) {
                        return Some(lunge_pos(
                            unit.pos,
                            defender.pos,
                            active.progress.min(1.0),
                        ));
                    }
                }
            }
        }

        Some(unit.pos.as_vec2())
    }

    /// Take everything that happened since the last drain.
    #[must_use]
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Pointer handling ===

    /// Track button edges every frame; act on them only while `Moving`.
    ///
    /// Edge bookkeeping must run in every phase so a release that lands
    /// mid-drain does not leave the button latched down.
    fn handle_pointer(&mut self, input: &InputFrame) {
        let cell = input
            .cursor
            .to_cell(self.board.width(), self.board.height());

        if input.pressed && !self.turn.selection.button_down {
            self.turn.selection.button_down = true;
            if self.turn.phase == TurnPhase::Moving {
                self.on_press(cell, input.cursor);
            }
        }

        if self.turn.phase == TurnPhase::Moving
            && self.turn.selection.button_down
            && self.turn.selection.selected.is_some()
        {
            let sel = &mut self.turn.selection;
            if !sel.dragging && input.cursor.dist(sel.press_pos) > DRAG_THRESHOLD {
                sel.dragging = true;
            }
            if sel.dragging {
                sel.drag_pos = input.cursor;
            }
        }

        if input.released && self.turn.selection.button_down {
            self.turn.selection.button_down = false;
            if self.turn.phase == TurnPhase::Moving {
                self.on_release(cell);
            }
        }
    }

    fn on_press(&mut self, cell: Coord, cursor: Vec2) {
        self.turn.selection.dragging = false;
        let prev = self.turn.selection.selected;

        match self.board.get(cell) {
            Some(occupant) => {
                if prev == Some(occupant) {
                    // Second press on the selected unit routes through the
                    // move handler, which re-targets onto the occupant and
                    // banks one confirm click.
                    self.try_move(cell);
                } else {
                    let hints = self.hints_for(occupant);
                    self.turn.selection.select(occupant, cell, hints);
                    trace!(unit = occupant.raw(), at = %cell, "selected");
                }
                self.turn.selection.press_pos = cursor;
            }
            None => {
                if prev.is_some() {
                    self.try_move(cell);
                }
            }
        }
    }

    fn on_release(&mut self, cell: Coord) {
        if self.turn.selection.selected.is_none() {
            return;
        }

        if cell == self.turn.selection.clicked_cell {
            let sel = &mut self.turn.selection;
            sel.confirm_clicks += 1;
            sel.dragging = false;

            if sel.confirm_clicks > 1 {
                trace!("deselected by confirming click");
                sel.clear();
            }
        } else {
            self.try_move(cell);
        }
    }

    /// Attempt to move the selection to `dest`.
    ///
    /// Occupied destination: pure re-selection of the occupant (never a
    /// swap, never a capture). Illegal or out-of-bounds destination: clear
    /// the selection. Legal destination: mutate the board and advance the
    /// phase.
    fn try_move(&mut self, dest: Coord) {
        let Some(mover_id) = self.turn.selection.selected else {
            return;
        };

        if let Some(occupant) = self.board.get(dest) {
            let hints = self.hints_for(occupant);
            self.turn.selection.retarget(occupant, dest, hints);
            trace!(unit = occupant.raw(), at = %dest, "re-targeted selection");
            return;
        }

        let Some(mover) = self.units.get(mover_id) else {
            self.turn.selection.clear();
            return;
        };
        let (from, side) = (mover.pos, mover.side);
        let legal = self.board.is_inside(dest)
            && movement::legal_moves_for(mover, &self.board).contains(&dest);

        if legal {
            debug_assert_eq!(self.board.get(dest), None);
            self.board.set(from, None);
            self.board.set(dest, Some(mover_id));
            if let Some(unit) = self.units.get_mut(mover_id) {
                unit.pos = dest;
            }

            debug!(unit = mover_id.raw(), from = %from, to = %dest, "move committed");
            self.events.push(GameEvent::UnitMoved {
                unit: mover_id,
                from,
                to: dest,
            });

            self.turn
                .advance_after_move(side, &self.board, &self.units, &mut self.events);
        } else {
            self.turn.selection.clear();
        }
    }

    fn hints_for(&self, id: UnitId) -> Vec<Coord> {
        self.units
            .get(id)
            .map(|u| movement::legal_moves_for(u, &self.board))
            .unwrap_or_default()
    }

    /// Invariant checks, compiled out of release builds.
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        {
            let mut seen = std::collections::HashSet::new();
            for (pos, id) in self.board.occupants() {
                let unit = self.units.get(id).expect("board handle must resolve");
                assert_eq!(unit.pos, pos, "unit position out of sync with board");
                assert!(unit.health > 0, "dead unit still on the board");
                assert!(seen.insert(id), "unit occupies two tiles");
            }
            if self.turn.phase == TurnPhase::Moving {
                assert!(
                    self.turn.combat.is_idle(),
                    "attack queue alive outside the attack phase"
                );
            }
        }
    }
}
