//! Turn control: phase state machine, side handoff, selection sub-state.
//!
//! Two phases cycle forever - there is no terminal state:
//!
//! - `Moving`: a unit may be selected and moved. Committing a legal move
//!   builds the attack queue for the mover's side; a non-empty queue enters
//!   `AnimatingAttack`, an empty one passes the turn immediately.
//! - `AnimatingAttack`: the queue drains (see `combat::resolver`); when it
//!   runs dry the phase returns to `Moving` with the active side flipped.
//!
//! All of this state is one explicit `TurnState` value owned by `Battle`
//! and threaded through the update paths, so each operation's reads and
//! writes are visible in its signature.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::combat::{build_attack_queue, CombatState};
use crate::core::{Coord, Side, Vec2};
use crate::events::{EventLog, GameEvent};
use crate::units::{UnitId, UnitStore};

/// Which inputs and operations are currently accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for a move; selection input is live.
    Moving,
    /// The attack queue is draining; pointer input is ignored.
    AnimatingAttack,
}

/// Pointer-driven selection sub-state, live only during `Moving`.
///
/// `selected` is a non-owning handle; the update paths re-validate it
/// against the board before acting. `confirm_clicks` counts completed
/// clicks on the selected unit's own cell - the second one deselects.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected: Option<UnitId>,
    pub confirm_clicks: u32,
    /// Cell the press that established the selection landed on.
    pub clicked_cell: Coord,
    pub dragging: bool,
    /// Cursor position while dragging; the selected unit renders here.
    pub drag_pos: Vec2,
    /// Cursor position at press, for the drag threshold test.
    pub press_pos: Vec2,
    /// Tracks the held button across frames to pair press/release edges.
    pub button_down: bool,
    /// Cached legal-move hint set for the selected unit.
    pub hints: Vec<Coord>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: None,
            confirm_clicks: 0,
            clicked_cell: Coord::new(0, 0),
            dragging: false,
            drag_pos: Vec2::new(0.0, 0.0),
            press_pos: Vec2::new(0.0, 0.0),
            button_down: false,
            hints: Vec::new(),
        }
    }
}

impl SelectionState {
    /// Drop the selection and its hints.
    pub fn clear(&mut self) {
        self.selected = None;
        self.confirm_clicks = 0;
        self.dragging = false;
        self.hints.clear();
    }

    /// Re-target onto `unit` at `cell` with one confirm click banked
    /// (the press that re-targeted counts toward the deselect double-click).
    pub fn retarget(&mut self, unit: UnitId, cell: Coord, hints: Vec<Coord>) {
        self.selected = Some(unit);
        self.confirm_clicks = 1;
        self.clicked_cell = cell;
        self.dragging = false;
        self.hints = hints;
    }

    /// Fresh selection of `unit` at `cell`.
    pub fn select(&mut self, unit: UnitId, cell: Coord, hints: Vec<Coord>) {
        self.selected = Some(unit);
        self.confirm_clicks = 0;
        self.clicked_cell = cell;
        self.hints = hints;
    }
}

/// The complete turn-control state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnState {
    pub phase: TurnPhase,
    pub active_side: Side,
    pub selection: SelectionState,
    pub combat: CombatState,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Initial state: `Moving`, allies act first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::Moving,
            active_side: Side::Ally,
            selection: SelectionState::default(),
            combat: CombatState::new(),
        }
    }

    /// Phase advance after a committed legal move by a unit of
    /// `mover_side`.
    ///
    /// Builds the attack queue for the mover's side and clears the
    /// selection. A non-empty queue enters `AnimatingAttack`; an empty one
    /// means no combat this turn, and the turn passes on the spot.
    pub fn advance_after_move(
        &mut self,
        mover_side: Side,
        board: &Board,
        units: &UnitStore,
        events: &mut EventLog,
    ) {
        debug_assert_eq!(self.phase, TurnPhase::Moving);

        let queue = build_attack_queue(board, units, mover_side);
        self.selection.clear();

        if queue.is_empty() {
            self.pass_turn(events);
        } else {
            debug!(attacks = queue.len(), side = %mover_side, "entering attack phase");
            self.combat.begin(queue);
            self.phase = TurnPhase::AnimatingAttack;
        }
    }

    /// Return to `Moving` once the drain reports the queue exhausted.
    pub fn finish_combat(&mut self, events: &mut EventLog) {
        debug_assert_eq!(self.phase, TurnPhase::AnimatingAttack);
        debug_assert!(self.combat.is_idle());

        self.phase = TurnPhase::Moving;
        self.pass_turn(events);
    }

    fn pass_turn(&mut self, events: &mut EventLog) {
        self.active_side = self.active_side.opponent();
        debug!(side = %self.active_side, "turn passed");
        events.push(GameEvent::TurnPassed {
            active: self.active_side,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitKind;

    fn place(
        board: &mut Board,
        units: &mut UnitStore,
        kind: UnitKind,
        side: Side,
        pos: Coord,
    ) -> UnitId {
        let id = units.spawn(kind, side, pos);
        board.set(pos, Some(id));
        id
    }

    #[test]
    fn test_initial_state() {
        let turn = TurnState::new();
        assert_eq!(turn.phase, TurnPhase::Moving);
        assert_eq!(turn.active_side, Side::Ally);
        assert!(turn.selection.selected.is_none());
        assert!(turn.combat.is_idle());
    }

    #[test]
    fn test_move_without_adjacency_passes_turn() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();
        let mut events = EventLog::new();
        place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(0, 0));

        let mut turn = TurnState::new();
        turn.advance_after_move(Side::Ally, &board, &units, &mut events);

        // Empty queue: still Moving, side flipped immediately.
        assert_eq!(turn.phase, TurnPhase::Moving);
        assert_eq!(turn.active_side, Side::Enemy);
        assert!(turn.combat.is_idle());
        assert_eq!(
            events.drain(),
            vec![GameEvent::TurnPassed { active: Side::Enemy }]
        );
    }

    #[test]
    fn test_move_with_adjacency_enters_attack_phase() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();
        let mut events = EventLog::new();
        place(&mut board, &mut units, UnitKind::Camel, Side::Ally, Coord::new(2, 2));
        place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(3, 2));

        let mut turn = TurnState::new();
        turn.advance_after_move(Side::Ally, &board, &units, &mut events);

        assert_eq!(turn.phase, TurnPhase::AnimatingAttack);
        // The side flips only after the drain finishes.
        assert_eq!(turn.active_side, Side::Ally);
        assert_eq!(turn.combat.pending_count(), 1);
        assert!(events.drain().is_empty());
    }

    #[test]
    fn test_advance_clears_selection() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();
        let mut events = EventLog::new();
        let id = place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(0, 0));

        let mut turn = TurnState::new();
        turn.selection
            .select(id, Coord::new(0, 0), vec![Coord::new(1, 1)]);
        turn.advance_after_move(Side::Ally, &board, &units, &mut events);

        assert!(turn.selection.selected.is_none());
        assert!(turn.selection.hints.is_empty());
    }

    #[test]
    fn test_finish_combat_flips_side_and_phase() {
        let mut events = EventLog::new();
        let mut turn = TurnState::new();
        turn.phase = TurnPhase::AnimatingAttack;

        turn.finish_combat(&mut events);

        assert_eq!(turn.phase, TurnPhase::Moving);
        assert_eq!(turn.active_side, Side::Enemy);
        assert_eq!(
            events.drain(),
            vec![GameEvent::TurnPassed { active: Side::Enemy }]
        );
    }

    #[test]
    fn test_selection_clear_resets_click_count() {
        let mut sel = SelectionState::default();
        sel.select(UnitId::new(1), Coord::new(2, 2), vec![]);
        sel.confirm_clicks = 1;
        sel.dragging = true;

        sel.clear();

        assert!(sel.selected.is_none());
        assert_eq!(sel.confirm_clicks, 0);
        assert!(!sel.dragging);
    }
}
