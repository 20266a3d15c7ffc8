//! Attack events and the end-of-move adjacency scan.
//!
//! An `AttackEvent` is a one-shot intent: attacker strikes defender. It is
//! valid only until the defender dies - a defender killed by an earlier
//! event in the same queue turns later events against it into no-ops, which
//! the resolver skips. Only the defender is re-validated; an attacker that
//! died earlier in the drain still carries out its queued attacks.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Side;
use crate::units::{UnitId, UnitStore};

/// One queued (attacker, defender) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    pub attacker: UnitId,
    pub defender: UnitId,
    /// Set once damage has been applied. Lives on the event, not the unit:
    /// the same unit may be attacker in one event and defender in another
    /// within a single turn.
    pub struck: bool,
}

impl AttackEvent {
    /// Create a fresh, unresolved event.
    #[must_use]
    pub const fn new(attacker: UnitId, defender: UnitId) -> Self {
        Self {
            attacker,
            defender,
            struck: false,
        }
    }
}

/// Scan the board after a move by `acting` and build the attack queue.
///
/// Every unit of the acting side attacks every opposing unit in its
/// 8-neighborhood - many-to-many, not just the unit that moved. Events are
/// appended in board scan order (row-major) and, within one attacker, in
/// direction enumeration order, and the queue is never re-sorted
/// afterwards.
#[must_use]
pub fn build_attack_queue(
    board: &Board,
    units: &UnitStore,
    acting: Side,
) -> VecDeque<AttackEvent> {
    let mut queue = VecDeque::new();

    for (pos, id) in board.occupants() {
        let Some(unit) = units.get(id) else {
            debug_assert!(false, "board holds unknown handle {id}");
            continue;
        };
        if unit.side != acting {
            continue;
        }

        for neighbor in board.neighbors8(pos) {
            let Some(other_id) = board.get(neighbor) else {
                continue;
            };
            let Some(other) = units.get(other_id) else {
                debug_assert!(false, "board holds unknown handle {other_id}");
                continue;
            };
            if other.side.opposes(unit.side) {
                queue.push_back(AttackEvent::new(id, other_id));
            }
        }
    }

    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
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
    fn test_no_adjacency_no_events() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(0, 0));
        place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(5, 5));

        assert!(build_attack_queue(&board, &units, Side::Ally).is_empty());
    }

    #[test]
    fn test_adjacent_pair_single_event() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        let a = place(&mut board, &mut units, UnitKind::Camel, Side::Ally, Coord::new(2, 2));
        let e = place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(3, 3));

        let queue = build_attack_queue(&board, &units, Side::Ally);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0], AttackEvent::new(a, e));
    }

    #[test]
    fn test_only_acting_side_attacks() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        let a = place(&mut board, &mut units, UnitKind::Camel, Side::Ally, Coord::new(2, 2));
        let e = place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(3, 3));

        // Same board, enemy acted instead: the event points the other way.
        let queue = build_attack_queue(&board, &units, Side::Enemy);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0], AttackEvent::new(e, a));
    }

    #[test]
    fn test_adjacency_not_shared_along_a_row() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        // A - E - A in a row: each ally is adjacent to the one enemy.
        let a1 = place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(1, 0));
        let e = place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(2, 0));
        let a2 = place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(3, 0));

        let queue = build_attack_queue(&board, &units, Side::Ally);
        let pairs: Vec<_> = queue.iter().map(|ev| (ev.attacker, ev.defender)).collect();
        assert_eq!(pairs, vec![(a1, e), (a2, e)]);
    }

    #[test]
    fn test_one_attacker_many_defenders() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        let a = place(&mut board, &mut units, UnitKind::Elephant, Side::Ally, Coord::new(2, 2));
        let east = place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(3, 2));
        let north = place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(2, 1));

        let queue = build_attack_queue(&board, &units, Side::Ally);

        // One event per opposing neighbor, in direction order: E before N.
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0], AttackEvent::new(a, east));
        assert_eq!(queue[1], AttackEvent::new(a, north));
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        let e = place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(2, 2));
        // Two allies adjacent to it, one above, one below.
        let above = place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(2, 1));
        let below = place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(2, 3));

        let queue = build_attack_queue(&board, &units, Side::Ally);
        let attackers: Vec<_> = queue.iter().map(|ev| ev.attacker).collect();

        // Row-major scan visits the upper attacker first.
        assert_eq!(attackers, vec![above, below]);
        let _ = e;
    }

    #[test]
    fn test_friendly_adjacency_ignored() {
        let mut board = Board::new(6, 6);
        let mut units = UnitStore::new();

        place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(1, 1));
        place(&mut board, &mut units, UnitKind::Skeleton, Side::Ally, Coord::new(2, 2));

        assert!(build_attack_queue(&board, &units, Side::Ally).is_empty());
    }

    #[test]
    fn test_fresh_events_are_unstruck() {
        let ev = AttackEvent::new(UnitId::new(0), UnitId::new(1));
        assert!(!ev.struck);
    }
}
