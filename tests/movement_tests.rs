//! Move-generator integration tests.
//!
//! Movement is a pure ray walk: these tests pin down the range, blocking,
//! and boundary behavior, plus a couple of for-all properties.

use proptest::prelude::*;

use rust_tactics::{legal_moves, Board, Coord, Side, UnitKind, UnitStore, DIRECTIONS};

fn place(board: &mut Board, units: &mut UnitStore, kind: UnitKind, side: Side, pos: Coord) {
    let id = units.spawn(kind, side, pos);
    board.set(pos, Some(id));
}

// =============================================================================
// Range
// =============================================================================

/// A unit with range N on an empty board reaches exactly N cells along
/// every direction that the edge does not clip.
#[test]
fn test_range_n_reaches_n_cells_per_direction() {
    for range in 1..=4u32 {
        let board = Board::new(11, 11);
        let origin = Coord::new(5, 5);
        let moves = legal_moves(&board, origin, range);

        assert_eq!(moves.len(), 8 * range as usize);

        for dir in DIRECTIONS {
            let mut pos = origin;
            for _ in 0..range {
                pos = pos.offset(dir);
                assert!(moves.contains(&pos), "range {range} misses {pos}");
            }
            // One past range is out of reach.
            assert!(!moves.contains(&pos.offset(dir)));
        }
    }
}

/// Rays stop at the board edge immediately.
#[test]
fn test_edge_stops_rays() {
    let board = Board::new(6, 6);
    let moves = legal_moves(&board, Coord::new(5, 5), 3);

    // Only the W, NW, N rays survive from the far corner.
    assert_eq!(moves.len(), 9);
    assert!(moves.iter().all(|m| board.is_inside(*m)));
}

/// A wolf-range unit crosses the whole stock board when nothing blocks.
#[test]
fn test_long_range_spans_the_board() {
    let board = Board::new(6, 6);
    let moves = legal_moves(&board, Coord::new(0, 0), UnitKind::Wolf.stats().range);

    assert!(moves.contains(&Coord::new(5, 5)));
    assert!(moves.contains(&Coord::new(5, 0)));
    assert!(moves.contains(&Coord::new(0, 5)));
}

// =============================================================================
// Blocking
// =============================================================================

/// A unit one step along a direction zeroes that direction's contribution,
/// whichever side it belongs to.
#[test]
fn test_adjacent_blocker_kills_the_direction() {
    for side in [Side::Ally, Side::Enemy] {
        for dir in DIRECTIONS {
            let mut board = Board::new(9, 9);
            let mut units = UnitStore::new();
            let origin = Coord::new(4, 4);
            place(&mut board, &mut units, UnitKind::Skeleton, side, origin.offset(dir));

            let moves = legal_moves(&board, origin, 3);

            let mut pos = origin;
            for _ in 0..3 {
                pos = pos.offset(dir);
                assert!(
                    !moves.contains(&pos),
                    "blocked direction {dir} still yields {pos}"
                );
            }
            // The other 7 directions are untouched: 7 * 3 cells.
            assert_eq!(moves.len(), 21);
        }
    }
}

/// A blocker deeper along the ray truncates it there.
#[test]
fn test_mid_ray_blocker_truncates() {
    let mut board = Board::new(9, 9);
    let mut units = UnitStore::new();
    place(&mut board, &mut units, UnitKind::Skeleton, Side::Enemy, Coord::new(6, 4));

    let moves = legal_moves(&board, Coord::new(4, 4), 3);

    assert!(moves.contains(&Coord::new(5, 4)));
    assert!(!moves.contains(&Coord::new(6, 4))); // the blocker itself
    assert!(!moves.contains(&Coord::new(7, 4))); // beyond it
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// For all origins and ranges on an empty board: destinations are
    /// in bounds, distinct, and never the origin.
    #[test]
    fn prop_moves_in_bounds_distinct_never_origin(
        x in 0..6i32,
        y in 0..6i32,
        range in 1..12u32,
    ) {
        let board = Board::new(6, 6);
        let origin = Coord::new(x, y);
        let moves = legal_moves(&board, origin, range);

        prop_assert!(!moves.contains(&origin));
        for m in &moves {
            prop_assert!(board.is_inside(*m));
        }
        let distinct: std::collections::HashSet<_> = moves.iter().collect();
        prop_assert_eq!(distinct.len(), moves.len());
    }

    /// For all boards with one blocker: no destination lies on or behind
    /// the blocker along its ray.
    #[test]
    fn prop_blocker_shadows_its_ray(dir_idx in 0..8usize, dist in 1..4i32, range in 1..8u32) {
        let mut board = Board::new(9, 9);
        let mut units = UnitStore::new();
        let origin = Coord::new(4, 4);
        let dir = DIRECTIONS[dir_idx];

        let mut blocker_pos = origin;
        for _ in 0..dist {
            blocker_pos = blocker_pos.offset(dir);
        }
        place(&mut board, &mut units, UnitKind::Elephant, Side::Ally, blocker_pos);

        let moves = legal_moves(&board, origin, range);

        let mut pos = blocker_pos;
        while board.is_inside(pos) {
            prop_assert!(!moves.contains(&pos));
            pos = pos.offset(dir);
        }
    }
}
