//! Legal-move generation.
//!
//! Pure rule queries over the board, no mutation: given a unit's cell and
//! movement range, which cells may it move to?
//!
//! Movement is a straight-line ray walk in each of the 8 compass
//! directions. A ray stops at the board edge, stops *before* any occupied
//! cell (units of either side block - there is no capture-by-move and no
//! passing through), and otherwise extends one empty cell per remaining
//! step of range.
//!
//! Enumeration order is deterministic (direction order, nearest cell
//! first), which keeps tests and hint rendering stable, but callers must
//! not attach meaning to it.

use crate::board::Board;
use crate::core::{Coord, DIRECTIONS};
use crate::units::Unit;

/// Legal destination cells for a unit standing at `origin` with the given
/// movement range.
///
/// Never yields `origin` itself, an occupied cell, or an out-of-bounds
/// cell.
#[must_use]
pub fn legal_moves(board: &Board, origin: Coord, range: u32) -> Vec<Coord> {
    let mut moves = Vec::new();
    for dir in DIRECTIONS {
        walk_ray(board, origin, dir, range, &mut moves);
    }
    moves
}

/// Convenience wrapper taking the unit itself.
#[must_use]
pub fn legal_moves_for(unit: &Unit, board: &Board) -> Vec<Coord> {
    legal_moves(board, unit.pos, unit.range)
}

/// Extend `out` with the reachable cells along one direction.
fn walk_ray(board: &Board, origin: Coord, dir: Coord, range: u32, out: &mut Vec<Coord>) {
    let mut pos = origin;
    let mut steps = range;

    while steps > 0 {
        pos = pos.offset(dir);
        if !board.is_inside(pos) {
            return;
        }
        if board.get(pos).is_some() {
            // Blocked: the occupied cell is not a destination and nothing
            // beyond it is reachable along this ray.
            return;
        }
        out.push(pos);
        steps -= 1;
    }
}
