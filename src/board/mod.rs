//! The board: a fixed lattice of tiles.
//!
//! A tile is one addressable cell holding at most one unit handle. Tiles
//! are never created or destroyed after initialization - only their
//! occupant changes. The board is the single source of truth for "where is
//! unit X"; `Unit::pos` mirrors it and the mutating paths keep the two in
//! lockstep.
//!
//! The board does no legality checking: `set` places and clears whatever it
//! is told. Which destinations are legal is the movement module's business.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, DIRECTIONS};
use crate::units::UnitId;

/// Fixed-size 2D lattice of tiles, each holding `Option<UnitId>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major: index = y * width + x.
    tiles: Vec<Option<UnitId>>,
}

impl Board {
    /// Create an empty board. Dimensions are fixed for its lifetime.
    ///
    /// Panics on non-positive dimensions; degenerate sizes are rejected
    /// with a proper error at the `BattleBuilder` layer.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            tiles: vec![None; (width * height) as usize],
        }
    }

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bounds test against the fixed dimensions.
    #[must_use]
    pub fn is_inside(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: Coord) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    /// The occupant of a cell.
    ///
    /// Out-of-bounds coordinates answer `None`: ray walks and neighbor
    /// scans probe past the edges as a matter of course, and "absent" is
    /// the correct answer there, not an error.
    #[must_use]
    pub fn get(&self, pos: Coord) -> Option<UnitId> {
        if self.is_inside(pos) {
            self.tiles[self.index(pos)]
        } else {
            None
        }
    }

    /// Replace a cell's occupant; used for both placing and clearing.
    ///
    /// Panics out of bounds - every caller mutates cells it just validated,
    /// so an out-of-bounds write is a programmer error.
    pub fn set(&mut self, pos: Coord, occupant: Option<UnitId>) {
        assert!(self.is_inside(pos), "set out of bounds at {pos}");
        let idx = self.index(pos);
        self.tiles[idx] = occupant;
    }

    /// The in-bounds cells 8-adjacent to `pos`, in direction enumeration
    /// order (E, SE, S, SW, W, NW, N, NE).
    #[must_use]
    pub fn neighbors8(&self, pos: Coord) -> SmallVec<[Coord; 8]> {
        DIRECTIONS
            .iter()
            .map(|&d| pos.offset(d))
            .filter(|&n| self.is_inside(n))
            .collect()
    }

    /// All cells in row-major scan order (y outer, x inner).
    ///
    /// This is the order the combat scan visits acting units in, so it is
    /// part of the engine's observable behavior, not just a convenience.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }

    /// All occupied cells in scan order.
    pub fn occupants(&self) -> impl Iterator<Item = (Coord, UnitId)> + '_ {
        self.cells().filter_map(|pos| self.get(pos).map(|id| (pos, id)))
    }
}
