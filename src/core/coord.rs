//! Grid coordinates and continuous board space.
//!
//! ## Coord
//!
//! `Coord` addresses one cell of the board. Coordinates are signed because
//! ray walks and neighbor scans routinely probe one step past the edges;
//! the board answers "empty" for anything out of bounds rather than
//! treating it as an error.
//!
//! ## Vec2
//!
//! `Vec2` is continuous board space measured in cell units. Pointer
//! positions and animated render positions live here; cell `(x, y)` renders
//! at `Vec2 { x, y }`. The presentation layer owns the conversion between
//! cell units and pixels.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// ```
/// use rust_tactics::core::Coord;
///
/// let c = Coord::new(2, 3);
/// assert_eq!(c.offset(Coord::new(1, -1)), Coord::new(3, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// The 8 compass unit vectors, in the engine's fixed enumeration order:
/// E, SE, S, SW, W, NW, N, NE, with y growing downward.
///
/// Move rays, neighbor scans, and therefore attack-queue ordering all use
/// this order.
pub const DIRECTIONS: [Coord; 8] = [
    Coord::new(1, 0),
    Coord::new(1, 1),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
    Coord::new(-1, -1),
    Coord::new(0, -1),
    Coord::new(1, -1),
];

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by another coordinate (used for direction steps).
    #[must_use]
    pub const fn offset(self, delta: Coord) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// The continuous position of this cell.
    #[must_use]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in continuous board space, in cell units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn dist(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation from `self` toward `other`.
    ///
    /// `t` is not clamped; the attack lunge relies on values outside
    /// `[0, 1]` never being produced by its curve rather than on clamping
    /// here.
    #[must_use]
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }

    /// Map a continuous position to the cell containing it.
    ///
    /// Floors each component, then clamps to the ring one step outside the
    /// board (`-1..=width`, `-1..=height`) so that far off-board pointer
    /// positions behave like clicks on an empty out-of-bounds cell instead
    /// of wrapping or overflowing.
    ///
    /// ```
    /// use rust_tactics::core::{Coord, Vec2};
    ///
    /// assert_eq!(Vec2::new(2.7, 0.1).to_cell(6, 6), Coord::new(2, 0));
    /// assert_eq!(Vec2::new(-40.0, 3.0).to_cell(6, 6), Coord::new(-1, 3));
    /// assert_eq!(Vec2::new(3.0, 99.0).to_cell(6, 6), Coord::new(3, 6));
    /// ```
    #[must_use]
    pub fn to_cell(self, width: i32, height: i32) -> Coord {
        Coord::new(
            (self.x.floor() as i32).clamp(-1, width),
            (self.y.floor() as i32).clamp(-1, height),
        )
    }
}
