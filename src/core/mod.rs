//! Core engine types: coordinates, directions, sides.
//!
//! The fundamental vocabulary shared by every other module. Nothing here
//! holds game state; `Board`, `UnitStore`, and `TurnState` build on these.

pub mod coord;
pub mod side;

pub use coord::{Coord, Vec2, DIRECTIONS};
pub use side::Side;
