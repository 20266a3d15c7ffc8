//! Battle setup: placements and the builder.
//!
//! A battle is initialized once from a static layout table mapping cells to
//! (archetype, side) pairs. `BattleBuilder::new()` is the stock 6x6
//! skirmish; `BattleBuilder::empty(w, h)` plus `with_unit` builds custom
//! boards (tests lean on this heavily).

use serde::{Deserialize, Serialize};

use super::Battle;
use crate::board::Board;
use crate::core::{Coord, Side};
use crate::error::SetupError;
use crate::events::EventLog;
use crate::turn::TurnState;
use crate::units::{UnitKind, UnitStore};

/// One row of the layout table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: Coord,
    pub kind: UnitKind,
    pub side: Side,
}

/// The stock back row, mirrored for both sides.
const BACK_ROW: [UnitKind; 6] = [
    UnitKind::Camel,
    UnitKind::Elephant,
    UnitKind::SkeletonKing,
    UnitKind::Wolf,
    UnitKind::Elephant,
    UnitKind::Camel,
];

/// Builder for a battle's board, roster, and initial turn state.
#[derive(Clone, Debug)]
pub struct BattleBuilder {
    width: i32,
    height: i32,
    placements: Vec<Placement>,
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleBuilder {
    /// The stock 6x6 skirmish: a back row of Camel, Elephant,
    /// SkeletonKing, Wolf, Elephant, Camel behind a full row of Skeletons,
    /// mirrored for the enemy. Rows in the lower half of the board belong
    /// to the enemy side.
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Self::empty(6, 6);
        for (x, &kind) in BACK_ROW.iter().enumerate() {
            let x = x as i32;
            builder = builder
                .with_unit(Coord::new(x, 0), kind, Side::Ally)
                .with_unit(Coord::new(x, 1), UnitKind::Skeleton, Side::Ally)
                .with_unit(Coord::new(x, 4), UnitKind::Skeleton, Side::Enemy)
                .with_unit(Coord::new(x, 5), kind, Side::Enemy);
        }
        builder
    }

    /// An empty board of the given dimensions.
    #[must_use]
    pub fn empty(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            placements: Vec::new(),
        }
    }

    /// Add one unit to the layout (builder pattern).
    #[must_use]
    pub fn with_unit(mut self, pos: Coord, kind: UnitKind, side: Side) -> Self {
        self.placements.push(Placement { pos, kind, side });
        self
    }

    /// The layout accumulated so far.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Validate the layout and build the battle.
    pub fn build(self) -> Result<Battle, SetupError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SetupError::BadDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let mut board = Board::new(self.width, self.height);
        let mut units = UnitStore::new();

        for placement in &self.placements {
            if !board.is_inside(placement.pos) {
                return Err(SetupError::OutOfBounds {
                    pos: placement.pos,
                    width: self.width,
                    height: self.height,
                });
            }
            if board.get(placement.pos).is_some() {
                return Err(SetupError::Overlap { pos: placement.pos });
            }
            let id = units.spawn(placement.kind, placement.side, placement.pos);
            board.set(placement.pos, Some(id));
        }

        Ok(Battle {
            board,
            units,
            turn: TurnState::new(),
            events: EventLog::new(),
        })
    }
}
