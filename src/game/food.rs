//! Food kinds, their slots on the board, and the odds used to place them.

use super::state::Position;

/// Respawn draws below this value place a normal item
const RESPAWN_NORMAL_BELOW: f64 = 0.7;
/// Respawn draws below this value (and above the normal cut) place a special item
const RESPAWN_SPECIAL_BELOW: f64 = 0.9;
/// Opening draws below this value add a special item next to the first normal one
const OPENING_SPECIAL_BELOW: f64 = 0.2;
/// Opening draws below this value (and above the special cut) add a shrink item
const OPENING_SHRINK_BELOW: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    /// Grows the snake by one and scores one point
    Normal,
    /// Releases tail segments, scores nothing
    Shrink,
    /// Scores five points, length unchanged
    Special,
}

impl FoodKind {
    /// Order in which consumption is checked
    pub const PRIORITY: [FoodKind; 3] = [FoodKind::Normal, FoodKind::Special, FoodKind::Shrink];

    pub fn points(&self) -> u32 {
        match self {
            FoodKind::Normal => 1,
            FoodKind::Shrink => 0,
            FoodKind::Special => 5,
        }
    }

    /// Kind placed by the draw made after every consumption
    pub fn from_respawn_roll(roll: f64) -> FoodKind {
        if roll < RESPAWN_NORMAL_BELOW {
            FoodKind::Normal
        } else if roll < RESPAWN_SPECIAL_BELOW {
            FoodKind::Special
        } else {
            FoodKind::Shrink
        }
    }

    /// Extra kind placed at the start of a game, besides the guaranteed normal item
    pub fn from_opening_roll(roll: f64) -> Option<FoodKind> {
        if roll < OPENING_SPECIAL_BELOW {
            Some(FoodKind::Special)
        } else if roll < OPENING_SHRINK_BELOW {
            Some(FoodKind::Shrink)
        } else {
            None
        }
    }
}

/// A food item as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodItem {
    pub kind: FoodKind,
    pub position: Position,
}

/// One optional slot per food kind; at most one item of each kind exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoodSlots {
    pub normal: Option<Position>,
    pub shrink: Option<Position>,
    pub special: Option<Position>,
}

impl FoodSlots {
    pub fn get(&self, kind: FoodKind) -> Option<Position> {
        match kind {
            FoodKind::Normal => self.normal,
            FoodKind::Shrink => self.shrink,
            FoodKind::Special => self.special,
        }
    }

    fn slot_mut(&mut self, kind: FoodKind) -> &mut Option<Position> {
        match kind {
            FoodKind::Normal => &mut self.normal,
            FoodKind::Shrink => &mut self.shrink,
            FoodKind::Special => &mut self.special,
        }
    }

    /// Place an item, replacing any item of the same kind
    pub fn set(&mut self, kind: FoodKind, pos: Position) {
        *self.slot_mut(kind) = Some(pos);
    }

    pub fn clear(&mut self, kind: FoodKind) -> Option<Position> {
        self.slot_mut(kind).take()
    }

    /// First kind, in consumption priority, whose item sits on `pos`
    pub fn kind_at(&self, pos: Position) -> Option<FoodKind> {
        FoodKind::PRIORITY
            .into_iter()
            .find(|kind| self.get(*kind).is_some_and(|food| food.same_cell(&pos)))
    }

    /// Present items in consumption priority order
    pub fn items(&self) -> Vec<FoodItem> {
        FoodKind::PRIORITY
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|position| FoodItem { kind, position }))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.items().len()
    }
}
