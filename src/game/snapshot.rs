use super::food::FoodItem;
use super::state::{GameState, Position};

/// Read-only view of the world handed to the presentation layer each frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Snake cells, head first
    pub snake: Vec<Position>,
    pub food: Vec<FoodItem>,
    pub score: u32,
    pub game_over: bool,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            snake: state.snake.body.clone(),
            food: state.food.items(),
            score: state.score,
            game_over: state.game_over,
        }
    }
}

impl Snapshot {
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::food::{FoodKind, FoodSlots};
    use crate::game::state::Snake;

    #[test]
    fn test_snapshot_copies_visible_state() {
        let mut state = GameState::new(
            Snake::new(Position::new(0, 0, 20), Direction::Right, 3, 40),
            FoodSlots {
                normal: Some(Position::new(200, 0, 20)),
                shrink: Some(Position::new(-200, 0, 20)),
                special: None,
            },
            600,
        );
        state.score = 7;

        let snapshot = Snapshot::from(&state);
        assert_eq!(snapshot.snake, state.snake.body);
        assert_eq!(snapshot.head(), Some(Position::new(0, 0, 20)));
        assert_eq!(snapshot.score, 7);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.food.len(), 2);
        assert_eq!(snapshot.food[0].kind, FoodKind::Normal);
        assert_eq!(snapshot.food[1].kind, FoodKind::Shrink);
    }
}
