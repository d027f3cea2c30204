//! Cheat-mode steering.
//!
//! Picks the food item closest to the head by Manhattan distance and asks
//! for a turn toward it: along x until the columns line up, then along y.
//! Turns that would reverse the snake are still subject to the engine's
//! reversal check, so the heuristic can steer into a wall when the target
//! is directly behind the head.

use super::action::Direction;
use super::state::GameState;

/// Direction the autopilot wants to take this frame, if any food is present
pub fn steer(state: &GameState) -> Option<Direction> {
    let head = state.snake.head();

    let target = state
        .food
        .items()
        .into_iter()
        .min_by_key(|item| item.position.manhattan_distance(&head))?
        .position;

    let dx = target.x - head.x;
    let dy = target.y - head.y;

    if dx != 0 {
        Some(if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if dy != 0 {
        Some(if dy > 0 { Direction::Up } else { Direction::Down })
    } else {
        None
    }
}
