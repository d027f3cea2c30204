/// Direction the snake can move, in world axes (+x is Right, +y is Up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reversed(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Heading after a quarter turn counter-clockwise
    pub fn turned_left(&self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Heading after a quarter turn clockwise
    pub fn turned_right(&self) -> Direction {
        self.turned_left().reversed()
    }

    /// Returns the delta (dx, dy) for one step of `cell` world units
    pub fn delta(&self, cell: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, cell),
            Direction::Down => (0, -cell),
            Direction::Left => (-cell, 0),
            Direction::Right => (cell, 0),
        }
    }

    /// Parses a raw step vector. Anything but one of the four cardinal
    /// steps of exactly `cell` units yields `None`.
    pub fn from_delta(dx: i32, dy: i32, cell: i32) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.delta(cell) == (dx, dy))
    }
}

/// Discrete input events relayed from the host to the game.
///
/// Only the turn, restart, cheat and speed events touch simulation state;
/// the rest are consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    TurnUp,
    TurnDown,
    TurnLeft,
    TurnRight,
    Restart,
    ToggleCheat,
    ToggleView,
    SpeedUp,
    SpeedDown,
    RandomizeColors,
    RestoreColors,
    Quit,
}

impl InputEvent {
    /// The absolute direction carried by a turn event
    pub fn turn_direction(&self) -> Option<Direction> {
        match self {
            InputEvent::TurnUp => Some(Direction::Up),
            InputEvent::TurnDown => Some(Direction::Down),
            InputEvent::TurnLeft => Some(Direction::Left),
            InputEvent::TurnRight => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(40), (0, 40));
        assert_eq!(Direction::Down.delta(40), (0, -40));
        assert_eq!(Direction::Left.delta(40), (-40, 0));
        assert_eq!(Direction::Right.delta(40), (40, 0));
    }

    #[test]
    fn test_from_delta_accepts_only_cardinal_steps() {
        assert_eq!(Direction::from_delta(40, 0, 40), Some(Direction::Right));
        assert_eq!(Direction::from_delta(0, -40, 40), Some(Direction::Down));

        assert_eq!(Direction::from_delta(40, 40, 40), None);
        assert_eq!(Direction::from_delta(20, 0, 40), None);
        assert_eq!(Direction::from_delta(0, 0, 40), None);
        assert_eq!(Direction::from_delta(80, 0, 40), None);
    }

    #[test]
    fn test_relative_turns() {
        assert_eq!(Direction::Right.turned_left(), Direction::Up);
        assert_eq!(Direction::Right.turned_right(), Direction::Down);
        assert_eq!(Direction::Up.turned_right(), Direction::Right);
        for direction in Direction::ALL {
            assert_eq!(direction.turned_left().turned_right(), direction);
        }
    }

    #[test]
    fn test_turn_events() {
        assert_eq!(InputEvent::TurnLeft.turn_direction(), Some(Direction::Left));
        assert_eq!(InputEvent::Restart.turn_direction(), None);
    }
}
