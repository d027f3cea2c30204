use super::action::Direction;
use super::food::FoodSlots;

/// A position on the game board, in world units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Move position by delta on the board plane
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction, cell: i32) -> Self {
        let (dx, dy) = direction.delta(cell);
        self.moved_by(dx, dy)
    }

    /// True when both positions share a board cell, ignoring elevation
    pub fn same_cell(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// True when `other` lies within `cell` units of self on both axes
    pub fn is_near(&self, other: &Position, cell: i32) -> bool {
        (self.x - other.x).abs() <= cell && (self.y - other.y).abs() <= cell
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose body trails behind `head`, opposite to `direction`
    pub fn new(head: Position, direction: Direction, length: usize, cell: i32) -> Self {
        let mut body = vec![head];

        let (back_dx, back_dy) = direction.reversed().delta(cell);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Segment directly behind the head, if any
    pub fn neck(&self) -> Option<Position> {
        self.body.get(1).copied()
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().iter().any(|seg| seg.same_cell(&pos))
    }

    /// Check if position lands on any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.iter().any(|seg| seg.same_cell(&pos))
    }

    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Drop the tail segment unconditionally
    pub fn drop_tail(&mut self) {
        self.body.pop();
    }

    /// Drop the tail segment unless that would leave fewer than `min_len`
    pub fn release_tail(&mut self, min_len: usize) -> bool {
        if self.body.len() > min_len {
            self.body.pop();
            true
        } else {
            false
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Player-adjustable settings that survive a restart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub speed_factor: f32,
    pub cheat_mode: bool,
}

/// Complete game state
///
/// Owned by the host and handed to [`GameEngine`](super::GameEngine)
/// operations by reference; nothing else mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub pending_turn: Option<Direction>,
    pub food: FoodSlots,
    pub grid_length: i32,
    pub score: u32,
    pub steps: u32,
    pub frame_counter: u32,
    pub game_over: bool,
    pub collision: Option<CollisionType>,
    pub controls: Controls,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: FoodSlots, grid_length: i32) -> Self {
        Self {
            snake,
            pending_turn: None,
            food,
            grid_length,
            score: 0,
            steps: 0,
            frame_counter: 0,
            game_over: false,
            collision: None,
            controls: Controls {
                speed_factor: 1.0,
                cheat_mode: false,
            },
        }
    }

    /// Check if a position is strictly inside the walls
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x.abs() < self.grid_length && pos.y.abs() < self.grid_length
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }
}
