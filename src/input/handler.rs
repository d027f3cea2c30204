use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputEvent};

/// How turn keys are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Arrow keys name absolute board directions
    #[default]
    Overhead,
    /// Arrow keys are relative to the snake's heading
    FirstPerson,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Overhead => ViewMode::FirstPerson,
            ViewMode::FirstPerson => ViewMode::Overhead,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Overhead => "overhead",
            ViewMode::FirstPerson => "first-person",
        }
    }

    /// Resolve a turn event into the board direction to queue.
    ///
    /// In first-person view Up keeps the heading, Down asks for a reversal
    /// (which the engine rejects), and Left/Right turn relative to `heading`.
    pub fn resolve_turn(self, event: InputEvent, heading: Direction) -> Option<Direction> {
        let absolute = event.turn_direction()?;
        let resolved = match self {
            ViewMode::Overhead => absolute,
            ViewMode::FirstPerson => match absolute {
                Direction::Up => heading,
                Direction::Down => heading.reversed(),
                Direction::Left => heading.turned_left(),
                Direction::Right => heading.turned_right(),
            },
        };
        Some(resolved)
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let event = match key.code {
            KeyCode::Up => InputEvent::TurnUp,
            KeyCode::Down => InputEvent::TurnDown,
            KeyCode::Left => InputEvent::TurnLeft,
            KeyCode::Right => InputEvent::TurnRight,

            KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Restart,
            KeyCode::Char('g') | KeyCode::Char('G') => InputEvent::ToggleCheat,
            KeyCode::Char('f') | KeyCode::Char('F') => InputEvent::ToggleView,
            KeyCode::Char('+') | KeyCode::Char('=') => InputEvent::SpeedUp,
            KeyCode::Char('-') | KeyCode::Char('_') => InputEvent::SpeedDown,
            KeyCode::Char('c') | KeyCode::Char('C') => InputEvent::RandomizeColors,
            KeyCode::Char('v') | KeyCode::Char('V') => InputEvent::RestoreColors,

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,

            _ => return None,
        };

        Some(event)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
