//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Hosts own a [`GameState`], drive it through [`GameEngine`] once per frame, and read
//! it back through a [`Snapshot`].

pub mod action;
pub mod autopilot;
pub mod config;
pub mod engine;
pub mod food;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, InputEvent};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::{FoodItem, FoodKind, FoodSlots};
pub use snapshot::Snapshot;
pub use state::{CollisionType, Controls, GameState, Position, Snake};
