//! Grid Snake - a snake game on a bounded grid with three kinds of food
//!
//! This library provides:
//! - Core game logic (game module): the step loop, turn queue, food and speed rules
//! - Terminal rendering of world snapshots (render module)
//! - Keyboard mapping to input events (input module)
//! - Interactive and headless execution modes (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
