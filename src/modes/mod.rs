pub mod autoplay;
pub mod human;

pub use autoplay::{AutoplayConfig, AutoplayMode, GameReport};
pub use human::HumanMode;
