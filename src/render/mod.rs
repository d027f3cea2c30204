pub mod palette;
pub mod renderer;

pub use palette::SnakePalette;
pub use renderer::{Hud, Renderer};
