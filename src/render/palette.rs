use rand::Rng;
use ratatui::style::Color;

const HEAD_COLOR: Color = Color::Rgb(51, 230, 51);
const BODY_COLOR: Color = Color::Rgb(0, 153, 0);
/// Number of random colours cycled along the body
const RANDOM_CYCLE: usize = 16;

/// Per-segment snake colours, keyed by segment index
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnakePalette {
    random: Option<Vec<Color>>,
    previous: Option<Vec<Color>>,
}

impl SnakePalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_randomized(&self) -> bool {
        self.random.is_some()
    }

    /// Replace body colours with a fresh random cycle, remembering the old one
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let colors = (0..RANDOM_CYCLE)
            .map(|_| Color::Rgb(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        self.previous = self.random.replace(colors);
    }

    /// Go back to the colours in use before the last randomization
    pub fn restore(&mut self) {
        self.random = self.previous.take();
    }

    /// Colour of segment `index`, where 0 is the head
    pub fn color_for(&self, index: usize) -> Color {
        if index == 0 {
            return HEAD_COLOR;
        }
        match &self.random {
            Some(colors) => colors[(index - 1) % colors.len()],
            None => BODY_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_colors() {
        let palette = SnakePalette::new();
        assert!(!palette.is_randomized());
        assert_eq!(palette.color_for(0), HEAD_COLOR);
        assert_eq!(palette.color_for(3), BODY_COLOR);
    }

    #[test]
    fn test_randomize_and_restore() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut palette = SnakePalette::new();

        palette.randomize(&mut rng);
        assert!(palette.is_randomized());
        assert_eq!(palette.color_for(0), HEAD_COLOR);
        assert_eq!(palette.color_for(1), palette.color_for(1 + RANDOM_CYCLE));
        let first = palette.color_for(1);

        palette.randomize(&mut rng);
        palette.restore();
        assert_eq!(palette.color_for(1), first);

        palette.restore();
        assert!(!palette.is_randomized());
        assert_eq!(palette.color_for(1), BODY_COLOR);
    }
}
